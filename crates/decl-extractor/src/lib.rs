pub mod config;
pub mod error;
pub mod extract;
pub mod frontend;
pub mod report;

pub use config::{Config, LogLevel};
pub use error::{ExtractError, Result};
pub use extract::{DeclKind, DeclRecord, collect_records};
pub use frontend::{FrontendOptions, MainFile, Node, parse_tree, run_ast_dump};
pub use report::{ReportOptions, emit};
