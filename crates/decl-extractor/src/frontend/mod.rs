//! Front-end adapter: drives the external Clang parser/sema service and
//! exposes its tree, type strings and source locations to the extraction
//! core.

mod clang_nodes;
mod compiler;
mod diagnostics;
mod location;

pub use clang_nodes::{Clang, DeclData, Node, QualType};
pub use compiler::{FrontendOptions, build_dump_args, parse_tree, run_ast_dump};
pub use diagnostics::{Diagnostic, DiagnosticParser, Severity, log_diagnostics};
pub use location::{MainFile, SourcePos, is_system_header, resolve_spelling};
