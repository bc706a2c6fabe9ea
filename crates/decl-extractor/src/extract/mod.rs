//! Extraction core: classification, signature rendering, the
//! definition-vs-declaration predicate and the traversal driver.

mod classify;
mod definition;
mod record;
mod signature;
mod walker;

pub use classify::{NodeClass, classify};
pub use definition::is_defining_occurrence;
pub use record::{DeclKind, DeclRecord};
pub use signature::render_signature;
pub use walker::collect_records;
