use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an extraction run.
///
/// Recoverable source errors never surface here: the front-end reports them
/// as diagnostics and still hands back a best-effort tree, which the
/// extractor traverses normally.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("source file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to launch front-end `{binary}`: {source}")]
    FrontendUnavailable {
        binary: String,
        source: std::io::Error,
    },

    /// The front-end could not produce any syntax tree at all.
    #[error("front-end produced no usable syntax tree: {detail}")]
    ParseFailure { detail: String },

    #[error("malformed syntax tree from front-end: {0}")]
    BadAst(#[from] serde_json::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
