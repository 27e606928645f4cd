//! Error types

use thiserror::Error;

/// Errors raised by wikinote operations
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed or written
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// `create-file` was invoked without a selection
    #[error("{}", crate::constants::MSG_NO_SELECTION)]
    EmptySelection,

    /// `toggle-embedding-notes` was invoked on something that is not markdown
    #[error("Not a markdown document: {0}")]
    NotMarkdown(String),

    /// A vault-relative path tried to leave the vault
    #[error("Path escapes the vault: {0}")]
    PathEscape(String),

    /// Note creation was refused because the flow is not ready
    #[error("{0}")]
    Refused(&'static str),
}

/// Specialized Result type for wikinote operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error is a storage collision (target already exists)
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::AlreadyExists)
    }
}
