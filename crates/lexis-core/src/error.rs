/// Failures surfaced by the extractors and the lookup service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Secondary cross-reference fetch failed. Logged and swallowed, never returned to callers.
    #[error("Cross-reference fetch degraded: {0}")]
    FetchDegraded(String),
}

/// Resource bundle loading failures
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format in {path} at line {line}: {reason}")]
    InvalidFormat {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
