#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Source directory not found: {0}")]
    SourceDirectoryNotFound(String),

    #[error("No available locator for {locator} after {attempts} suffixed candidates")]
    ProbeExhausted { locator: String, attempts: u32 },

    /// A collaborator call failed. The message is the collaborator's own,
    /// passed through unmodified.
    #[error("{0}")]
    Store(String),

    /// A filesystem call made on behalf of the scanner failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Declared in the tool catalog but not backed by the asset store.
    #[error("{0}")]
    Unsupported(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
