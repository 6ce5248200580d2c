use assetops_core::envelope::OperationResult;
use assetops_core::error::CoreError;

/// Error type for tool dispatch.
///
/// Wraps [`CoreError`] for operation failures and adds dispatch-specific
/// variants. Every variant becomes a failed [`OperationResult`].
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// An operation-level error from `assetops_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for tool handler return values.
pub type DispatchResult<T> = Result<T, DispatchError>;

impl From<DispatchError> for OperationResult {
    fn from(err: DispatchError) -> Self {
        OperationResult::failure(err.to_string())
    }
}
