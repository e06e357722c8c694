//! Row model error types

/// Errors raised while loading metric rows or resolving resource kinds.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The metrics snapshot is not valid JSON for the row model.
    #[error("Metrics parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A resource kind string did not name any known kind.
    #[error("Unknown resource kind: {0}")]
    UnknownResource(String),
}
