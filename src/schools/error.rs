use thiserror::Error;

/// Errors that can occur when decoding a wire action.
#[derive(Debug, Error)]
pub enum ActionDecodeError {
    #[error("Action is not an object with a string 'type' field")]
    MissingType,

    #[error("Invalid payload for action '{tag}': {source}")]
    Payload {
        tag: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse action JSON: {0}")]
    Json(#[from] serde_json::Error),
}
