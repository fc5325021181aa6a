use thiserror::Error;

/// Errors produced by the parse/persist pipeline.
///
/// `InvalidFormat` carries text safe to echo back to the chat; everything
/// else is logged in full server-side and surfaced to the user as a generic
/// failure message.
#[derive(Debug, Error)]
pub enum BotError {
    /// The message did not match the expected 7-field format.
    #[error("{0}")]
    InvalidFormat(String),

    /// Connectivity failure, constraint violation, or a RETURNING row that
    /// did not decode. Never shown to the user verbatim.
    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl BotError {
    pub fn invalid_format() -> Self {
        BotError::InvalidFormat(
            "Invalid message format. Please enter /help for message format.".to_string(),
        )
    }
}
