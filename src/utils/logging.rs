use tracing::{debug, error, info};

/// Logs an incoming chat message with consistent format
pub fn log_incoming_message(chat_id: i64, chat_kind: &str, text: &str) {
    info!("MSG_IN: chat {} ({}): '{}'", chat_id, chat_kind, text);
}

/// Logs the reply sent back to a chat with consistent format
pub fn log_bot_response(chat_id: i64, response: &str) {
    info!("MSG_OUT: chat {}: '{}'", chat_id, response);
}

/// Logs database operations with consistent format
pub fn log_database_operation(operation: &str, table: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("DB_OP: {} on {} - {}", operation, table, d),
        None => debug!("DB_OP: {} on {}", operation, table),
    }
}

/// Logs database errors with consistent format
pub fn log_database_error(operation: &str, table: &str, error: &str) {
    error!("DB_ERROR: {} on {} failed: {}", operation, table, error);
}
