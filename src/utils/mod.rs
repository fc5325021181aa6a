/// Confirmation message rendering
pub mod format;
/// Structured logging helpers
pub mod logging;
/// Bet message parsing and validation
pub mod parse;
