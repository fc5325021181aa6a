/// Slash command definitions
pub mod commands;
/// Update handler tree and message pipeline
pub mod handlers;
