//! # FINAX Bot
//!
//! A Telegram bot that records lottery bet entries sent as plain text messages.
//!
//! ## Pipeline
//! - Parse a fixed-format 7-field message into a bet slip
//! - Insert the slip into the store, reading back generated fields in the same round trip
//! - Reply with a formatted confirmation or a validation/operational error
//!
//! Persistent storage is SQLite via sqlx; the Telegram transport is teloxide
//! long polling.

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Typed errors for the parse/persist pipeline
pub mod error;
/// Utility functions for parsing, formatting, and logging
pub mod utils;
