//! # FINAX Bot Main Entry Point
//!
//! Initializes logging, loads configuration, sets up the database, and runs
//! the Telegram bot with long polling until shutdown.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod database;
mod error;
mod utils;

use crate::bot::handlers::BotHandler;
use crate::config::Config;
use crate::database::connection::DatabaseManager;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finax_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting FINAX bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Database: {}, Bot username: {}",
        config.database_url, config.bot_username
    );

    // Initialize database
    info!("Initializing database connection...");
    let db = DatabaseManager::new(&config.database_url).await?;
    info!("Running database migrations...");
    db.run_migrations().await?;
    info!("Database initialized successfully");

    // Initialize bot
    info!("Initializing Telegram bot...");
    let telegram_bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(db, config.bot_username.clone());
    info!("Telegram bot initialized successfully");

    info!("Polling...");
    Dispatcher::builder(telegram_bot, handler.schema())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Application stopped");
    Ok(())
}
