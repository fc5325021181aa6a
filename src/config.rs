use anyhow::{anyhow, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    /// Mention string (e.g. "@finax_bot") used to filter group messages.
    pub bot_username: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let bot_username = env::var("BOT_USERNAME")
            .map_err(|_| anyhow!("BOT_USERNAME must be set"))?;

        if bot_username.trim().is_empty() {
            return Err(anyhow!("BOT_USERNAME must be set"));
        }

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/finax.db".to_string());
        let database_url = if database_url.trim().is_empty() {
            "sqlite:./data/finax.db".to_string()
        } else {
            database_url
        };

        Ok(Config {
            telegram_bot_token: token,
            bot_username,
            database_url,
        })
    }
}
