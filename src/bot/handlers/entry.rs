use teloxide::prelude::*;
use teloxide::types::Chat;
use tracing::error;

use crate::bot::handlers::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::BetEntry;
use crate::error::BotError;
use crate::utils::format::confirmation;
use crate::utils::logging::{log_bot_response, log_incoming_message};
use crate::utils::parse::parse_entry;

const GENERIC_ERROR_TEXT: &str =
    "❌ An error occurred while processing your entry. Please try again later.";

/// Handles a plain-text (non-command) message: mention filtering, parse,
/// insert, reply. This is the outermost error boundary; every failure is
/// converted into a reply string here and nothing else crosses back into
/// the transport.
pub async fn handle_entry_message(
    bot: Bot,
    msg: Message,
    db: DatabaseManager,
    bot_username: String,
) -> HandlerResult {
    let Some(raw_text) = msg.text() else {
        return Ok(());
    };

    let chat_id = msg.chat.id;
    log_incoming_message(chat_id.0, chat_kind(&msg.chat), raw_text);

    let is_group = msg.chat.is_group() || msg.chat.is_supergroup();
    let Some(text) = mention_filtered_text(raw_text, is_group, &bot_username) else {
        // Group chatter not addressed to the bot: stay silent.
        return Ok(());
    };

    let response = match record_entry(&text, &db).await {
        Ok(entry) => format!("✅ Entry recorded successfully!\n{}", confirmation(&entry)),
        Err(BotError::InvalidFormat(reason)) => {
            error!("Message parsing error: {}", reason);
            format!("❌ Error: {reason}")
        }
        Err(err) => {
            error!("Server error: {}", err);
            GENERIC_ERROR_TEXT.to_string()
        }
    };

    log_bot_response(chat_id.0, &response);
    bot.send_message(chat_id, response).await?;
    Ok(())
}

async fn record_entry(text: &str, db: &DatabaseManager) -> Result<BetEntry, BotError> {
    let slip = parse_entry(text)?;
    BetEntry::insert(&db.pool, &slip).await
}

/// Applies group mention filtering and returns the text to parse.
///
/// In group chats a message is ignored entirely unless it contains the bot
/// mention string. Whenever the mention is present (group or private) it is
/// stripped before parsing.
fn mention_filtered_text(text: &str, is_group: bool, bot_username: &str) -> Option<String> {
    let text = text.trim();

    if is_group && !text.contains(bot_username) {
        return None;
    }

    let text = if text.contains(bot_username) {
        text.replace(bot_username, "")
    } else {
        text.to_string()
    };

    Some(text.trim().to_string())
}

fn chat_kind(chat: &Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENTION: &str = "@finax_bot";

    #[test]
    fn test_group_message_without_mention_is_ignored() {
        assert_eq!(
            mention_filtered_text("alice 42 7 1234 3 5 b", true, MENTION),
            None
        );
    }

    #[test]
    fn test_group_message_with_mention_is_stripped() {
        assert_eq!(
            mention_filtered_text("@finax_bot alice 42 7 1234 3 5 b", true, MENTION),
            Some("alice 42 7 1234 3 5 b".to_string())
        );
    }

    #[test]
    fn test_mention_in_the_middle_is_stripped() {
        // The mention can sit anywhere in the text
        assert_eq!(
            mention_filtered_text("alice 42 7 @finax_bot 1234 3 5 b", true, MENTION),
            Some("alice 42 7  1234 3 5 b".to_string())
        );
    }

    #[test]
    fn test_private_message_without_mention_passes_through() {
        assert_eq!(
            mention_filtered_text("alice 42 7 1234 3 5 b", false, MENTION),
            Some("alice 42 7 1234 3 5 b".to_string())
        );
    }

    #[test]
    fn test_private_message_with_mention_is_stripped() {
        assert_eq!(
            mention_filtered_text("@finax_bot alice 42 7 1234 3 5 b", false, MENTION),
            Some("alice 42 7 1234 3 5 b".to_string())
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(
            mention_filtered_text("  alice 42 7 1234 3 5 b \n", false, MENTION),
            Some("alice 42 7 1234 3 5 b".to_string())
        );
    }
}
