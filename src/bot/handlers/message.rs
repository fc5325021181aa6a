use teloxide::prelude::*;

use crate::bot::commands::{Command, HELP_TEXT, WELCOME_TEXT};
use crate::bot::handlers::HandlerResult;

pub async fn command_handler(bot: Bot, msg: Message, cmd: Command) -> HandlerResult {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, WELCOME_TEXT).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, HELP_TEXT).await?;
        }
    }
    Ok(())
}
