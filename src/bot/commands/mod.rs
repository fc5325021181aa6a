use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "FINAX bot commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Display the bet entry message format")]
    Help,
}

/// Usage text sent in reply to /help.
pub const HELP_TEXT: &str =
    "Enter your message in the format:\n<username> <user ID> <draw> <entry> <type id> <amount> <b / s>";

/// Greeting sent in reply to /start.
pub const WELCOME_TEXT: &str = "Welcome to FINAX!";
