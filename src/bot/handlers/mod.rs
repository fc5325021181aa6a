pub mod entry;
pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::database::connection::DatabaseManager;

/// Result type shared by all update handlers; errors bubbling out of an
/// endpoint are logged by the dispatcher's default error handler.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Wires incoming updates to their handlers. The database handle and the
/// bot mention string are injected at construction and cloned into the
/// endpoint closures, so no process-wide state is involved.
pub struct BotHandler {
    pub db: DatabaseManager,
    pub bot_username: String,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, bot_username: String) -> Self {
        Self { db, bot_username }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let db = self.db.clone();
        let bot_username = self.bot_username.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(message::command_handler),
            )
            .branch(Update::filter_message().endpoint(
                move |bot: Bot, msg: Message| {
                    let db = db.clone();
                    let bot_username = bot_username.clone();
                    async move { entry::handle_entry_message(bot, msg, db, bot_username).await }
                },
            ))
    }
}
