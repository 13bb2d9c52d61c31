//! Handlers making up the router: logging first, then one handler per update type.
//! Each returns Ignore for updates it does not own and Stop once it has handled one.

mod ask_button;
mod help;
mod logging;
mod question;
mod start;

pub use ask_button::AskButtonHandler;
pub use help::HelpHandler;
pub use logging::LoggingHandler;
pub use question::QuestionHandler;
pub use start::StartHandler;

use dbot_core::{Bot, Message};
use tracing::error;

/// Best-effort reply used on error paths; a failure here is only logged.
pub(crate) async fn reply_or_log(bot: &dyn Bot, message: &Message, text: &str) {
    if let Err(e) = bot.reply_to(message, text).await {
        error!(error = %e, user_id = message.user.id, chat_id = message.chat.id, "Failed to send reply");
    }
}
