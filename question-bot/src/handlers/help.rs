use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, instrument};

use crate::texts;

/// `/help`: static usage text, any session state.
pub struct HelpHandler {
    bot: Arc<dyn Bot>,
}

impl HelpHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for HelpHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command("help") {
            return Ok(HandlerResponse::Ignore);
        }

        if let Err(e) = self.bot.reply_to(message, texts::HELP).await {
            error!(error = %e, "Error in help handler");
        }
        Ok(HandlerResponse::Stop)
    }
}
