use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, InlineButton, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::reply_or_log;
use crate::texts;

/// `/start`: welcome text with the single "ask a question" button. Session is not touched.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    pub fn ask_button() -> InlineButton {
        InlineButton::callback(texts::ASK_BUTTON_TEXT, texts::ASK_QUESTION_CALLBACK)
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command("start") {
            return Ok(HandlerResponse::Ignore);
        }

        match self
            .bot
            .send_with_buttons(&message.chat, texts::WELCOME, &[Self::ask_button()])
            .await
        {
            Ok(()) => info!(chat_id = message.chat.id, "Sent welcome"),
            Err(e) => {
                error!(error = %e, "Error in start handler");
                reply_or_log(self.bot.as_ref(), message, texts::GENERIC_ERROR).await;
            }
        }
        Ok(HandlerResponse::Stop)
    }
}
