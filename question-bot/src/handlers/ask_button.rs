use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::session::SessionStore;
use crate::texts;

/// Button press: acknowledge the callback, prompt for the question, mark the user as awaiting one.
/// Failures are logged only; the user gets no error reply here.
pub struct AskButtonHandler {
    bot: Arc<dyn Bot>,
    sessions: SessionStore,
}

impl AskButtonHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: SessionStore) -> Self {
        Self { bot, sessions }
    }
}

#[async_trait]
impl Handler for AskButtonHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some((query_id, data)) = message.callback() else {
            return Ok(HandlerResponse::Ignore);
        };

        // Answer every press, known or not, so the client clears its spinner.
        if let Err(e) = self.bot.answer_callback(query_id).await {
            error!(error = %e, "Failed to answer callback query");
        }

        if data != Some(texts::ASK_QUESTION_CALLBACK) {
            warn!(data = ?data, "Unknown callback data, ignoring");
            return Ok(HandlerResponse::Stop);
        }

        match self.bot.send_message(&message.chat, texts::QUESTION_PROMPT).await {
            Ok(()) => {
                self.sessions.begin_question(message.user.id).await;
                info!("Awaiting question");
            }
            Err(e) => error!(error = %e, "Error in button handler"),
        }
        Ok(HandlerResponse::Stop)
    }
}
