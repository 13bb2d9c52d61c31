use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use super::reply_or_log;
use crate::relay::{QuestionEvent, Relay, RelayOutcome};
use crate::session::SessionStore;
use crate::texts;

/// Free text: relayed to the admin only while the user is awaiting a question, otherwise ignored.
///
/// The pending flag is claimed before the send, so it is cleared whatever the relay outcome.
pub struct QuestionHandler {
    bot: Arc<dyn Bot>,
    sessions: SessionStore,
    relay: Relay,
}

impl QuestionHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: SessionStore, relay: Relay) -> Self {
        Self {
            bot,
            sessions,
            relay,
        }
    }
}

#[async_trait]
impl Handler for QuestionHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        // Non-text updates arrive as Text with no content.
        if message.kind != MessageKind::Text || message.content.is_empty() {
            return Ok(HandlerResponse::Ignore);
        }

        if !self.sessions.take_question(message.user.id).await {
            debug!("Text while idle, ignoring");
            return Ok(HandlerResponse::Ignore);
        }

        let event = QuestionEvent::from_message(message);
        match self.relay.forward(&event).await {
            RelayOutcome::Delivered => {
                if let Err(e) = self.bot.reply_to(message, texts::CONFIRMATION).await {
                    error!(error = %e, "Failed to confirm relayed question");
                    reply_or_log(self.bot.as_ref(), message, texts::GENERIC_ERROR).await;
                }
            }
            RelayOutcome::Failed(reason) => {
                error!(reason = %reason, "Error in question handler");
                reply_or_log(self.bot.as_ref(), message, texts::QUESTION_ERROR).await;
            }
        }
        Ok(HandlerResponse::Stop)
    }
}
