//! Logs each update in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let username = message.user.username.as_deref().unwrap_or("unknown");
        match &message.kind {
            MessageKind::Command { name, .. } => info!(
                user_id = message.user.id,
                username = %username,
                command = %name,
                "Received command"
            ),
            MessageKind::Callback { data, .. } => info!(
                user_id = message.user.id,
                username = %username,
                data = ?data,
                "Received button press"
            ),
            MessageKind::Text => info!(
                user_id = message.user.id,
                username = %username,
                text_len = message.content.chars().count(),
                "Received text"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = ?message.id,
            response = ?response,
            "Processed update"
        );
        Ok(())
    }
}
