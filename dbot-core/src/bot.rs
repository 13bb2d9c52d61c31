//! Bot abstraction for outbound calls: messages, inline keyboards, callback acknowledgements.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide, tests substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, InlineButton, Message};
use async_trait::async_trait;

/// Outbound side of a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Sends a text message with a single-row inline keyboard.
    async fn send_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()>;

    /// Acknowledges a button press so the client stops showing a spinner.
    async fn answer_callback(&self, query_id: &str) -> Result<()>;
}
