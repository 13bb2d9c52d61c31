//! Relay of a submitted question to the admin chat.

use chrono::{DateTime, Local, Utc};
use dbot_core::{Bot, Chat, Message};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::texts;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A question as submitted by a user; built once per qualifying message, forwarded once, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionEvent {
    pub user_id: i64,
    pub username: Option<String>,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl QuestionEvent {
    pub fn from_message(message: &Message) -> Self {
        Self {
            user_id: message.user.id,
            username: message.user.username.clone(),
            text: message.content.clone(),
            timestamp: message.created_at,
        }
    }

    /// Sender as shown to the admin: `@username` or the anonymous placeholder.
    pub fn sender_label(&self) -> String {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => format!("@{}", name),
            _ => texts::ANONYMOUS_USER.to_string(),
        }
    }

    /// Timestamp in server local time.
    pub fn local_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    /// Admin message; the question text is the verbatim tail.
    pub fn format_for_admin(&self) -> String {
        format!(
            "{header}\n\n{from} {sender}\nID: {id}\n{time} {ts}\n\n{question}\n{text}",
            header = texts::ADMIN_HEADER,
            from = texts::ADMIN_FROM,
            sender = self.sender_label(),
            id = self.user_id,
            time = texts::ADMIN_TIME,
            ts = self.local_timestamp(),
            question = texts::ADMIN_QUESTION,
            text = self.text,
        )
    }
}

/// Result of a single best-effort send to the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Delivered,
    Failed(String),
}

/// Forwards questions to the fixed admin chat. One attempt, no retries.
#[derive(Clone)]
pub struct Relay {
    bot: Arc<dyn Bot>,
    admin_chat: Chat,
}

impl Relay {
    pub fn new(bot: Arc<dyn Bot>, admin_chat_id: i64) -> Self {
        Self {
            bot,
            admin_chat: Chat::private(admin_chat_id),
        }
    }

    #[instrument(skip(self, event), fields(user_id = event.user_id))]
    pub async fn forward(&self, event: &QuestionEvent) -> RelayOutcome {
        match self
            .bot
            .send_message(&self.admin_chat, &event.format_for_admin())
            .await
        {
            Ok(()) => {
                info!(admin_chat_id = self.admin_chat.id, "Question relayed to admin");
                RelayOutcome::Delivered
            }
            Err(e) => {
                error!(error = %e, admin_chat_id = self.admin_chat.id, "Failed to relay question");
                RelayOutcome::Failed(e.to_string())
            }
        }
    }
}
