//! Mock implementation of [`dbot_core::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on what was sent, to whom, and in which order
//! without hitting Telegram. Sends to a chat listed in `fail_chats`, or with a text listed in
//! `fail_texts`, return an error and are not recorded.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, InlineButton, Result};
use std::collections::HashSet;
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    WithButtons { chat_id: i64, text: String, buttons: Vec<InlineButton> },
    CallbackAnswer { query_id: String },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_chats: Mutex<HashSet<i64>>,
    fail_texts: Mutex<HashSet<String>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every send to `chat_id` fail from now on.
    pub fn fail_sends_to(&self, chat_id: i64) {
        self.fail_chats.lock().unwrap().insert(chat_id);
    }

    /// Makes every send of exactly `text` fail, whatever the chat.
    pub fn fail_text(&self, text: &str) {
        self.fail_texts.lock().unwrap().insert(text.to_string());
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    /// Texts (plain or with buttons) sent to `chat_id`, in order.
    pub fn texts_to(&self, chat_id: i64) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { chat_id: id, text } | Sent::WithButtons { chat_id: id, text, .. }
                    if id == chat_id =>
                {
                    Some(text)
                }
                _ => None,
            })
            .collect()
    }

    fn check(&self, chat_id: i64, text: &str) -> Result<()> {
        if self.fail_chats.lock().unwrap().contains(&chat_id) {
            return Err(DbotError::Bot(format!("chat {} unreachable", chat_id)));
        }
        if self.fail_texts.lock().unwrap().contains(text) {
            return Err(DbotError::Bot("message rejected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.check(chat.id, text)?;
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_with_buttons(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[InlineButton],
    ) -> Result<()> {
        self.check(chat.id, text)?;
        self.sent.lock().unwrap().push(Sent::WithButtons {
            chat_id: chat.id,
            text: text.to_string(),
            buttons: buttons.to_vec(),
        });
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::CallbackAnswer {
            query_id: query_id.to_string(),
        });
        Ok(())
    }
}
