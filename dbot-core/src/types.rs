//! Core types: user, chat, message, inline button, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    /// Private chat with the given id. Used for outbound targets known only by id (e.g. the admin).
    pub fn private(id: i64) -> Self {
        Self {
            id,
            chat_type: "private".to_string(),
        }
    }
}

/// What kind of update a [`Message`] carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// Plain text that is not a command.
    Text,
    /// Bot command; `name` is lowercased, without the leading `/` and any `@botname` suffix.
    /// `for_this_bot` is false when the command names another bot (`/start@OtherBot`).
    Command { name: String, for_this_bot: bool },
    /// Inline keyboard button press.
    Callback {
        query_id: String,
        data: Option<String>,
    },
}

fn is_command_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl MessageKind {
    /// Classifies message text without knowing the bot's username: any `@mention` is taken as
    /// addressed to us. See [`MessageKind::classify`].
    pub fn from_text(text: &str) -> Self {
        Self::classify(text, None)
    }

    /// Classifies message text. A command is `/` directly followed by `[A-Za-z0-9_]+`, optionally
    /// followed by `@botname`; everything else (including `/ start` or `/помогите`) is Text.
    /// With `bot_username` set, a command mentioning a different bot is marked not for us.
    pub fn classify(text: &str, bot_username: Option<&str>) -> Self {
        let Some(rest) = text.strip_prefix('/') else {
            return MessageKind::Text;
        };
        let name_len = rest.find(|c: char| !is_command_char(c)).unwrap_or(rest.len());
        if name_len == 0 {
            return MessageKind::Text;
        }
        let (name, after) = rest.split_at(name_len);

        let mention = after.strip_prefix('@').map(|m| {
            let len = m.find(|c: char| !is_command_char(c)).unwrap_or(m.len());
            &m[..len]
        });
        let for_this_bot = match (mention, bot_username) {
            (Some(m), Some(me)) if !m.is_empty() => m.eq_ignore_ascii_case(me),
            _ => true,
        };

        MessageKind::Command {
            name: name.to_ascii_lowercase(),
            for_this_bot,
        }
    }
}

/// A single incoming update (text, command, or button press) with user, chat and content.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for callbacks and non-text messages.
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Returns true if this is the command `name` (without `/`) addressed to this bot.
    pub fn is_command(&self, name: &str) -> bool {
        matches!(
            &self.kind,
            MessageKind::Command { name: n, for_this_bot: true } if n == name
        )
    }

    /// Returns `(query_id, data)` if this is a button press.
    pub fn callback(&self) -> Option<(&str, Option<&str>)> {
        match &self.kind {
            MessageKind::Callback { query_id, data } => Some((query_id, data.as_deref())),
            _ => None,
        }
    }
}

/// One inline keyboard button: label and callback payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn callback(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
/// Returns None for updates without an identifiable user sender.
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Option<Message>;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Name used in chain logs. Defaults to the implementing type's path.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
