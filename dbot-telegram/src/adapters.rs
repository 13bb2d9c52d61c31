//! Adapters from Telegram (teloxide) types to dbot_core types.
//! Depends only on teloxide and dbot_core type definitions.

use dbot_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};
use teloxide::types::MessageEntityKind;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`], with this bot's username (if
/// known) so commands addressed to other bots can be told apart.
///
/// A command is recognized only from a `bot_command` entity at offset 0; other text starting with
/// `/` stays Text. Messages without a user sender, or sent on behalf of a chat (anonymous group
/// admins, channels), convert to None.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message, pub Option<&'a str>);

impl<'a> TelegramMessageWrapper<'a> {
    fn starts_with_command(&self) -> bool {
        self.0.entities().is_some_and(|entities| {
            entities
                .iter()
                .any(|e| e.offset == 0 && e.kind == MessageEntityKind::BotCommand)
        })
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<Message> {
        let msg = self.0;
        if msg.sender_chat.is_some() {
            return None;
        }
        let user = TelegramUserWrapper(msg.from.as_ref()?).to_core();

        let content = msg.text().unwrap_or("").to_string();
        let kind = if self.starts_with_command() {
            MessageKind::classify(&content, self.1)
        } else {
            MessageKind::Text
        };

        Some(Message {
            id: msg.id.to_string(),
            user,
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: chat_type_label(&msg.chat),
            },
            kind,
            content,
            created_at: msg.date,
        })
    }
}

/// Wraps a teloxide CallbackQuery (inline button press) for conversion to core [`Message`] with
/// [`MessageKind::Callback`]. The chat is the one holding the pressed keyboard, or the user's
/// private chat when the keyboard message is not attached (inline-mode messages).
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Option<Message> {
        let query = self.0;
        let user = TelegramUserWrapper(&query.from).to_core();
        let chat = query
            .message
            .as_ref()
            .map(|m| Chat {
                id: m.chat().id.0,
                chat_type: chat_type_label(m.chat()),
            })
            .unwrap_or_else(|| Chat::private(user.id));
        let query_id = query.id.to_string();

        Some(Message {
            id: query_id.clone(),
            user,
            chat,
            content: String::new(),
            kind: MessageKind::Callback {
                query_id,
                data: query.data.clone(),
            },
            created_at: chrono::Utc::now(),
        })
    }
}

fn chat_type_label(chat: &teloxide::types::Chat) -> String {
    if chat.is_private() {
        "private"
    } else if chat.is_group() || chat.is_supergroup() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
    .to_string()
}
