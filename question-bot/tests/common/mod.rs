pub mod mock_bot;

use chrono::Utc;
use dbot_core::{Chat, Message, MessageKind, User};

pub const ADMIN_ID: i64 = 999_000;
pub const USER_ID: i64 = 4242;
pub const BOT_USERNAME: &str = "psycho_bot";

pub fn user(username: Option<&str>) -> User {
    User {
        id: USER_ID,
        username: username.map(str::to_string),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

/// A text or command message from [`USER_ID`] in their private chat, classified as the
/// Telegram adapter does for a bot named [`BOT_USERNAME`].
pub fn text_message(username: Option<&str>, text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: user(username),
        chat: Chat::private(USER_ID),
        content: text.to_string(),
        kind: MessageKind::classify(text, Some(BOT_USERNAME)),
        created_at: Utc::now(),
    }
}

/// A button press from [`USER_ID`].
pub fn callback(data: &str) -> Message {
    Message {
        id: "cb-1".to_string(),
        user: user(Some("tester")),
        chat: Chat::private(USER_ID),
        content: String::new(),
        kind: MessageKind::Callback {
            query_id: "cb-1".to_string(),
            data: Some(data.to_string()),
        },
        created_at: Utc::now(),
    }
}
