//! # question-bot
//!
//! Greets a user, collects one free-text question after an inline button press and relays it to a
//! fixed admin chat. A liveness endpoint runs alongside the Telegram dispatcher.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod health;
pub mod relay;
pub mod runner;
pub mod session;
pub mod texts;

pub use cli::{Cli, Commands};
pub use config::{BotConfig, HealthConfig};
pub use relay::{QuestionEvent, Relay, RelayOutcome};
pub use runner::{build_handler_chain, run_bot};
pub use session::{SessionState, SessionStore};
