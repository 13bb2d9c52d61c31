use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_dispatcher, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::{
    AskButtonHandler, HelpHandler, LoggingHandler, QuestionHandler, StartHandler,
};
use crate::health::start_health_server;
use crate::relay::Relay;
use crate::session::SessionStore;

/// Builds the router: logging, /start, /help, button press, free-text question (in that order).
/// `bot` is the outbound side; tests pass a recording mock.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    admin_chat_id: i64,
    sessions: SessionStore,
) -> HandlerChain {
    let relay = Relay::new(bot.clone(), admin_chat_id);
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(HelpHandler::new(bot.clone())))
        .add_handler(Arc::new(AskButtonHandler::new(bot.clone(), sessions.clone())))
        .add_handler(Arc::new(QuestionHandler::new(bot, sessions, relay)))
}

/// Main entry: init logging, validate config, start the liveness endpoint (if enabled), then poll Telegram.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(config.log_file.as_deref())?;
    config.validate()?;

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let sessions = SessionStore::new();
    let chain = build_handler_chain(bot, config.admin_chat_id, sessions);

    let _health = if config.health.enabled {
        let (addr, handle) = start_health_server(config.health.socket_addr()?).await?;
        info!(addr = %addr, "Liveness endpoint enabled");
        Some(handle)
    } else {
        info!("Liveness endpoint disabled");
        None
    };

    info!(admin_chat_id = config.admin_chat_id, "Bot started");

    run_dispatcher(teloxide_bot, chain).await
}
