//! Update dispatcher: long-polls Telegram, converts messages and callback queries to core::Message
//! and passes them to the HandlerChain.

use std::sync::Arc;

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};
use tracing::{debug, error, info, instrument};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// This bot's username from `getMe`; None when the call failed at startup.
#[derive(Clone, Default)]
struct BotUsername(Option<Arc<str>>);

/// Runs the dispatcher until ctrl-c. Only `message` and `callback_query` updates are routed.
/// Updates from the same chat are handled one at a time, in arrival order.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let username = match bot.get_me().await {
        Ok(me) => {
            info!(username = ?me.user.username, "Connected to Telegram");
            BotUsername(me.user.username.as_deref().map(Arc::from))
        }
        Err(e) => {
            error!(error = %e, "getMe failed; commands addressed to any bot will be accepted");
            BotUsername::default()
        }
    };

    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler_chain, username])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(
    msg: Message,
    chain: HandlerChain,
    username: BotUsername,
) -> ResponseResult<()> {
    let Some(core_msg) = TelegramMessageWrapper(&msg, username.0.as_deref()).to_core() else {
        debug!(chat_id = msg.chat.id.0, "Skipping message without a user sender");
        return Ok(());
    };

    debug!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        text_len = core_msg.content.chars().count(),
        "Received message"
    );

    if let Err(e) = chain.handle(&core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
    }
    Ok(())
}

async fn on_callback_query(query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    let Some(core_msg) = TelegramCallbackWrapper(&query).to_core() else {
        return Ok(());
    };

    debug!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        data = ?query.data,
        "Received callback query"
    );

    if let Err(e) = chain.handle(&core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
    }
    Ok(())
}
