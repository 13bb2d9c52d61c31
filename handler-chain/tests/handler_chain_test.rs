//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: routing by Ignore/Stop, before stopping the chain, Reply being passed to after,
//! before/after ordering across handlers, and handler errors propagating to the caller.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use dbot_core::{Chat, DbotError, Handler, HandlerResponse, Message, MessageKind, User};
use handler_chain::HandlerChain;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat::private(456),
        kind: MessageKind::from_text(content),
        created_at: Utc::now(),
    }
}

/// Claims only the given command; ignores everything else and counts claims.
struct CommandHandler {
    command: &'static str,
    handled: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, message: &Message) -> dbot_core::Result<HandlerResponse> {
        if !message.is_command(self.command) {
            return Ok(HandlerResponse::Ignore);
        }
        self.handled.fetch_add(1, Ordering::SeqCst);
        Ok(HandlerResponse::Stop)
    }
}

/// **Test: An update is routed to the one handler that claims it.**
///
/// **Setup:** Two command handlers (`start`, `help`).
/// **Action:** `chain.handle("/help")`.
/// **Expected:** result is Stop; only the help handler ran.
#[tokio::test]
async fn test_chain_routes_to_claiming_handler() {
    let start = Arc::new(AtomicUsize::new(0));
    let help = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CommandHandler { command: "start", handled: start.clone() }))
        .add_handler(Arc::new(CommandHandler { command: "help", handled: help.clone() }));

    let result = chain.handle(&create_test_message("/help")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(start.load(Ordering::SeqCst), 0);
    assert_eq!(help.load(Ordering::SeqCst), 1);
}

/// **Test: When nobody claims the update the chain returns Continue.**
#[tokio::test]
async fn test_unclaimed_update_returns_continue() {
    let start = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(CommandHandler { command: "start", handled: start.clone() }));

    let result = chain.handle(&create_test_message("just text")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(start.load(Ordering::SeqCst), 0);
}

/// **Test: Stop from an earlier handler prevents later handlers from handling.**
#[tokio::test]
async fn test_stop_prevents_later_handlers() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CommandHandler { command: "start", handled: first.clone() }))
        .add_handler(Arc::new(CommandHandler { command: "start", handled: second.clone() }));

    chain.handle(&create_test_message("/start")).await.unwrap();

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
}

/// **Test: Handler before returns false stops the chain; handle is not run.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> dbot_core::Result<bool> {
            Ok(false)
        }
    }

    let handled = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(CommandHandler { command: "start", handled: handled.clone() }));

    let result = chain.handle(&create_test_message("/start")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handled.load(Ordering::SeqCst), 0);
}

/// **Test: Handler returns Reply; chain stops and Reply is passed to after.**
#[tokio::test]
async fn test_reply_is_passed_to_after() {
    struct ReplyHandler;

    #[async_trait::async_trait]
    impl Handler for ReplyHandler {
        async fn handle(&self, _message: &Message) -> dbot_core::Result<HandlerResponse> {
            Ok(HandlerResponse::Reply("done".to_string()))
        }
    }

    struct CaptureResponse {
        seen: Arc<Mutex<Option<HandlerResponse>>>,
    }

    #[async_trait::async_trait]
    impl Handler for CaptureResponse {
        async fn after(&self, _message: &Message, response: &HandlerResponse) -> dbot_core::Result<()> {
            *self.seen.lock().unwrap() = Some(response.clone());
            Ok(())
        }
    }

    let seen = Arc::new(Mutex::new(None));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureResponse { seen: seen.clone() }))
        .add_handler(Arc::new(ReplyHandler));

    let result = chain.handle(&create_test_message("hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("done".to_string()));
    assert_eq!(*seen.lock().unwrap(), Some(HandlerResponse::Reply("done".to_string())));
}

/// **Test: Multiple handlers run before in order (first, second), after in reverse (second, first).**
#[tokio::test]
async fn test_multiple_handlers_executed_in_order() {
    struct OrderHandler {
        name: &'static str,
        order: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _message: &Message) -> dbot_core::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(&self, _message: &Message, _response: &HandlerResponse) -> dbot_core::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let order = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler { name: "first", order: order.clone() }))
        .add_handler(Arc::new(OrderHandler { name: "second", order: order.clone() }));

    chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(
        *order.lock().unwrap(),
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

/// **Test: An error from handle is returned to the caller.**
#[tokio::test]
async fn test_handler_error_propagates() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _message: &Message) -> dbot_core::Result<HandlerResponse> {
            Err(DbotError::Bot("send failed".to_string()))
        }
    }

    let chain = HandlerChain::new().add_handler(Arc::new(FailingHandler));
    let result = chain.handle(&create_test_message("test")).await;

    assert!(matches!(result, Err(DbotError::Bot(_))));
}

#[test]
fn test_chain_len() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());
    let chain = chain.add_handler(Arc::new(CommandHandler {
        command: "start",
        handled: Arc::new(AtomicUsize::new(0)),
    }));
    assert_eq!(chain.len(), 1);
}

/// **Test: Handler names resolve to the concrete type (or an override) through `dyn Handler`.**
#[test]
fn test_handler_name_through_trait_object() {
    struct Named;

    impl Handler for Named {
        fn name(&self) -> &'static str {
            "named"
        }
    }

    let by_default: Arc<dyn Handler> = Arc::new(CommandHandler {
        command: "start",
        handled: Arc::new(AtomicUsize::new(0)),
    });
    let overridden: Arc<dyn Handler> = Arc::new(Named);

    assert!(by_default.name().ends_with("CommandHandler"));
    assert!(!by_default.name().contains("dyn "));
    assert_eq!(overridden.name(), "named");
}
