use super::*;
use crate::response::BotApiResponse;
use async_trait::async_trait;
use serde_json::json;
use silbot_core::error::SilbotError;
use silbot_core::database::{Row, Subject};
use silbot_core::types::{Chat, User};
use silbot_core::Expected;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Replays canned envelopes, then cancels the dispatcher.
struct ScriptedSource {
    script: Mutex<VecDeque<BotApiResponse>>,
    requests: Mutex<Vec<GetUpdates>>,
    shutdown: CancellationToken,
}

impl ScriptedSource {
    fn new(shutdown: CancellationToken, bodies: Vec<BotApiResponse>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(bodies.into()),
            requests: Mutex::new(Vec::new()),
            shutdown,
        })
    }

    fn offsets(&self) -> Vec<Option<i64>> {
        self.requests.lock().unwrap().iter().map(|r| r.offset).collect()
    }
}

#[async_trait]
impl UpdateSource for ScriptedSource {
    async fn poll(&self, request: &GetUpdates) -> BotApiResponse {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(response) => response,
            None => {
                self.shutdown.cancel();
                std::future::pending().await
            }
        }
    }
}

fn batch(ids: &[i64]) -> BotApiResponse {
    let updates: Vec<Value> = ids
        .iter()
        .map(|id| json!({"update_id": id, "message": {"message_id": id, "text": "hi"}}))
        .collect();
    BotApiResponse::parse(
        json!({"ok": true, "result": updates}).to_string(),
        Some(200),
        Vec::<Update>::kind(),
    )
}

fn failure() -> BotApiResponse {
    BotApiResponse::connection_failure("connection refused", Vec::<Update>::kind())
}

fn bot() -> Arc<BotApi> {
    Arc::new(BotApi::new("0:test").unwrap())
}

fn dispatcher(script: Vec<BotApiResponse>) -> (Dispatcher, Arc<ScriptedSource>) {
    let dispatcher = Dispatcher::new(bot()).backoff(Duration::from_millis(1), Duration::from_millis(4));
    let source = ScriptedSource::new(dispatcher.shutdown_handle(), script);
    (dispatcher.with_source(source.clone()), source)
}

fn recorder() -> (Arc<Mutex<Vec<i64>>>, impl UpdateHandler) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let handler = move |update: Update, _ctx: UpdateContext| {
        let sink = sink.clone();
        async move {
            sink.lock().unwrap().push(update.update_id.unwrap_or(-1));
        }
    };
    (seen, handler)
}

#[tokio::test]
async fn test_fan_out_one_call_per_update() {
    let (dispatcher, _source) = dispatcher(vec![batch(&[1, 2, 3, 4, 5])]);
    let (seen, handler) = recorder();

    let offset = dispatcher.run(handler).await;

    let mut ids = seen.lock().unwrap().clone();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(offset, Some(6));
}

#[tokio::test]
async fn test_offset_monotonic_across_batches() {
    let (dispatcher, source) = dispatcher(vec![batch(&[10, 11]), batch(&[12]), batch(&[11])]);
    let (_seen, handler) = recorder();

    let offset = dispatcher.run(handler).await;

    assert_eq!(source.offsets(), vec![None, Some(12), Some(13), Some(13)]);
    assert_eq!(offset, Some(13));
}

#[tokio::test]
async fn test_max_update_id_saturates_offset() {
    let (dispatcher, source) = dispatcher(vec![batch(&[i64::MAX - 1]), batch(&[i64::MAX])]);
    let (seen, handler) = recorder();

    let offset = dispatcher.run(handler).await;

    assert_eq!(seen.lock().unwrap().len(), 2);
    assert_eq!(source.offsets(), vec![None, Some(i64::MAX), Some(i64::MAX)]);
    assert_eq!(offset, Some(i64::MAX));
}

#[tokio::test]
async fn test_zero_result_poll_keeps_offset() {
    let (dispatcher, source) = dispatcher(vec![batch(&[3]), batch(&[]), batch(&[])]);
    let (seen, handler) = recorder();

    dispatcher.run(handler).await;

    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(source.offsets(), vec![None, Some(4), Some(4), Some(4)]);
}

#[tokio::test]
async fn test_failure_retries_with_same_offset() {
    let (dispatcher, source) = dispatcher(vec![batch(&[7]), failure(), failure(), batch(&[8])]);
    let (seen, handler) = recorder();

    let offset = dispatcher.run(handler).await;

    assert_eq!(
        source.offsets(),
        vec![None, Some(8), Some(8), Some(8), Some(9)]
    );
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert_eq!(offset, Some(9));
}

#[tokio::test]
async fn test_update_without_id_dispatched_offset_unchanged() {
    let body = json!({"ok": true, "result": [{"update_id": 4}, {"message": {"message_id": 1}}]});
    let script = vec![BotApiResponse::parse(body.to_string(), Some(200), Vec::<Update>::kind())];
    let (dispatcher, _source) = dispatcher(script);
    let (seen, handler) = recorder();

    let offset = dispatcher.run(handler).await;

    let mut ids = seen.lock().unwrap().clone();
    ids.sort_unstable();
    assert_eq!(ids, vec![-1, 4]);
    assert_eq!(offset, Some(5));
}

#[tokio::test]
async fn test_hooks_see_offset_and_updates_in_order() {
    let (dispatcher, _source) = dispatcher(vec![batch(&[1, 2])]);
    let polled = Arc::new(Mutex::new(Vec::new()));
    let arrived = Arc::new(Mutex::new(Vec::new()));
    let (p, a) = (polled.clone(), arrived.clone());
    let (_seen, handler) = recorder();

    dispatcher
        .on_poll(move |offset| p.lock().unwrap().push(offset))
        .on_update(move |update| a.lock().unwrap().push(update.update_id))
        .run(handler)
        .await;

    assert_eq!(*polled.lock().unwrap(), vec![None, Some(3)]);
    assert_eq!(*arrived.lock().unwrap(), vec![Some(1), Some(2)]);
}

#[tokio::test]
async fn test_concurrency_is_bounded() {
    let (dispatcher, _source) = dispatcher(vec![batch(&[1, 2, 3, 4, 5, 6])]);
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let (r, p) = (running.clone(), peak.clone());
    let handler = move |_update: Update, _ctx: UpdateContext| {
        let (running, peak) = (r.clone(), p.clone());
        async move {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            running.fetch_sub(1, Ordering::SeqCst);
        }
    };

    dispatcher.max_concurrency(2).run(handler).await;

    assert!(peak.load(Ordering::SeqCst) <= 2);
    assert_eq!(running.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_cancel_waits_for_in_flight_handlers() {
    let (dispatcher, _source) = dispatcher(vec![batch(&[1])]);
    let finished = Arc::new(AtomicUsize::new(0));
    let f = finished.clone();
    let handler = move |_update: Update, ctx: UpdateContext| {
        let finished = f.clone();
        async move {
            // Cancellation reaches the handler through its child token.
            ctx.shutdown.cancelled().await;
            tokio::time::sleep(Duration::from_millis(20)).await;
            finished.fetch_add(1, Ordering::SeqCst);
        }
    };

    dispatcher.run(handler).await;

    assert_eq!(finished.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_external_token_stops_pending_poll() {
    let token = CancellationToken::new();
    let source = ScriptedSource::new(CancellationToken::new(), Vec::new());
    let dispatcher = Dispatcher::new(bot())
        .with_source(source)
        .shutdown_token(token.clone());
    let (seen, handler) = recorder();

    let stopper = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });
    let offset = dispatcher.run(handler).await;
    stopper.await.unwrap();

    assert_eq!(offset, None);
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_handler_panic_is_contained() {
    let (dispatcher, _source) = dispatcher(vec![batch(&[1, 2])]);
    let calls = Arc::new(AtomicUsize::new(0));
    let c = calls.clone();
    let handler = move |update: Update, _ctx: UpdateContext| {
        let calls = c.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            if update.update_id == Some(1) {
                panic!("boom");
            }
        }
    };

    let offset = dispatcher.run(handler).await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(offset, Some(3));
}

#[derive(Default)]
struct CountingManager {
    users: AtomicUsize,
    chats: AtomicUsize,
}

#[async_trait]
impl DatabaseManager for CountingManager {
    async fn add_user(&self, _user: &User, _extra: &[Value]) -> Result<Option<Row>, SilbotError> {
        self.users.fetch_add(1, Ordering::SeqCst);
        Ok(Some(json!({"state": "new"})))
    }

    async fn add_chat(&self, _chat: &Chat, _extra: &[Value]) -> Result<Option<Row>, SilbotError> {
        self.chats.fetch_add(1, Ordering::SeqCst);
        Ok(Some(json!({"count": 0})))
    }

    async fn get_info(&self, _subject: Subject<'_>) -> Result<Option<Row>, SilbotError> {
        Ok(None)
    }

    async fn set_column(
        &self,
        _subject: Subject<'_>,
        _column: &str,
        _value: Value,
    ) -> Result<(), SilbotError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_participants_saved_before_handler() {
    let body = json!({"ok": true, "result": [{
        "update_id": 1,
        "message": {"message_id": 1, "from": {"id": 7}, "chat": {"id": 7, "type": "private"}}
    }]});
    let script = vec![BotApiResponse::parse(body.to_string(), Some(200), Vec::<Update>::kind())];
    let (dispatcher, _source) = dispatcher(script);
    let manager = Arc::new(CountingManager::default());
    let rows = Arc::new(Mutex::new(Vec::new()));
    let sink = rows.clone();
    let handler = move |update: Update, _ctx: UpdateContext| {
        let sink = sink.clone();
        async move {
            let message = update.message.unwrap_or_default();
            let user = message.from.unwrap_or_default();
            sink.lock().unwrap().push((user.db.clone(), user.db_manager().is_some()));
        }
    };

    dispatcher.database_manager(manager.clone()).run(handler).await;

    assert_eq!(manager.users.load(Ordering::SeqCst), 1);
    assert_eq!(manager.chats.load(Ordering::SeqCst), 1);
    assert_eq!(*rows.lock().unwrap(), vec![(Some(json!({"state": "new"})), true)]);
}

#[test]
fn test_settings_from_config() {
    let config = PollingConfig {
        timeout_secs: 30,
        limit: Some(50),
        allowed_updates: Some(vec!["message".into()]),
        max_concurrency: 0,
        backoff_initial_ms: 500,
        backoff_max_ms: 2000,
    };
    let dispatcher = Dispatcher::new(bot()).settings(&config);
    assert_eq!(dispatcher.request.timeout, Some(30));
    assert_eq!(dispatcher.request.limit, Some(50));
    assert_eq!(dispatcher.max_concurrency, 1);
    assert_eq!(
        dispatcher.backoff,
        Backoff::new(Duration::from_millis(500), Duration::from_millis(2000))
    );
}
