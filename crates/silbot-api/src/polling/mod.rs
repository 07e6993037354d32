//! Long-polling update dispatcher.
//!
//! One poller loop calls `getUpdates`, advances the offset past every
//! received update and spawns the handler for each update on its own task.
//! A semaphore bounds how many handlers run at once; the poller waits for
//! a permit before dispatching, so dispatch order equals arrival order.

mod backoff;
mod handler;
mod source;

#[cfg(test)]
mod tests;

pub use backoff::Backoff;
pub use handler::{UpdateContext, UpdateHandler};
pub use source::UpdateSource;

use crate::client::BotApi;
use crate::methods::GetUpdates;
use serde_json::Value;
use silbot_core::config::PollingConfig;
use silbot_core::database::DatabaseManager;
use silbot_core::types::Update;
use silbot_core::WireRecord;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Default bound on concurrently running handlers.
pub const DEFAULT_MAX_CONCURRENCY: usize = 64;

type PollHook = Arc<dyn Fn(Option<i64>) + Send + Sync>;
type UpdateHook = Arc<dyn Fn(&Update) + Send + Sync>;

/// Builder and runner of the polling loop.
pub struct Dispatcher {
    bot: Arc<BotApi>,
    source: Arc<dyn UpdateSource>,
    request: GetUpdates,
    max_concurrency: usize,
    backoff: Backoff,
    database: Option<Arc<dyn DatabaseManager>>,
    on_poll: Option<PollHook>,
    on_update: Option<UpdateHook>,
    shutdown: CancellationToken,
}

impl Dispatcher {
    /// Dispatcher polling `bot` itself, short polling, no hook.
    pub fn new(bot: Arc<BotApi>) -> Self {
        Self {
            source: bot.clone(),
            bot,
            request: GetUpdates::default(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            backoff: Backoff::default(),
            database: None,
            on_poll: None,
            on_update: None,
            shutdown: CancellationToken::new(),
        }
    }

    /// Apply the `[polling]` configuration section.
    pub fn settings(mut self, config: &PollingConfig) -> Self {
        self.request.timeout = Some(config.timeout_secs).filter(|t| *t > 0);
        self.request.limit = config.limit;
        self.request.allowed_updates = config.allowed_updates.clone();
        self.max_concurrency = config.max_concurrency.max(1);
        self.backoff = Backoff::new(
            Duration::from_millis(config.backoff_initial_ms),
            Duration::from_millis(config.backoff_max_ms),
        );
        self
    }

    /// Fetch batches from `source` instead of the bot.
    pub fn with_source(mut self, source: Arc<dyn UpdateSource>) -> Self {
        self.source = source;
        self
    }

    /// Long-poll timeout in seconds; 0 switches to short polling.
    pub fn long_poll_timeout(mut self, secs: u64) -> Self {
        self.request.timeout = Some(secs).filter(|t| *t > 0);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.request.limit = Some(limit);
        self
    }

    pub fn allowed_updates<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.allowed_updates = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    /// First offset sent; unset means "oldest unconfirmed update".
    pub fn offset(mut self, offset: i64) -> Self {
        self.request.offset = Some(offset);
        self
    }

    pub fn max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max.max(1);
        self
    }

    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.backoff = Backoff::new(initial, max);
        self
    }

    /// Save the participants of every update through `manager` before the
    /// handler runs.
    pub fn database_manager(mut self, manager: Arc<dyn DatabaseManager>) -> Self {
        self.database = Some(manager);
        self
    }

    /// Called before each poll with the offset about to be sent.
    pub fn on_poll(mut self, hook: impl Fn(Option<i64>) + Send + Sync + 'static) -> Self {
        self.on_poll = Some(Arc::new(hook));
        self
    }

    /// Called on the poller task for each update, before it is dispatched.
    pub fn on_update(mut self, hook: impl Fn(&Update) + Send + Sync + 'static) -> Self {
        self.on_update = Some(Arc::new(hook));
        self
    }

    /// Use an externally owned token to stop the loop.
    pub fn shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Token that stops this dispatcher when cancelled.
    pub fn shutdown_handle(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Poll and dispatch until the shutdown token is cancelled, then wait
    /// for in-flight handlers. Returns the last offset.
    pub async fn run<H: UpdateHandler>(self, handler: H) -> Option<i64> {
        let handler = Arc::new(handler);
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();
        let mut backoff = self.backoff;
        let mut offset = self.request.offset;

        info!(
            "dispatcher started (max_concurrency={}, timeout={:?})",
            self.max_concurrency, self.request.timeout
        );

        'poll: loop {
            while let Some(finished) = tasks.try_join_next() {
                log_join(finished);
            }

            if let Some(hook) = &self.on_poll {
                hook(offset);
            }
            let request = GetUpdates {
                offset,
                ..self.request.clone()
            };
            let response = tokio::select! {
                _ = self.shutdown.cancelled() => break 'poll,
                response = self.source.poll(&request) => response,
            };

            if !response.ok {
                let delay = backoff.next_delay();
                warn!(
                    "getUpdates failed (retry in {delay:?}): {}",
                    response.description.as_deref().unwrap_or("no description")
                );
                tokio::select! {
                    _ = self.shutdown.cancelled() => break 'poll,
                    _ = tokio::time::sleep(delay) => continue 'poll,
                }
            }
            backoff.reset();

            let batch = response
                .result()
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            if batch.is_empty() {
                continue;
            }
            debug!("received {} update(s)", batch.len());

            for item in batch {
                let update = Update::hydrate(item);
                match update.update_id {
                    Some(id) => {
                        let next = id.saturating_add(1);
                        offset = Some(offset.map_or(next, |o| o.max(next)));
                    }
                    None => warn!("update without update_id, offset not advanced"),
                }
                if let Some(hook) = &self.on_update {
                    hook(&update);
                }

                let permit = tokio::select! {
                    _ = self.shutdown.cancelled() => break 'poll,
                    permit = semaphore.clone().acquire_owned() => permit,
                };
                let Ok(permit) = permit else {
                    break 'poll;
                };

                let ctx = UpdateContext {
                    bot: self.bot.clone(),
                    shutdown: self.shutdown.child_token(),
                };
                let handler = handler.clone();
                let database = self.database.clone();
                tasks.spawn(async move {
                    let _permit = permit;
                    dispatch(update, ctx, handler.as_ref(), database).await;
                });
            }
        }

        info!("dispatcher stopping, {} handler(s) in flight", tasks.len());
        while let Some(finished) = tasks.join_next().await {
            log_join(finished);
        }
        info!("dispatcher stopped at offset {offset:?}");
        offset
    }
}

async fn dispatch<H: UpdateHandler>(
    mut update: Update,
    ctx: UpdateContext,
    handler: &H,
    database: Option<Arc<dyn DatabaseManager>>,
) {
    if let Some(manager) = database {
        if let Err(e) = update.save_participants(manager).await {
            warn!("failed to save participants of update {:?}: {e}", update.update_id);
        }
    }
    handler.handle(update, ctx).await;
}

fn log_join(result: Result<(), JoinError>) {
    if let Err(e) = result {
        if e.is_panic() {
            error!("update handler panicked: {e}");
        } else {
            debug!("update handler cancelled: {e}");
        }
    }
}
