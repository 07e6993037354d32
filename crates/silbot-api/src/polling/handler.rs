use crate::client::BotApi;
use async_trait::async_trait;
use silbot_core::types::Update;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Per-task context handed to the handler with each update.
#[derive(Clone)]
pub struct UpdateContext {
    pub bot: Arc<BotApi>,
    /// Child of the dispatcher's token; cancelled on shutdown.
    pub shutdown: CancellationToken,
}

/// User code run once per update, each call on its own task.
///
/// Implemented for any `Fn(Update, UpdateContext) -> impl Future<Output = ()>`.
#[async_trait]
pub trait UpdateHandler: Send + Sync + 'static {
    async fn handle(&self, update: Update, ctx: UpdateContext);
}

#[async_trait]
impl<F, Fut> UpdateHandler for F
where
    F: Fn(Update, UpdateContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn handle(&self, update: Update, ctx: UpdateContext) {
        (self)(update, ctx).await;
    }
}
