use crate::client::BotApi;
use crate::methods::GetUpdates;
use crate::response::BotApiResponse;
use async_trait::async_trait;

/// Where the dispatcher fetches update batches from.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// One `getUpdates` round trip. Failures are reported in the envelope.
    async fn poll(&self, request: &GetUpdates) -> BotApiResponse;
}

#[async_trait]
impl UpdateSource for BotApi {
    async fn poll(&self, request: &GetUpdates) -> BotApiResponse {
        let (_, response) = self.get_updates(request).await;
        response
    }
}
