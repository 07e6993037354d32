use super::ApiResult;
use crate::client::BotApi;
use crate::params::Params;
use serde::Serialize;
use silbot_core::types::{Update, WebhookInfo};
use silbot_core::Expected;
use std::time::Duration;

/// Arguments of `getUpdates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetUpdates {
    /// Omitted when `None`: Telegram then returns the oldest unconfirmed update.
    pub offset: Option<i64>,
    pub limit: Option<u32>,
    /// Long-poll timeout in seconds; 0 or `None` for short polling.
    pub timeout: Option<u64>,
    pub allowed_updates: Option<Vec<String>>,
}

impl GetUpdates {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .opt("offset", self.offset)
            .opt("limit", self.limit)
            .opt("timeout", self.timeout)
            .opt("allowed_updates", self.allowed_updates.as_ref())
    }
}

/// Optional arguments of `setWebhook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookSettings {
    pub ip_address: Option<String>,
    pub max_connections: Option<u32>,
    pub allowed_updates: Option<Vec<String>>,
    pub drop_pending_updates: Option<bool>,
}

impl BotApi {
    /// `getUpdates`. The request timeout is extended by the long-poll timeout.
    pub async fn get_updates(&self, request: &GetUpdates) -> ApiResult<Vec<Update>> {
        let timeout = self.timeout() + Duration::from_secs(request.timeout.unwrap_or(0));
        let response = self
            .send_with_timeout("getUpdates", &request.params(), Vec::<Update>::kind(), timeout)
            .await;
        (response.decode(), response)
    }

    /// `setWebhook`. Certificate upload is not supported.
    pub async fn set_webhook(&self, url: &str, settings: &WebhookSettings) -> ApiResult<bool> {
        let params = Params::new().set("url", url).merge(settings);
        self.request("setWebhook", params).await
    }

    pub async fn delete_webhook(&self, drop_pending_updates: Option<bool>) -> ApiResult<bool> {
        let params = Params::new().opt("drop_pending_updates", drop_pending_updates);
        self.request("deleteWebhook", params).await
    }

    pub async fn get_webhook_info(&self) -> ApiResult<WebhookInfo> {
        self.request("getWebhookInfo", Params::new()).await
    }
}
