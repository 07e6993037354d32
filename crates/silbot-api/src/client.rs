//! HTTP client for the Bot API.

use crate::params::Params;
use crate::response::BotApiResponse;
use silbot_core::config::BotConfig;
use silbot_core::error::SilbotError;
use silbot_core::types::ParseMode;
use silbot_core::{Expected, ResultKind};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Request timeout applied to every method.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Session-wide values used when a method is called without them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Defaults {
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: Option<bool>,
    pub disable_notification: Option<bool>,
}

/// Handle to one bot. Share it across tasks as `Arc<BotApi>`.
pub struct BotApi {
    client: reqwest::Client,
    api_url: String,
    token: String,
    defaults: Defaults,
    timeout: Duration,
}

impl BotApi {
    /// Create a client talking to `https://api.telegram.org` with no defaults.
    pub fn new(token: impl Into<String>) -> Result<Self, SilbotError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SilbotError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
            defaults: Defaults::default(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a client from the `[bot]` section of the configuration.
    pub fn from_config(config: &BotConfig) -> Result<Self, SilbotError> {
        if config.token.trim().is_empty() {
            return Err(SilbotError::Config("bot token is empty".to_string()));
        }
        Ok(Self::new(config.token.clone())?
            .with_api_url(&config.api_url)
            .with_timeout(Duration::from_secs(config.request_timeout_secs))
            .with_defaults(Defaults {
                parse_mode: config.parse_mode,
                disable_web_page_preview: config.disable_web_page_preview,
                disable_notification: config.disable_notification,
            }))
    }

    /// Point at another Bot API server, e.g. a local one.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_url, self.token)
    }

    /// Download URL of a file path returned by `getFile`.
    pub fn file_download_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{file_path}", self.api_url, self.token)
    }

    /// Call any Bot API method and decode its result as `T`.
    ///
    /// Typed wrappers exist for the common methods; this reaches the rest.
    pub async fn request<T: Expected>(
        &self,
        method: &str,
        params: Params,
    ) -> (Option<T>, BotApiResponse) {
        let response = self.send_request(method, &params, T::kind()).await;
        (response.decode(), response)
    }

    /// Issue one GET and wrap the body in an envelope. Never fails: transport
    /// errors become a `connection_error` envelope.
    pub async fn send_request(&self, method: &str, params: &Params, kind: ResultKind) -> BotApiResponse {
        self.send_with_timeout(method, params, kind, self.timeout).await
    }

    pub(crate) async fn send_with_timeout(
        &self,
        method: &str,
        params: &Params,
        kind: ResultKind,
        timeout: Duration,
    ) -> BotApiResponse {
        debug!(method, params = params.len(), "bot api request");

        let sent = self
            .client
            .get(self.method_url(method))
            .query(params.pairs())
            .timeout(timeout)
            .send()
            .await;
        let response = match sent {
            Ok(r) => r,
            Err(e) => {
                // The URL carries the token.
                let e = e.without_url();
                warn!(method, "bot api transport error: {e}");
                return BotApiResponse::connection_failure(e.to_string(), kind);
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let e = e.without_url();
                warn!(method, "bot api body read error: {e}");
                return BotApiResponse::connection_failure(e.to_string(), kind);
            }
        };

        let envelope = BotApiResponse::parse(body, Some(status), kind);
        if !envelope.ok {
            warn!(
                method,
                code = envelope.error_code,
                "bot api error: {}",
                envelope.description.as_deref().unwrap_or("no description")
            );
        }
        envelope
    }
}

impl fmt::Debug for BotApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotApi")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("defaults", &self.defaults)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let bot = BotApi::new("123:abc").unwrap().with_api_url("http://localhost:8081/");
        assert_eq!(bot.method_url("getMe"), "http://localhost:8081/bot123:abc/getMe");
        assert_eq!(
            bot.file_download_url("photos/file_1.jpg"),
            "http://localhost:8081/file/bot123:abc/photos/file_1.jpg"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let bot = BotApi::new("123:secret").unwrap();
        let printed = format!("{bot:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("api.telegram.org"));
    }

    #[test]
    fn test_from_config() {
        let mut config = BotConfig::default();
        assert!(BotApi::from_config(&config).is_err());
        config.token = "1:a".into();
        config.parse_mode = Some(ParseMode::Html);
        config.request_timeout_secs = 3;
        let bot = BotApi::from_config(&config).unwrap();
        assert_eq!(bot.defaults().parse_mode, Some(ParseMode::Html));
        assert_eq!(bot.timeout(), Duration::from_secs(3));
    }
}
