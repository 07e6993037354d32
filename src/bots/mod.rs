//! Demo bots driven by the CLI.

pub mod counter;
pub mod echo;
pub mod joined;

use silbot_api::{BotApi, BotApiResponse, Dispatcher};
use silbot_core::config::PollingConfig;
use silbot_core::types::User;
use std::fmt::Display;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Check the token with `getMe` before polling.
pub async fn check_token(bot: &BotApi) -> anyhow::Result<User> {
    let (me, response) = bot.get_me().await;
    match me {
        Some(me) => {
            info!("bot {} started", me.display_name());
            Ok(me)
        }
        None => anyhow::bail!(
            "getMe failed, wrong bot token? ({})",
            response.description.as_deref().unwrap_or("no description")
        ),
    }
}

/// Dispatcher configured from `[polling]` and stopped by `shutdown`.
pub fn dispatcher(
    bot: Arc<BotApi>,
    config: &PollingConfig,
    shutdown: CancellationToken,
) -> Dispatcher {
    Dispatcher::new(bot)
        .settings(config)
        .shutdown_token(shutdown)
}

/// Warn when a reply to `chat_id` was not delivered. Returns whether it failed.
pub fn reply_failed(chat_id: impl Display, response: &BotApiResponse) -> bool {
    match response.error() {
        Some(e) => {
            warn!("failed to reply in {chat_id}: {e}");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silbot_core::Expected;
    use silbot_core::types::Message;

    #[test]
    fn test_reply_failed() {
        let sent = BotApiResponse::parse(
            r#"{"ok":true,"result":{"message_id":1}}"#,
            Some(200),
            Message::kind(),
        );
        assert!(!reply_failed(7, &sent));

        let blocked = BotApiResponse::parse(
            r#"{"ok":false,"error_code":403,"description":"Forbidden: bot was blocked by the user"}"#,
            Some(403),
            Message::kind(),
        );
        assert!(reply_failed(7, &blocked));
        assert!(reply_failed(
            "@channel",
            &BotApiResponse::connection_failure("connection refused", Message::kind())
        ));
    }
}
