use super::ApiResult;
use crate::client::BotApi;
use crate::params::Params;
use serde::Serialize;
use silbot_core::types::InlineQueryResult;

/// Optional arguments of `answerInlineQuery`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlineAnswerSettings {
    /// Seconds the result may be cached server-side; Telegram defaults to 300.
    pub cache_time: Option<i64>,
    pub is_personal: Option<bool>,
    /// Passed back in the next query when the user scrolls; empty for no more.
    pub next_offset: Option<String>,
    pub switch_pm_text: Option<String>,
    pub switch_pm_parameter: Option<String>,
}

impl BotApi {
    /// Stop the button's loading indicator, optionally showing `text` as a
    /// notification or, with `show_alert`, an alert.
    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
        show_alert: Option<bool>,
        url: Option<&str>,
        cache_time: Option<i64>,
    ) -> ApiResult<bool> {
        let params = Params::new()
            .set("callback_query_id", callback_query_id)
            .opt("text", text)
            .opt("show_alert", show_alert)
            .opt("url", url)
            .opt("cache_time", cache_time);
        self.request("answerCallbackQuery", params).await
    }

    /// At most 50 results per answer.
    pub async fn answer_inline_query(
        &self,
        inline_query_id: &str,
        results: &[InlineQueryResult],
        settings: &InlineAnswerSettings,
    ) -> ApiResult<bool> {
        let params = Params::new()
            .set("inline_query_id", inline_query_id)
            .set("results", results)
            .merge(settings);
        self.request("answerInlineQuery", params).await
    }
}
