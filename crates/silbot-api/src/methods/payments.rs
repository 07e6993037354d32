use super::{ApiResult, SendOptions};
use crate::client::BotApi;
use crate::params::Params;
use serde::Serialize;
use silbot_core::types::{ChatId, LabeledPrice, Message, ShippingOption};

/// Arguments of `sendInvoice`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceRequest {
    pub title: String,
    pub description: String,
    /// Bot-defined payload, not shown to the user.
    pub payload: String,
    pub provider_token: String,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    pub max_tip_amount: Option<i64>,
    pub suggested_tip_amounts: Option<Vec<i64>>,
    pub start_parameter: Option<String>,
    /// JSON passed through to the payment provider.
    pub provider_data: Option<String>,
    pub photo_url: Option<String>,
    pub photo_size: Option<i64>,
    pub photo_width: Option<i64>,
    pub photo_height: Option<i64>,
    pub need_name: Option<bool>,
    pub need_phone_number: Option<bool>,
    pub need_email: Option<bool>,
    pub need_shipping_address: Option<bool>,
    pub send_phone_number_to_provider: Option<bool>,
    pub send_email_to_provider: Option<bool>,
    /// Final price depends on the shipping method.
    pub is_flexible: Option<bool>,
}

impl InvoiceRequest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        provider_token: impl Into<String>,
        currency: impl Into<String>,
        prices: Vec<LabeledPrice>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            payload: payload.into(),
            provider_token: provider_token.into(),
            currency: currency.into(),
            prices,
            ..Default::default()
        }
    }
}

impl BotApi {
    pub async fn send_invoice(
        &self,
        chat_id: impl Into<ChatId>,
        invoice: &InvoiceRequest,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        let params = Params::new().set::<ChatId>("chat_id", chat_id.into()).merge(invoice);
        let params = options.delivery(params, self.defaults());
        self.request("sendInvoice", params).await
    }

    /// Reply to a shipping query: the options when `ok`, the reason otherwise.
    pub async fn answer_shipping_query(
        &self,
        shipping_query_id: &str,
        ok: bool,
        shipping_options: Option<&[ShippingOption]>,
        error_message: Option<&str>,
    ) -> ApiResult<bool> {
        let params = Params::new()
            .set("shipping_query_id", shipping_query_id)
            .set("ok", ok)
            .opt("shipping_options", shipping_options)
            .opt("error_message", error_message);
        self.request("answerShippingQuery", params).await
    }

    /// Must be answered within 10 seconds of the query.
    pub async fn answer_pre_checkout_query(
        &self,
        pre_checkout_query_id: &str,
        ok: bool,
        error_message: Option<&str>,
    ) -> ApiResult<bool> {
        let params = Params::new()
            .set("pre_checkout_query_id", pre_checkout_query_id)
            .set("ok", ok)
            .opt("error_message", error_message);
        self.request("answerPreCheckoutQuery", params).await
    }
}
