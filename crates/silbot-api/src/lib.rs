//! # silbot-api
//!
//! Request layer and update dispatcher of the silbot framework: the
//! [`BotApi`] client with one typed method per Bot API endpoint, the
//! [`BotApiResponse`] envelope every call returns, and the long-polling
//! [`Dispatcher`].

pub mod client;
pub mod membership;
pub mod methods;
pub mod params;
pub mod polling;
pub mod response;

pub use client::{BotApi, Defaults, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use membership::{CallbackQueryExt, MembershipExt};
pub use methods::{
    ApiResult, GetUpdates, InlineAnswerSettings, InviteLinkSettings, InvoiceRequest, MessageRef,
    PollSettings, SendOptions, WebhookSettings,
};
pub use params::Params;
pub use polling::{Backoff, Dispatcher, UpdateContext, UpdateHandler, UpdateSource};
pub use response::BotApiResponse;

use std::sync::Arc;

/// Poll `bot` with default settings and run `handler` for every update.
///
/// Returns only if the dispatcher is stopped, which the default
/// configuration never does.
pub async fn start_polling<H: UpdateHandler>(bot: Arc<BotApi>, handler: H) {
    Dispatcher::new(bot).run(handler).await;
}
