//! Typed Bot API methods, one module per API area.
//!
//! Every method returns `(Option<T>, BotApiResponse)`: the decoded result
//! when the call succeeded with the documented shape, and the envelope in
//! all cases.

mod bot;
mod chats;
mod files;
mod games;
mod inline;
mod media;
mod messages;
mod passport;
mod payments;
mod stickers;
mod updates;


pub use chats::InviteLinkSettings;
pub use inline::InlineAnswerSettings;
pub use messages::PollSettings;
pub use payments::InvoiceRequest;
pub use updates::{GetUpdates, WebhookSettings};

use crate::client::Defaults;
use crate::params::Params;
use crate::response::BotApiResponse;
use silbot_core::types::{ChatId, Message, MessageEntity, ParseMode, ReplyMarkup};

/// Decoded result plus the envelope it came from.
pub type ApiResult<T> = (Option<T>, BotApiResponse);

/// Optional parameters shared by the send methods.
///
/// Unset `parse_mode`, `disable_web_page_preview` and
/// `disable_notification` take the session defaults of the [`BotApi`](crate::BotApi).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendOptions {
    pub parse_mode: Option<ParseMode>,
    /// Sent as `entities` for text, `caption_entities` for media.
    pub entities: Option<Vec<MessageEntity>>,
    pub disable_web_page_preview: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub allow_sending_without_reply: Option<bool>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn disable_web_page_preview(mut self, disable: bool) -> Self {
        self.disable_web_page_preview = Some(disable);
        self
    }

    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.disable_notification = Some(disable);
        self
    }

    pub fn protect_content(mut self, protect: bool) -> Self {
        self.protect_content = Some(protect);
        self
    }

    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = Some(message_id);
        self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }

    /// Parameters of a text message.
    pub(crate) fn text(&self, params: Params, defaults: &Defaults) -> Params {
        let params = params
            .or_default("parse_mode", self.parse_mode, defaults.parse_mode)
            .opt("entities", self.entities.as_ref())
            .or_default(
                "disable_web_page_preview",
                self.disable_web_page_preview,
                defaults.disable_web_page_preview,
            );
        self.delivery(params, defaults)
    }

    /// Parameters of a media message with an optional caption.
    pub(crate) fn caption(&self, params: Params, defaults: &Defaults) -> Params {
        let params = params
            .or_default("parse_mode", self.parse_mode, defaults.parse_mode)
            .opt("caption_entities", self.entities.as_ref());
        self.delivery(params, defaults)
    }

    /// Parameters every send method accepts.
    pub(crate) fn delivery(&self, params: Params, defaults: &Defaults) -> Params {
        params
            .or_default(
                "disable_notification",
                self.disable_notification,
                defaults.disable_notification,
            )
            .opt("protect_content", self.protect_content)
            .opt("reply_to_message_id", self.reply_to_message_id)
            .opt("allow_sending_without_reply", self.allow_sending_without_reply)
            .opt("reply_markup", self.reply_markup.as_ref())
    }
}

/// The message an edit method acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRef {
    /// A message in a chat.
    Chat { chat_id: ChatId, message_id: i64 },
    /// A message sent via inline mode.
    Inline(String),
}

impl MessageRef {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline(inline_message_id.into())
    }

    /// Reference to `message`, when it carries both its id and chat id.
    pub fn of(message: &Message) -> Option<Self> {
        let chat_id = message.chat.as_ref()?.id?;
        Some(Self::chat(chat_id, message.message_id?))
    }

    pub(crate) fn apply(&self, params: Params) -> Params {
        match self {
            Self::Chat {
                chat_id,
                message_id,
            } => params.set("chat_id", chat_id).set("message_id", message_id),
            Self::Inline(id) => params.set("inline_message_id", id),
        }
    }
}
