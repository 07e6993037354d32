use super::{ApiResult, MessageRef, SendOptions};
use crate::client::BotApi;
use crate::params::Params;
use serde::Serialize;
use silbot_core::types::{
    ChatAction, ChatId, Edited, InlineKeyboardMarkup, Message, MessageEntity, MessageId, ParseMode,
    Poll,
};

/// Optional arguments of `sendPoll`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PollSettings {
    pub is_anonymous: Option<bool>,
    /// "quiz" or "regular".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub allows_multiple_answers: Option<bool>,
    /// Required for quizzes.
    pub correct_option_id: Option<i64>,
    pub explanation: Option<String>,
    pub explanation_parse_mode: Option<ParseMode>,
    pub explanation_entities: Option<Vec<MessageEntity>>,
    pub open_period: Option<i64>,
    pub close_date: Option<i64>,
    pub is_closed: Option<bool>,
}

impl PollSettings {
    pub fn quiz(correct_option_id: i64) -> Self {
        Self {
            kind: Some("quiz".to_string()),
            correct_option_id: Some(correct_option_id),
            ..Default::default()
        }
    }
}

fn chat(chat_id: impl Into<ChatId>) -> Params {
    Params::new().set::<ChatId>("chat_id", chat_id.into())
}

impl BotApi {
    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        let params = options.text(chat(chat_id).set("text", text), self.defaults());
        self.request("sendMessage", params).await
    }

    pub async fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
        disable_notification: Option<bool>,
        protect_content: Option<bool>,
    ) -> ApiResult<Message> {
        let params = chat(chat_id)
            .set::<ChatId>("from_chat_id", from_chat_id.into())
            .set("message_id", message_id)
            .or_default(
                "disable_notification",
                disable_notification,
                self.defaults().disable_notification,
            )
            .opt("protect_content", protect_content);
        self.request("forwardMessage", params).await
    }

    /// Copy a message without the "forwarded from" header.
    pub async fn copy_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
        caption: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<MessageId> {
        let params = chat(chat_id)
            .set::<ChatId>("from_chat_id", from_chat_id.into())
            .set("message_id", message_id)
            .opt("caption", caption);
        let params = options.caption(params, self.defaults());
        self.request("copyMessage", params).await
    }

    /// Send a point on the map; live when `live_period` is set.
    pub async fn send_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        live_period: Option<i64>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        let params = chat(chat_id)
            .set("latitude", latitude)
            .set("longitude", longitude)
            .opt("live_period", live_period);
        let params = options.delivery(params, self.defaults());
        self.request("sendLocation", params).await
    }

    pub async fn edit_message_live_location(
        &self,
        target: &MessageRef,
        latitude: f64,
        longitude: f64,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> ApiResult<Edited> {
        let params = target
            .apply(Params::new())
            .set("latitude", latitude)
            .set("longitude", longitude)
            .opt("reply_markup", reply_markup);
        self.request("editMessageLiveLocation", params).await
    }

    pub async fn stop_message_live_location(
        &self,
        target: &MessageRef,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> ApiResult<Edited> {
        let params = target
            .apply(Params::new())
            .opt("reply_markup", reply_markup);
        self.request("stopMessageLiveLocation", params).await
    }

    pub async fn send_venue(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: &str,
        address: &str,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        let params = chat(chat_id)
            .set("latitude", latitude)
            .set("longitude", longitude)
            .set("title", title)
            .set("address", address);
        let params = options.delivery(params, self.defaults());
        self.request("sendVenue", params).await
    }

    pub async fn send_contact(
        &self,
        chat_id: impl Into<ChatId>,
        phone_number: &str,
        first_name: &str,
        last_name: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        let params = chat(chat_id)
            .set("phone_number", phone_number)
            .set("first_name", first_name)
            .opt("last_name", last_name);
        let params = options.delivery(params, self.defaults());
        self.request("sendContact", params).await
    }

    pub async fn send_poll(
        &self,
        chat_id: impl Into<ChatId>,
        question: &str,
        answers: &[String],
        settings: &PollSettings,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        let params = chat(chat_id)
            .set("question", question)
            .set("options", answers)
            .merge(settings);
        let params = options.delivery(params, self.defaults());
        self.request("sendPoll", params).await
    }

    /// Send an animated emoji with a random value; 🎲 when `emoji` is unset.
    pub async fn send_dice(
        &self,
        chat_id: impl Into<ChatId>,
        emoji: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        let params = options.delivery(chat(chat_id).opt("emoji", emoji), self.defaults());
        self.request("sendDice", params).await
    }

    pub async fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: ChatAction,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).set("action", action);
        self.request("sendChatAction", params).await
    }

    pub async fn edit_message_text(
        &self,
        target: &MessageRef,
        text: &str,
        parse_mode: Option<ParseMode>,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> ApiResult<Edited> {
        let defaults = self.defaults();
        let params = target
            .apply(Params::new())
            .set("text", text)
            .or_default("parse_mode", parse_mode, defaults.parse_mode)
            .opt("disable_web_page_preview", defaults.disable_web_page_preview)
            .opt("reply_markup", reply_markup);
        self.request("editMessageText", params).await
    }

    pub async fn edit_message_caption(
        &self,
        target: &MessageRef,
        caption: Option<&str>,
        parse_mode: Option<ParseMode>,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> ApiResult<Edited> {
        let params = target
            .apply(Params::new())
            .opt("caption", caption)
            .or_default("parse_mode", parse_mode, self.defaults().parse_mode)
            .opt("reply_markup", reply_markup);
        self.request("editMessageCaption", params).await
    }

    /// Replace the inline keyboard; `None` removes it.
    pub async fn edit_message_reply_markup(
        &self,
        target: &MessageRef,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> ApiResult<Edited> {
        let params = target
            .apply(Params::new())
            .opt("reply_markup", reply_markup);
        self.request("editMessageReplyMarkup", params).await
    }

    pub async fn stop_poll(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> ApiResult<Poll> {
        let params = chat(chat_id)
            .set("message_id", message_id)
            .opt("reply_markup", reply_markup);
        self.request("stopPoll", params).await
    }

    pub async fn delete_message(&self, chat_id: impl Into<ChatId>, message_id: i64) -> ApiResult<bool> {
        let params = chat(chat_id).set("message_id", message_id);
        self.request("deleteMessage", params).await
    }
}
