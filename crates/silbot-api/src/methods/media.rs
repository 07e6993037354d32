//! Media sending by `file_id` or HTTP URL. Uploading local files is not
//! supported.

use super::{ApiResult, MessageRef, SendOptions};
use crate::client::BotApi;
use crate::params::Params;
use silbot_core::types::{ChatId, Edited, InlineKeyboardMarkup, InputMedia, Message};

impl BotApi {
    async fn send_file(
        &self,
        method: &str,
        field: &str,
        chat_id: ChatId,
        file: &str,
        caption: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        let params = Params::new()
            .set("chat_id", chat_id)
            .set(field, file)
            .opt("caption", caption);
        let params = if caption.is_some() {
            options.caption(params, self.defaults())
        } else {
            options.delivery(params, self.defaults())
        };
        self.request(method, params).await
    }

    pub async fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: &str,
        caption: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        self.send_file("sendPhoto", "photo", chat_id.into(), photo, caption, options)
            .await
    }

    pub async fn send_audio(
        &self,
        chat_id: impl Into<ChatId>,
        audio: &str,
        caption: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        self.send_file("sendAudio", "audio", chat_id.into(), audio, caption, options)
            .await
    }

    pub async fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: &str,
        caption: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        self.send_file("sendDocument", "document", chat_id.into(), document, caption, options)
            .await
    }

    pub async fn send_video(
        &self,
        chat_id: impl Into<ChatId>,
        video: &str,
        caption: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        self.send_file("sendVideo", "video", chat_id.into(), video, caption, options)
            .await
    }

    pub async fn send_animation(
        &self,
        chat_id: impl Into<ChatId>,
        animation: &str,
        caption: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        self.send_file("sendAnimation", "animation", chat_id.into(), animation, caption, options)
            .await
    }

    pub async fn send_voice(
        &self,
        chat_id: impl Into<ChatId>,
        voice: &str,
        caption: Option<&str>,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        self.send_file("sendVoice", "voice", chat_id.into(), voice, caption, options)
            .await
    }

    pub async fn send_video_note(
        &self,
        chat_id: impl Into<ChatId>,
        video_note: &str,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        self.send_file("sendVideoNote", "video_note", chat_id.into(), video_note, None, options)
            .await
    }

    pub async fn send_sticker(
        &self,
        chat_id: impl Into<ChatId>,
        sticker: &str,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        self.send_file("sendSticker", "sticker", chat_id.into(), sticker, None, options)
            .await
    }

    /// Send 2-10 items as an album. `options.reply_markup` is ignored by
    /// Telegram for albums.
    pub async fn send_media_group(
        &self,
        chat_id: impl Into<ChatId>,
        media: &[InputMedia],
        options: &SendOptions,
    ) -> ApiResult<Vec<Message>> {
        let params = Params::new()
            .set::<ChatId>("chat_id", chat_id.into())
            .set("media", media);
        let params = options.delivery(params, self.defaults());
        self.request("sendMediaGroup", params).await
    }

    pub async fn edit_message_media(
        &self,
        target: &MessageRef,
        media: &InputMedia,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> ApiResult<Edited> {
        let params = target
            .apply(Params::new())
            .set("media", media)
            .opt("reply_markup", reply_markup);
        self.request("editMessageMedia", params).await
    }
}
