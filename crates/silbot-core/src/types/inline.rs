use super::{InlineKeyboardMarkup, LabeledPrice, Location, Message, MessageEntity, ParseMode, User};

wire_record! {
    /// Incoming inline query.
    pub struct InlineQuery {
        pub id: String,
        pub from: User,
        pub query: String,
        pub offset: String,
        pub chat_type: String,
        pub location: Location,
    }
}

wire_record! {
    pub struct ChosenInlineResult {
        pub result_id: String,
        pub from: User,
        pub location: Location,
        pub inline_message_id: String,
        pub query: String,
    }
}

wire_record! {
    /// Press of an inline keyboard callback button.
    pub struct CallbackQuery {
        pub id: String,
        pub from: User,
        /// Missing when the message is too old.
        pub message: Box<Message>,
        pub inline_message_id: String,
        pub chat_instance: String,
        pub data: String,
        pub game_short_name: String,
    }
}

wire_record! {
    /// One result of `answerInlineQuery`.
    ///
    /// The twenty Telegram result shapes are folded into one record. Use
    /// the constructors for the common ones and fill the remaining fields
    /// with struct update syntax.
    pub struct InlineQueryResult {
        #[serde(rename = "type")]
        pub kind: String,
        pub id: String,
        pub title: String,
        pub description: String,
        pub caption: String,
        pub parse_mode: ParseMode,
        pub caption_entities: Vec<MessageEntity>,
        pub url: String,
        pub hide_url: bool,
        pub thumb_url: String,
        pub thumb_width: i64,
        pub thumb_height: i64,
        pub thumb_mime_type: String,
        pub photo_url: String,
        pub photo_width: i64,
        pub photo_height: i64,
        pub photo_file_id: String,
        pub gif_url: String,
        pub gif_width: i64,
        pub gif_height: i64,
        pub gif_duration: i64,
        pub gif_file_id: String,
        pub mpeg4_url: String,
        pub mpeg4_file_id: String,
        pub video_url: String,
        pub video_file_id: String,
        pub video_width: i64,
        pub video_height: i64,
        pub video_duration: i64,
        pub audio_url: String,
        pub audio_file_id: String,
        pub audio_duration: i64,
        pub performer: String,
        pub voice_url: String,
        pub voice_file_id: String,
        pub voice_duration: i64,
        pub document_url: String,
        pub document_file_id: String,
        pub mime_type: String,
        pub sticker_file_id: String,
        pub latitude: f64,
        pub longitude: f64,
        pub horizontal_accuracy: f64,
        pub live_period: i64,
        pub heading: i64,
        pub proximity_alert_radius: i64,
        pub address: String,
        pub foursquare_id: String,
        pub foursquare_type: String,
        pub google_place_id: String,
        pub google_place_type: String,
        pub phone_number: String,
        pub first_name: String,
        pub last_name: String,
        pub vcard: String,
        pub game_short_name: String,
        pub reply_markup: InlineKeyboardMarkup,
        pub input_message_content: InputMessageContent,
    }
}

impl InlineQueryResult {
    fn of(kind: &str, id: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.to_string()),
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn article(
        id: impl Into<String>,
        title: impl Into<String>,
        content: InputMessageContent,
    ) -> Self {
        Self {
            title: Some(title.into()),
            input_message_content: Some(content),
            ..Self::of("article", id)
        }
    }

    pub fn photo(
        id: impl Into<String>,
        photo_url: impl Into<String>,
        thumb_url: impl Into<String>,
    ) -> Self {
        Self {
            photo_url: Some(photo_url.into()),
            thumb_url: Some(thumb_url.into()),
            ..Self::of("photo", id)
        }
    }

    pub fn gif(id: impl Into<String>, gif_url: impl Into<String>, thumb_url: impl Into<String>) -> Self {
        Self {
            gif_url: Some(gif_url.into()),
            thumb_url: Some(thumb_url.into()),
            ..Self::of("gif", id)
        }
    }

    pub fn video(
        id: impl Into<String>,
        video_url: impl Into<String>,
        mime_type: impl Into<String>,
        thumb_url: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            video_url: Some(video_url.into()),
            mime_type: Some(mime_type.into()),
            thumb_url: Some(thumb_url.into()),
            title: Some(title.into()),
            ..Self::of("video", id)
        }
    }

    pub fn document(
        id: impl Into<String>,
        title: impl Into<String>,
        document_url: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            document_url: Some(document_url.into()),
            mime_type: Some(mime_type.into()),
            ..Self::of("document", id)
        }
    }

    pub fn location(id: impl Into<String>, latitude: f64, longitude: f64, title: impl Into<String>) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            title: Some(title.into()),
            ..Self::of("location", id)
        }
    }

    pub fn cached_sticker(id: impl Into<String>, sticker_file_id: impl Into<String>) -> Self {
        Self {
            sticker_file_id: Some(sticker_file_id.into()),
            ..Self::of("sticker", id)
        }
    }
}

wire_record! {
    /// Content sent instead of the result's own media.
    ///
    /// Text, location, venue, contact and invoice contents share this
    /// record; Telegram tells them apart by which fields are present.
    pub struct InputMessageContent {
        pub message_text: String,
        pub parse_mode: ParseMode,
        pub entities: Vec<MessageEntity>,
        pub disable_web_page_preview: bool,
        pub latitude: f64,
        pub longitude: f64,
        pub horizontal_accuracy: f64,
        pub live_period: i64,
        pub heading: i64,
        pub proximity_alert_radius: i64,
        pub title: String,
        pub address: String,
        pub foursquare_id: String,
        pub foursquare_type: String,
        pub google_place_id: String,
        pub google_place_type: String,
        pub phone_number: String,
        pub first_name: String,
        pub last_name: String,
        pub vcard: String,
        pub description: String,
        pub payload: String,
        pub provider_token: String,
        pub currency: String,
        pub prices: Vec<LabeledPrice>,
        pub max_tip_amount: i64,
        pub suggested_tip_amounts: Vec<i64>,
        pub provider_data: String,
    }
}

impl InputMessageContent {
    pub fn text(message_text: impl Into<String>) -> Self {
        Self {
            message_text: Some(message_text.into()),
            ..Default::default()
        }
    }

    pub fn location(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Default::default()
        }
    }

    pub fn contact(phone_number: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            first_name: Some(first_name.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WireRecord;
    use serde_json::json;

    #[test]
    fn test_callback_query_hydrates_message() {
        let query = CallbackQuery::hydrate(&json!({
            "id": "4382",
            "from": {"id": 1, "first_name": "Ann"},
            "message": {"message_id": 77, "chat": {"id": 1, "type": "private"}},
            "chat_instance": "-123",
            "data": "/edit"
        }));
        assert_eq!(query.data.as_deref(), Some("/edit"));
        assert_eq!(query.message.as_ref().unwrap().message_id, Some(77));
    }

    #[test]
    fn test_article_result_flattens_only_set_fields() {
        let result = InlineQueryResult::article("1", "Hello", InputMessageContent::text("hi there"));
        assert_eq!(
            result.to_value(),
            json!({
                "type": "article",
                "id": "1",
                "title": "Hello",
                "input_message_content": {"message_text": "hi there"}
            })
        );
    }

    #[test]
    fn test_cached_sticker_kind() {
        let result = InlineQueryResult::cached_sticker("s", "CAACAgI");
        assert_eq!(result.kind.as_deref(), Some("sticker"));
    }
}
