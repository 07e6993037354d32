use super::{MessageEntity, ParseMode, User};

wire_record! {
    pub struct PhotoSize {
        pub file_id: String,
        /// Stable across bots; cannot be used to download the file.
        pub file_unique_id: String,
        pub width: i64,
        pub height: i64,
        pub file_size: i64,
    }
}

wire_record! {
    pub struct Animation {
        pub file_id: String,
        pub file_unique_id: String,
        pub width: i64,
        pub height: i64,
        pub duration: i64,
        pub thumb: PhotoSize,
        pub file_name: String,
        pub mime_type: String,
        pub file_size: i64,
    }
}

wire_record! {
    pub struct Audio {
        pub file_id: String,
        pub file_unique_id: String,
        pub duration: i64,
        pub performer: String,
        pub title: String,
        pub file_name: String,
        pub mime_type: String,
        pub file_size: i64,
        pub thumb: PhotoSize,
    }
}

wire_record! {
    pub struct Document {
        pub file_id: String,
        pub file_unique_id: String,
        pub thumb: PhotoSize,
        pub file_name: String,
        pub mime_type: String,
        pub file_size: i64,
    }
}

wire_record! {
    pub struct Video {
        pub file_id: String,
        pub file_unique_id: String,
        pub width: i64,
        pub height: i64,
        pub duration: i64,
        pub thumb: PhotoSize,
        pub file_name: String,
        pub mime_type: String,
        pub file_size: i64,
    }
}

wire_record! {
    pub struct VideoNote {
        pub file_id: String,
        pub file_unique_id: String,
        /// Diameter of the round video.
        pub length: i64,
        pub duration: i64,
        pub thumb: PhotoSize,
        pub file_size: i64,
    }
}

wire_record! {
    pub struct Voice {
        pub file_id: String,
        pub file_unique_id: String,
        pub duration: i64,
        pub mime_type: String,
        pub file_size: i64,
    }
}

wire_record! {
    pub struct Contact {
        pub phone_number: String,
        pub first_name: String,
        pub last_name: String,
        pub user_id: i64,
        pub vcard: String,
    }
}

wire_record! {
    pub struct Location {
        pub longitude: f64,
        pub latitude: f64,
        /// Radius of uncertainty in meters, 0-1500.
        pub horizontal_accuracy: f64,
        pub live_period: i64,
        pub heading: i64,
        pub proximity_alert_radius: i64,
    }
}

wire_record! {
    pub struct Venue {
        pub location: Location,
        pub title: String,
        pub address: String,
        pub foursquare_id: String,
        pub foursquare_type: String,
        pub google_place_id: String,
        pub google_place_type: String,
    }
}

wire_record! {
    /// A file ready to be downloaded with [`File::download_path`].
    pub struct File {
        pub file_id: String,
        pub file_unique_id: String,
        pub file_size: i64,
        pub file_path: String,
    }
}

impl File {
    /// Path segment appended to `https://api.telegram.org/file/bot<token>/`.
    pub fn download_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }
}

wire_record! {
    pub struct UserProfilePhotos {
        pub total_count: i64,
        /// Up to four sizes per photo.
        pub photos: Vec<Vec<PhotoSize>>,
    }
}

wire_record! {
    pub struct Sticker {
        pub file_id: String,
        pub file_unique_id: String,
        pub width: i64,
        pub height: i64,
        pub is_animated: bool,
        pub thumb: PhotoSize,
        pub emoji: String,
        pub set_name: String,
        pub mask_position: MaskPosition,
        pub file_size: i64,
    }
}

wire_record! {
    pub struct StickerSet {
        pub name: String,
        pub title: String,
        pub is_animated: bool,
        pub contains_masks: bool,
        pub stickers: Vec<Sticker>,
        pub thumb: PhotoSize,
    }
}

wire_record! {
    pub struct MaskPosition {
        /// "forehead", "eyes", "mouth" or "chin".
        pub point: String,
        pub x_shift: f64,
        pub y_shift: f64,
        pub scale: f64,
    }
}

wire_record! {
    /// Outgoing media for `sendMediaGroup` and `editMessageMedia`.
    ///
    /// The five Telegram shapes (photo, video, animation, audio, document)
    /// share one record; `kind` selects the shape.
    pub struct InputMedia {
        #[serde(rename = "type")]
        pub kind: String,
        /// file_id or HTTP URL.
        pub media: String,
        pub thumb: String,
        pub caption: String,
        pub parse_mode: ParseMode,
        pub caption_entities: Vec<MessageEntity>,
        pub width: i64,
        pub height: i64,
        pub duration: i64,
        pub supports_streaming: bool,
        pub performer: String,
        pub title: String,
        pub disable_content_type_detection: bool,
    }
}

impl InputMedia {
    fn of(kind: &str, media: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.to_string()),
            media: Some(media.into()),
            ..Default::default()
        }
    }

    pub fn photo(media: impl Into<String>) -> Self {
        Self::of("photo", media)
    }

    pub fn video(media: impl Into<String>) -> Self {
        Self::of("video", media)
    }

    pub fn animation(media: impl Into<String>) -> Self {
        Self::of("animation", media)
    }

    pub fn audio(media: impl Into<String>) -> Self {
        Self::of("audio", media)
    }

    pub fn document(media: impl Into<String>) -> Self {
        Self::of("document", media)
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

wire_record! {
    pub struct Dice {
        pub emoji: String,
        pub value: i64,
    }
}

wire_record! {
    pub struct PollOption {
        pub text: String,
        pub voter_count: i64,
    }
}

wire_record! {
    pub struct PollAnswer {
        pub poll_id: String,
        pub user: User,
        /// Empty when the user retracted the vote.
        pub option_ids: Vec<i64>,
    }
}

wire_record! {
    pub struct Poll {
        pub id: String,
        pub question: String,
        pub options: Vec<PollOption>,
        pub total_voter_count: i64,
        pub is_closed: bool,
        pub is_anonymous: bool,
        /// "regular" or "quiz".
        #[serde(rename = "type")]
        pub kind: String,
        pub allows_multiple_answers: bool,
        pub correct_option_id: i64,
        pub explanation: String,
        pub explanation_entities: Vec<MessageEntity>,
        pub open_period: i64,
        pub close_date: i64,
    }
}
