use super::{
    Animation, Audio, Chat, Contact, Dice, Document, Game, InlineKeyboardMarkup, Invoice,
    Location, PassportData, PhotoSize, Poll, Sticker, SuccessfulPayment, User, Venue, Video,
    VideoNote, Voice,
};
use crate::record::{Expected, ResultKind, WireRecord};
use chrono::{DateTime, Utc};
use serde_json::Value;

wire_record! {
    /// A message of any kind.
    ///
    /// See <https://core.telegram.org/bots/api#message>.
    pub struct Message {
        pub message_id: i64,
        pub from: User,
        /// Sender when the message is sent on behalf of a chat.
        pub sender_chat: Chat,
        /// Unix time.
        pub date: i64,
        pub chat: Chat,
        pub forward_from: User,
        pub forward_from_chat: Chat,
        pub forward_from_message_id: i64,
        pub forward_signature: String,
        pub forward_sender_name: String,
        pub forward_date: i64,
        pub is_automatic_forward: bool,
        pub reply_to_message: Box<Message>,
        pub via_bot: User,
        pub edit_date: i64,
        pub has_protected_content: bool,
        pub media_group_id: String,
        pub author_signature: String,
        pub text: String,
        pub entities: Vec<MessageEntity>,
        pub animation: Animation,
        pub audio: Audio,
        pub document: Document,
        /// Available sizes, smallest first.
        pub photo: Vec<PhotoSize>,
        pub sticker: Sticker,
        pub video: Video,
        pub video_note: VideoNote,
        pub voice: Voice,
        pub caption: String,
        pub caption_entities: Vec<MessageEntity>,
        pub contact: Contact,
        pub dice: Dice,
        pub game: Game,
        pub poll: Poll,
        pub venue: Venue,
        pub location: Location,
        pub new_chat_members: Vec<User>,
        pub left_chat_member: User,
        pub new_chat_title: String,
        pub new_chat_photo: Vec<PhotoSize>,
        pub delete_chat_photo: bool,
        pub group_chat_created: bool,
        pub supergroup_chat_created: bool,
        pub channel_chat_created: bool,
        pub message_auto_delete_timer_changed: MessageAutoDeleteTimerChanged,
        pub migrate_to_chat_id: i64,
        pub migrate_from_chat_id: i64,
        pub pinned_message: Box<Message>,
        pub invoice: Invoice,
        pub successful_payment: SuccessfulPayment,
        pub connected_website: String,
        pub passport_data: PassportData,
        pub proximity_alert_triggered: ProximityAlertTriggered,
        pub voice_chat_scheduled: VoiceChatScheduled,
        pub voice_chat_started: VoiceChatStarted,
        pub voice_chat_ended: VoiceChatEnded,
        pub voice_chat_participants_invited: VoiceChatParticipantsInvited,
        /// Only inline keyboards can be attached to messages.
        pub reply_markup: InlineKeyboardMarkup,
    }
}

impl Message {
    /// Send time as a UTC timestamp.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date?, 0)
    }

    pub fn is_command(&self) -> bool {
        self.command().is_some()
    }

    /// Split a leading `/command@bot args` into `("command", "args")`.
    pub fn command(&self) -> Option<(&str, &str)> {
        let text = self.text.as_deref()?.strip_prefix('/')?;
        let (head, args) = match text.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim_start()),
            None => (text, ""),
        };
        let command = head.split('@').next().unwrap_or(head);
        if command.is_empty() {
            return None;
        }
        Some((command, args))
    }

    /// Text for plain messages, caption for media.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text.as_deref().or(self.caption.as_deref())
    }
}

wire_record! {
    pub struct MessageId {
        pub message_id: i64,
    }
}

wire_record! {
    /// A special span in a text: hashtag, bot command, URL, bold, ...
    pub struct MessageEntity {
        #[serde(rename = "type")]
        pub kind: String,
        /// UTF-16 code units.
        pub offset: i64,
        pub length: i64,
        pub url: String,
        pub user: User,
        pub language: String,
    }
}

wire_record! {
    pub struct MessageAutoDeleteTimerChanged {
        pub message_auto_delete_time: i64,
    }
}

wire_record! {
    pub struct ProximityAlertTriggered {
        pub traveler: User,
        pub watcher: User,
        pub distance: i64,
    }
}

wire_record! {
    pub struct VoiceChatScheduled {
        pub start_date: i64,
    }
}

wire_record! {
    /// Carries no fields; its presence is the signal.
    pub struct VoiceChatStarted {}
}

wire_record! {
    pub struct VoiceChatEnded {
        pub duration: i64,
    }
}

wire_record! {
    pub struct VoiceChatParticipantsInvited {
        pub users: Vec<User>,
    }
}

/// Result of the edit methods: the edited message, or `true` when the
/// message was sent via inline mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Edited {
    Message(Box<Message>),
    Done(bool),
}

impl Expected for Edited {
    fn kind() -> ResultKind {
        ResultKind::Record("Message")
    }

    fn from_result(value: &Value) -> Option<Self> {
        if value.is_object() {
            return Some(Self::Message(Box::new(Message::hydrate(value))));
        }
        value.as_bool().map(Self::Done)
    }
}
