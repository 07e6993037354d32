//! Telegram object model.
//!
//! One record per Telegram JSON object, grouped by API area. Every record
//! is hydrated with [`WireRecord::hydrate`](crate::WireRecord::hydrate) and
//! flattened back with [`WireRecord::to_value`](crate::WireRecord::to_value).

mod bot;
mod chat;
mod games;
mod inline;
mod keyboard;
mod media;
mod message;
mod passport;
mod payments;
mod update;
mod user;
mod values;

pub use bot::{BotCommand, BotCommandScope, ResponseParameters, WebhookInfo};
pub use chat::{
    Chat, ChatAdministratorRights, ChatInviteLink, ChatJoinRequest, ChatLocation, ChatMember,
    ChatMemberUpdated, ChatPermissions, ChatPhoto, MemberStatus,
};
pub use games::{Game, GameHighScore};
pub use inline::{CallbackQuery, ChosenInlineResult, InlineQuery, InlineQueryResult, InputMessageContent};
pub use keyboard::{
    CallbackGame, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardButtonPollType, LoginUrl, ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup,
};
pub use media::{
    Animation, Audio, Contact, Dice, Document, File, InputMedia, Location, MaskPosition, Poll,
    PollAnswer, PollOption, PhotoSize, Sticker, StickerSet, UserProfilePhotos, Venue, Video,
    VideoNote, Voice,
};
pub use message::{
    Edited, Message, MessageAutoDeleteTimerChanged, MessageEntity, MessageId,
    ProximityAlertTriggered, VoiceChatEnded, VoiceChatParticipantsInvited, VoiceChatScheduled,
    VoiceChatStarted,
};
pub use passport::{
    EncryptedCredentials, EncryptedPassportElement, PassportData, PassportElementError,
    PassportFile,
};
pub use payments::{
    Invoice, LabeledPrice, OrderInfo, PreCheckoutQuery, ShippingAddress, ShippingOption,
    ShippingQuery, SuccessfulPayment,
};
pub use update::{Update, UpdateKind};
pub use user::User;
pub use values::{ChatAction, ChatId, ParseMode};
