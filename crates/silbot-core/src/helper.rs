//! Serialization helper and keyboard builders.

use crate::types::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardButtonPollType, ReplyKeyboardMarkup, ReplyKeyboardRemove,
};
use serde::Serialize;
use serde_json::Value;

/// Flatten a record (or any serializable value) into plain JSON.
///
/// `None` fields are dropped, nested records and lists are flattened
/// recursively, and unrecognized `extra` keys are re-emitted as they came.
/// Plain values pass through unchanged.
pub fn to_json_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Same as [`to_json_value`], JSON-encoded.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn inline_button(text: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton {
        text: Some(text.into()),
        ..Default::default()
    }
}

/// Inline button sending `callback_data` back to the bot.
pub fn inline_kb_data(text: impl Into<String>, callback_data: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton {
        callback_data: Some(callback_data.into()),
        ..inline_button(text)
    }
}

/// Inline button opening `url`.
pub fn inline_kb_url(text: impl Into<String>, url: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton {
        url: Some(url.into()),
        ..inline_button(text)
    }
}

/// Inline button switching to inline mode in a chat picked by the user.
pub fn inline_kb_switch(text: impl Into<String>, query: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton {
        switch_inline_query: Some(query.into()),
        ..inline_button(text)
    }
}

/// Inline button switching to inline mode in the current chat.
pub fn inline_kb_switch_current(
    text: impl Into<String>,
    query: impl Into<String>,
) -> InlineKeyboardButton {
    InlineKeyboardButton {
        switch_inline_query_current_chat: Some(query.into()),
        ..inline_button(text)
    }
}

pub fn inline_kb_row(
    buttons: impl IntoIterator<Item = InlineKeyboardButton>,
) -> Vec<InlineKeyboardButton> {
    buttons.into_iter().collect()
}

pub fn inline_kb_markup(
    rows: impl IntoIterator<Item = Vec<InlineKeyboardButton>>,
) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: Some(rows.into_iter().collect()),
        ..Default::default()
    }
}

/// Reply keyboard button; the request flags are omitted when `None`.
pub fn reply_kb_button(
    text: impl Into<String>,
    request_contact: Option<bool>,
    request_location: Option<bool>,
    request_poll: Option<KeyboardButtonPollType>,
) -> KeyboardButton {
    KeyboardButton {
        text: Some(text.into()),
        request_contact,
        request_location,
        request_poll,
        ..Default::default()
    }
}

pub fn reply_kb_row(buttons: impl IntoIterator<Item = KeyboardButton>) -> Vec<KeyboardButton> {
    buttons.into_iter().collect()
}

pub fn reply_keyboard(rows: impl IntoIterator<Item = Vec<KeyboardButton>>) -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup {
        keyboard: Some(rows.into_iter().collect()),
        ..Default::default()
    }
}

pub fn reply_keyboard_remove() -> ReplyKeyboardRemove {
    ReplyKeyboardRemove {
        remove_keyboard: Some(true),
        ..Default::default()
    }
}

pub fn force_reply() -> ForceReply {
    ForceReply {
        force_reply: Some(true),
        ..Default::default()
    }
}
