//! Small value types used when building requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target chat: a numeric id or a public `@username`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

/// Formatting mode for message text and captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "Markdown",
            Self::MarkdownV2 => "MarkdownV2",
            Self::Html => "HTML",
        }
    }
}

impl std::str::FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" => Ok(Self::Markdown),
            "markdownv2" => Ok(Self::MarkdownV2),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown parse mode '{other}'")),
        }
    }
}

/// Status shown to the other party by `sendChatAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    ChooseSticker,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_serializes_untagged() {
        assert_eq!(serde_json::to_value(ChatId::from(-100_i64)).unwrap(), -100);
        assert_eq!(
            serde_json::to_value(ChatId::from("@channel")).unwrap(),
            "@channel"
        );
    }

    #[test]
    fn test_parse_mode_from_config_string() {
        assert_eq!("HTML".parse::<ParseMode>().unwrap(), ParseMode::Html);
        assert_eq!("markdownv2".parse::<ParseMode>().unwrap(), ParseMode::MarkdownV2);
        assert!("bbcode".parse::<ParseMode>().is_err());
        assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), "HTML");
    }

    #[test]
    fn test_chat_action_wire_name() {
        assert_eq!(
            serde_json::to_value(ChatAction::UploadDocument).unwrap(),
            "upload_document"
        );
    }
}
