use super::{Location, Message, User};
use crate::database::{DatabaseManager, DbLink, Row, Subject};
use crate::error::SilbotError;
use crate::record::{lenient, Expected, Extra, ResultKind, WireRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// A private chat, group, supergroup or channel.
///
/// Fields marked "getChat" are only filled by that method.
/// See <https://core.telegram.org/bots/api#chat>.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// "private", "group", "supergroup" or "channel".
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// getChat.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photo: Option<ChatPhoto>,
    /// getChat.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub has_private_forwards: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,
    /// getChat.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub permissions: Option<ChatPermissions>,
    /// Seconds between messages of unprivileged members, supergroups only.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub slow_mode_delay: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub message_auto_delete_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub has_protected_content: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sticker_set_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub can_set_sticker_set: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub linked_chat_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub location: Option<ChatLocation>,
    #[serde(flatten)]
    pub extra: Extra,
    /// Row returned by the attached manager on the last `save`/`get_info`.
    #[serde(skip)]
    pub db: Option<Row>,
    #[serde(skip)]
    db_manager: DbLink,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.kind.as_deref() == Some("private")
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind.as_deref(), Some("group" | "supergroup"))
    }

    pub fn is_channel(&self) -> bool {
        self.kind.as_deref() == Some("channel")
    }

    pub fn set_db_manager(&mut self, manager: Arc<dyn DatabaseManager>) {
        self.db_manager.attach(manager);
    }

    pub fn db_manager(&self) -> Option<Arc<dyn DatabaseManager>> {
        self.db_manager.manager()
    }

    /// Store this chat through the attached manager; `false` when detached.
    pub async fn save(&mut self) -> Result<bool, SilbotError> {
        self.save_with(&[]).await
    }

    pub async fn save_with(&mut self, extra: &[Value]) -> Result<bool, SilbotError> {
        let Some(manager) = self.db_manager.manager() else {
            return Ok(false);
        };
        let row = manager.add_chat(self, extra).await?;
        self.db = row;
        Ok(self.db.is_some())
    }

    pub async fn get_info(&mut self) -> Result<Option<Row>, SilbotError> {
        let Some(manager) = self.db_manager.manager() else {
            return Ok(None);
        };
        let row = manager.get_info(Subject::Chat(self)).await?;
        self.db = row.clone();
        Ok(row)
    }

    pub async fn set_column(&self, column: &str, value: Value) -> Result<bool, SilbotError> {
        let Some(manager) = self.db_manager.manager() else {
            return Ok(false);
        };
        manager.set_column(Subject::Chat(self), column, value).await?;
        Ok(true)
    }
}

impl WireRecord for Chat {
    const NAME: &'static str = "Chat";

    fn extra(&self) -> &Extra {
        &self.extra
    }
}

impl Expected for Chat {
    fn kind() -> ResultKind {
        ResultKind::Record(Self::NAME)
    }

    fn from_result(value: &Value) -> Option<Self> {
        value.is_object().then(|| Self::hydrate(value))
    }
}

wire_record! {
    pub struct ChatPhoto {
        pub small_file_id: String,
        pub small_file_unique_id: String,
        pub big_file_id: String,
        pub big_file_unique_id: String,
    }
}

wire_record! {
    /// Default member permissions; also the input of `restrictChatMember`.
    pub struct ChatPermissions {
        pub can_send_messages: bool,
        pub can_send_media_messages: bool,
        pub can_send_polls: bool,
        pub can_send_other_messages: bool,
        pub can_add_web_page_previews: bool,
        pub can_change_info: bool,
        pub can_invite_users: bool,
        pub can_pin_messages: bool,
    }
}

wire_record! {
    pub struct ChatLocation {
        pub location: Location,
        pub address: String,
    }
}

wire_record! {
    pub struct ChatInviteLink {
        pub invite_link: String,
        pub creator: User,
        pub creates_join_request: bool,
        pub is_primary: bool,
        pub is_revoked: bool,
        pub name: String,
        pub expire_date: i64,
        pub member_limit: i64,
        pub pending_join_request_count: i64,
    }
}

wire_record! {
    /// Membership of one user in one chat.
    ///
    /// Telegram sends one of six shapes (owner, administrator, member,
    /// restricted, left, banned) discriminated by `status`; they are folded
    /// into one record here and classified by [`ChatMember::status_kind`].
    pub struct ChatMember {
        pub status: String,
        pub user: User,
        pub is_anonymous: bool,
        pub custom_title: String,
        pub can_be_edited: bool,
        pub can_manage_chat: bool,
        pub can_delete_messages: bool,
        pub can_manage_voice_chats: bool,
        pub can_restrict_members: bool,
        pub can_promote_members: bool,
        pub can_change_info: bool,
        pub can_invite_users: bool,
        pub can_post_messages: bool,
        pub can_edit_messages: bool,
        pub can_pin_messages: bool,
        pub is_member: bool,
        pub can_send_messages: bool,
        pub can_send_media_messages: bool,
        pub can_send_polls: bool,
        pub can_send_other_messages: bool,
        pub can_add_web_page_previews: bool,
        pub until_date: i64,
    }
}

/// Classified `ChatMember::status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Kicked,
    Unknown,
}

impl ChatMember {
    pub fn status_kind(&self) -> MemberStatus {
        match self.status.as_deref() {
            Some("creator") => MemberStatus::Creator,
            Some("administrator") => MemberStatus::Administrator,
            Some("member") => MemberStatus::Member,
            Some("restricted") => MemberStatus::Restricted,
            Some("left") => MemberStatus::Left,
            Some("kicked") => MemberStatus::Kicked,
            _ => MemberStatus::Unknown,
        }
    }

    /// Present in the chat: not left, not banned, and not a restricted
    /// ex-member.
    pub fn is_present(&self) -> bool {
        match self.status_kind() {
            MemberStatus::Left | MemberStatus::Kicked => false,
            MemberStatus::Restricted => self.is_member != Some(false),
            _ => true,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self.status_kind(),
            MemberStatus::Creator | MemberStatus::Administrator
        )
    }
}

wire_record! {
    pub struct ChatMemberUpdated {
        pub chat: Chat,
        pub from: User,
        pub date: i64,
        pub old_chat_member: ChatMember,
        pub new_chat_member: ChatMember,
        pub invite_link: ChatInviteLink,
    }
}

wire_record! {
    pub struct ChatJoinRequest {
        pub chat: Chat,
        pub from: User,
        pub date: i64,
        pub bio: String,
        pub invite_link: ChatInviteLink,
    }
}

wire_record! {
    /// Rights granted by `promoteChatMember`.
    pub struct ChatAdministratorRights {
        pub is_anonymous: bool,
        pub can_manage_chat: bool,
        pub can_post_messages: bool,
        pub can_edit_messages: bool,
        pub can_delete_messages: bool,
        pub can_manage_voice_chats: bool,
        pub can_restrict_members: bool,
        pub can_promote_members: bool,
        pub can_change_info: bool,
        pub can_invite_users: bool,
        pub can_pin_messages: bool,
    }
}
