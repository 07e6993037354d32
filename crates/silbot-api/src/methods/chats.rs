use super::ApiResult;
use crate::client::BotApi;
use crate::params::Params;
use serde::Serialize;
use silbot_core::types::{
    Chat, ChatAdministratorRights, ChatId, ChatInviteLink, ChatMember, ChatPermissions,
};

/// Optional arguments of `createChatInviteLink` and `editChatInviteLink`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InviteLinkSettings {
    pub name: Option<String>,
    /// Unix time.
    pub expire_date: Option<i64>,
    /// 1-99999 simultaneous members.
    pub member_limit: Option<i64>,
    /// Members must be approved; excludes `member_limit`.
    pub creates_join_request: Option<bool>,
}

fn chat(chat_id: impl Into<ChatId>) -> Params {
    Params::new().set::<ChatId>("chat_id", chat_id.into())
}

impl BotApi {
    /// Ban a user; for supergroups and channels the ban is permanent unless
    /// `until_date` is given.
    pub async fn ban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        until_date: Option<i64>,
        revoke_messages: Option<bool>,
    ) -> ApiResult<bool> {
        let params = chat(chat_id)
            .set("user_id", user_id)
            .opt("until_date", until_date)
            .opt("revoke_messages", revoke_messages);
        self.request("banChatMember", params).await
    }

    /// With `only_if_banned`, a current member is left untouched instead of
    /// being removed.
    pub async fn unban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        only_if_banned: Option<bool>,
    ) -> ApiResult<bool> {
        let params = chat(chat_id)
            .set("user_id", user_id)
            .opt("only_if_banned", only_if_banned);
        self.request("unbanChatMember", params).await
    }

    pub async fn restrict_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        permissions: &ChatPermissions,
        until_date: Option<i64>,
    ) -> ApiResult<bool> {
        let params = chat(chat_id)
            .set("user_id", user_id)
            .set("permissions", permissions)
            .opt("until_date", until_date);
        self.request("restrictChatMember", params).await
    }

    /// Each right is sent as its own flag; unset rights are left unchanged.
    pub async fn promote_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        rights: &ChatAdministratorRights,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).set("user_id", user_id).merge(rights);
        self.request("promoteChatMember", params).await
    }

    pub async fn set_chat_administrator_custom_title(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        custom_title: &str,
    ) -> ApiResult<bool> {
        let params = chat(chat_id)
            .set("user_id", user_id)
            .set("custom_title", custom_title);
        self.request("setChatAdministratorCustomTitle", params)
            .await
    }

    pub async fn ban_chat_sender_chat(
        &self,
        chat_id: impl Into<ChatId>,
        sender_chat_id: i64,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).set("sender_chat_id", sender_chat_id);
        self.request("banChatSenderChat", params).await
    }

    pub async fn unban_chat_sender_chat(
        &self,
        chat_id: impl Into<ChatId>,
        sender_chat_id: i64,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).set("sender_chat_id", sender_chat_id);
        self.request("unbanChatSenderChat", params).await
    }

    pub async fn set_chat_permissions(
        &self,
        chat_id: impl Into<ChatId>,
        permissions: &ChatPermissions,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).set("permissions", permissions);
        self.request("setChatPermissions", params).await
    }

    /// Generate a new primary invite link, revoking the previous one.
    pub async fn export_chat_invite_link(&self, chat_id: impl Into<ChatId>) -> ApiResult<String> {
        self.request("exportChatInviteLink", chat(chat_id)).await
    }

    pub async fn create_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
        settings: &InviteLinkSettings,
    ) -> ApiResult<ChatInviteLink> {
        let params = chat(chat_id).merge(settings);
        self.request("createChatInviteLink", params).await
    }

    pub async fn edit_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
        invite_link: &str,
        settings: &InviteLinkSettings,
    ) -> ApiResult<ChatInviteLink> {
        let params = chat(chat_id)
            .set("invite_link", invite_link)
            .merge(settings);
        self.request("editChatInviteLink", params).await
    }

    pub async fn revoke_chat_invite_link(
        &self,
        chat_id: impl Into<ChatId>,
        invite_link: &str,
    ) -> ApiResult<ChatInviteLink> {
        let params = chat(chat_id).set("invite_link", invite_link);
        self.request("revokeChatInviteLink", params).await
    }

    pub async fn approve_chat_join_request(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).set("user_id", user_id);
        self.request("approveChatJoinRequest", params).await
    }

    pub async fn decline_chat_join_request(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).set("user_id", user_id);
        self.request("declineChatJoinRequest", params).await
    }

    pub async fn delete_chat_photo(&self, chat_id: impl Into<ChatId>) -> ApiResult<bool> {
        self.request("deleteChatPhoto", chat(chat_id)).await
    }

    pub async fn set_chat_title(&self, chat_id: impl Into<ChatId>, title: &str) -> ApiResult<bool> {
        self.request("setChatTitle", chat(chat_id).set("title", title))
            .await
    }

    /// `None` clears the description.
    pub async fn set_chat_description(
        &self,
        chat_id: impl Into<ChatId>,
        description: Option<&str>,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).opt("description", description);
        self.request("setChatDescription", params).await
    }

    pub async fn pin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: i64,
        disable_notification: Option<bool>,
    ) -> ApiResult<bool> {
        let params = chat(chat_id)
            .set("message_id", message_id)
            .or_default(
                "disable_notification",
                disable_notification,
                self.defaults().disable_notification,
            );
        self.request("pinChatMessage", params).await
    }

    /// Unpin `message_id`, or the most recent pinned message when `None`.
    pub async fn unpin_chat_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: Option<i64>,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).opt("message_id", message_id);
        self.request("unpinChatMessage", params).await
    }

    pub async fn unpin_all_chat_messages(&self, chat_id: impl Into<ChatId>) -> ApiResult<bool> {
        self.request("unpinAllChatMessages", chat(chat_id)).await
    }

    pub async fn leave_chat(&self, chat_id: impl Into<ChatId>) -> ApiResult<bool> {
        self.request("leaveChat", chat(chat_id)).await
    }

    pub async fn get_chat(&self, chat_id: impl Into<ChatId>) -> ApiResult<Chat> {
        self.request("getChat", chat(chat_id)).await
    }

    /// Administrators other than bots.
    pub async fn get_chat_administrators(
        &self,
        chat_id: impl Into<ChatId>,
    ) -> ApiResult<Vec<ChatMember>> {
        self.request("getChatAdministrators", chat(chat_id)).await
    }

    pub async fn get_chat_member_count(&self, chat_id: impl Into<ChatId>) -> ApiResult<i64> {
        self.request("getChatMemberCount", chat(chat_id)).await
    }

    pub async fn get_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> ApiResult<ChatMember> {
        let params = chat(chat_id).set("user_id", user_id);
        self.request("getChatMember", params).await
    }

    pub async fn set_chat_sticker_set(
        &self,
        chat_id: impl Into<ChatId>,
        sticker_set_name: &str,
    ) -> ApiResult<bool> {
        let params = chat(chat_id).set("sticker_set_name", sticker_set_name);
        self.request("setChatStickerSet", params).await
    }

    pub async fn delete_chat_sticker_set(&self, chat_id: impl Into<ChatId>) -> ApiResult<bool> {
        self.request("deleteChatStickerSet", chat(chat_id)).await
    }
}
