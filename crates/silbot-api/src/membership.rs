//! Live membership checks and callback answers on hydrated records.

use crate::client::BotApi;
use crate::methods::ApiResult;
use async_trait::async_trait;
use silbot_core::types::{CallbackQuery, Chat, ChatMember, User};
use tracing::debug;

/// Membership questions answered by a live `getChatMember` call.
///
/// For a [`Chat`] the record is the chat and `other_id` a user; for a
/// [`User`] the record is the user and `other_id` a chat. Any failed
/// envelope answers `false`.
#[async_trait]
pub trait MembershipExt {
    async fn is_member(&self, bot: &BotApi, other_id: i64) -> bool;
    async fn is_admin(&self, bot: &BotApi, other_id: i64) -> bool;
}

async fn member(bot: &BotApi, chat_id: Option<i64>, user_id: Option<i64>) -> Option<ChatMember> {
    let (Some(chat_id), Some(user_id)) = (chat_id, user_id) else {
        debug!("membership check skipped: record without id");
        return None;
    };
    let (member, _) = bot.get_chat_member(chat_id, user_id).await;
    member
}

#[async_trait]
impl MembershipExt for Chat {
    async fn is_member(&self, bot: &BotApi, user_id: i64) -> bool {
        member(bot, self.id, Some(user_id))
            .await
            .is_some_and(|m| m.is_present())
    }

    async fn is_admin(&self, bot: &BotApi, user_id: i64) -> bool {
        member(bot, self.id, Some(user_id))
            .await
            .is_some_and(|m| m.is_admin())
    }
}

#[async_trait]
impl MembershipExt for User {
    async fn is_member(&self, bot: &BotApi, chat_id: i64) -> bool {
        member(bot, Some(chat_id), self.id)
            .await
            .is_some_and(|m| m.is_present())
    }

    async fn is_admin(&self, bot: &BotApi, chat_id: i64) -> bool {
        member(bot, Some(chat_id), self.id)
            .await
            .is_some_and(|m| m.is_admin())
    }
}

#[async_trait]
pub trait CallbackQueryExt {
    /// Answer this query, stopping the client's progress indicator.
    async fn answer(&self, bot: &BotApi, text: Option<&str>, show_alert: bool) -> ApiResult<bool>;
}

#[async_trait]
impl CallbackQueryExt for CallbackQuery {
    async fn answer(&self, bot: &BotApi, text: Option<&str>, show_alert: bool) -> ApiResult<bool> {
        let id = self.id.as_deref().unwrap_or_default();
        bot.answer_callback_query(id, text, Some(show_alert), None, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use silbot_core::WireRecord;

    fn bot(server: &mockito::ServerGuard) -> BotApi {
        BotApi::new("9:x").unwrap().with_api_url(&server.url())
    }

    async fn member_mock(server: &mut mockito::ServerGuard, body: &str) -> mockito::Mock {
        server
            .mock("GET", "/bot9:x/getChatMember")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("chat_id".into(), "-100".into()),
                Matcher::UrlEncoded("user_id".into(), "7".into()),
            ]))
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_chat_member_and_admin() {
        let mut server = mockito::Server::new_async().await;
        let _m = member_mock(&mut server, r#"{"ok":true,"result":{"status":"creator"}}"#).await;
        let chat: Chat = WireRecord::hydrate(&serde_json::json!({"id": -100, "type": "supergroup"}));
        let bot = bot(&server);
        assert!(chat.is_member(&bot, 7).await);
        assert!(chat.is_admin(&bot, 7).await);
    }

    #[tokio::test]
    async fn test_user_restricted_not_member() {
        let mut server = mockito::Server::new_async().await;
        let _m = member_mock(
            &mut server,
            r#"{"ok":true,"result":{"status":"restricted","is_member":false}}"#,
        )
        .await;
        let user: User = WireRecord::hydrate(&serde_json::json!({"id": 7}));
        let bot = bot(&server);
        assert!(!user.is_member(&bot, -100).await);
        assert!(!user.is_admin(&bot, -100).await);
    }

    #[tokio::test]
    async fn test_failed_envelope_is_false() {
        let mut server = mockito::Server::new_async().await;
        let _m = member_mock(
            &mut server,
            r#"{"ok":false,"error_code":400,"description":"user not found"}"#,
        )
        .await;
        let chat: Chat = WireRecord::hydrate(&serde_json::json!({"id": -100}));
        assert!(!chat.is_member(&bot(&server), 7).await);
    }

    #[tokio::test]
    async fn test_callback_answer_uses_query_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/bot9:x/answerCallbackQuery")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("callback_query_id".into(), "q1".into()),
                Matcher::UrlEncoded("text".into(), "Done".into()),
                Matcher::UrlEncoded("show_alert".into(), "false".into()),
            ]))
            .with_body(r#"{"ok":true,"result":true}"#)
            .create_async()
            .await;
        let query: CallbackQuery = WireRecord::hydrate(&serde_json::json!({"id": "q1", "data": "/edit"}));
        let (answered, _) = query.answer(&bot(&server), Some("Done"), false).await;
        mock.assert_async().await;
        assert_eq!(answered, Some(true));
    }
}
