use super::{
    CallbackQuery, ChatJoinRequest, ChatMemberUpdated, ChosenInlineResult, InlineQuery, Message,
    Poll, PollAnswer, PreCheckoutQuery, ShippingQuery,
};
use crate::database::DatabaseManager;
use crate::error::SilbotError;
use std::sync::Arc;
use tracing::debug;

wire_record! {
    /// An incoming update. At most one of the optional payload fields is
    /// present.
    pub struct Update {
        /// Increases sequentially; drives the long-poll offset.
        pub update_id: i64,
        pub message: Message,
        pub edited_message: Message,
        pub channel_post: Message,
        pub edited_channel_post: Message,
        pub inline_query: InlineQuery,
        pub chosen_inline_result: ChosenInlineResult,
        pub callback_query: CallbackQuery,
        pub shipping_query: ShippingQuery,
        pub pre_checkout_query: PreCheckoutQuery,
        pub poll: Poll,
        pub poll_answer: PollAnswer,
        pub my_chat_member: ChatMemberUpdated,
        pub chat_member: ChatMemberUpdated,
        pub chat_join_request: ChatJoinRequest,
    }
}

/// Which payload an [`Update`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    Poll,
    PollAnswer,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
    /// No known payload; the update may carry a newer field in `extra`.
    Unknown,
}

impl UpdateKind {
    /// Name of the payload field, as used in `allowed_updates`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::EditedMessage => "edited_message",
            Self::ChannelPost => "channel_post",
            Self::EditedChannelPost => "edited_channel_post",
            Self::InlineQuery => "inline_query",
            Self::ChosenInlineResult => "chosen_inline_result",
            Self::CallbackQuery => "callback_query",
            Self::ShippingQuery => "shipping_query",
            Self::PreCheckoutQuery => "pre_checkout_query",
            Self::Poll => "poll",
            Self::PollAnswer => "poll_answer",
            Self::MyChatMember => "my_chat_member",
            Self::ChatMember => "chat_member",
            Self::ChatJoinRequest => "chat_join_request",
            Self::Unknown => "unknown",
        }
    }
}

impl Update {
    pub fn kind(&self) -> UpdateKind {
        if self.message.is_some() {
            UpdateKind::Message
        } else if self.edited_message.is_some() {
            UpdateKind::EditedMessage
        } else if self.channel_post.is_some() {
            UpdateKind::ChannelPost
        } else if self.edited_channel_post.is_some() {
            UpdateKind::EditedChannelPost
        } else if self.inline_query.is_some() {
            UpdateKind::InlineQuery
        } else if self.chosen_inline_result.is_some() {
            UpdateKind::ChosenInlineResult
        } else if self.callback_query.is_some() {
            UpdateKind::CallbackQuery
        } else if self.shipping_query.is_some() {
            UpdateKind::ShippingQuery
        } else if self.pre_checkout_query.is_some() {
            UpdateKind::PreCheckoutQuery
        } else if self.poll.is_some() {
            UpdateKind::Poll
        } else if self.poll_answer.is_some() {
            UpdateKind::PollAnswer
        } else if self.my_chat_member.is_some() {
            UpdateKind::MyChatMember
        } else if self.chat_member.is_some() {
            UpdateKind::ChatMember
        } else if self.chat_join_request.is_some() {
            UpdateKind::ChatJoinRequest
        } else {
            UpdateKind::Unknown
        }
    }

    /// Store the sender and chat of this update through `manager`.
    ///
    /// Checks `message`, `callback_query`, `edited_message`, `channel_post`,
    /// `chosen_inline_result`, `inline_query` and `shipping_query` in that
    /// order and saves the participants of the first one present. The
    /// manager stays attached to the saved records.
    pub async fn save_participants(
        &mut self,
        manager: Arc<dyn DatabaseManager>,
    ) -> Result<(), SilbotError> {
        if let Some(message) = self.message.as_mut() {
            if let Some(user) = message.from.as_mut() {
                user.set_db_manager(manager.clone());
                user.save().await?;
            }
            if let Some(chat) = message.chat.as_mut() {
                chat.set_db_manager(manager);
                chat.save().await?;
            }
        } else if let Some(query) = self.callback_query.as_mut() {
            if let Some(user) = query.from.as_mut() {
                user.set_db_manager(manager);
                user.save().await?;
            }
        } else if let Some(chat) = self
            .edited_message
            .as_mut()
            .or(self.channel_post.as_mut())
            .and_then(|message| message.chat.as_mut())
        {
            chat.set_db_manager(manager);
            chat.save().await?;
        } else if let Some(user) = self
            .chosen_inline_result
            .as_mut()
            .and_then(|result| result.from.as_mut())
            .or(self.inline_query.as_mut().and_then(|query| query.from.as_mut()))
            .or(self.shipping_query.as_mut().and_then(|query| query.from.as_mut()))
        {
            user.set_db_manager(manager);
            user.save().await?;
        } else {
            debug!(kind = self.kind().as_str(), "update has no participants to save");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::tests::RecordingManager;
    use crate::WireRecord;
    use serde_json::json;

    #[test]
    fn test_kind_classification() {
        let update = Update::hydrate(&json!({"update_id": 1, "message": {"message_id": 1}}));
        assert_eq!(update.kind(), UpdateKind::Message);
        let update = Update::hydrate(&json!({"update_id": 2, "poll_answer": {"poll_id": "p"}}));
        assert_eq!(update.kind(), UpdateKind::PollAnswer);
        let update = Update::hydrate(&json!({"update_id": 3, "message_reaction": {}}));
        assert_eq!(update.kind(), UpdateKind::Unknown);
        assert!(update.extra_field("message_reaction").is_some());
    }

    #[test]
    fn test_hydrate_full_message_update() {
        let update = Update::hydrate(&json!({
            "update_id": 123,
            "message": {
                "message_id": 1,
                "from": {"id": 42, "is_bot": false, "first_name": "Ann", "username": "ann"},
                "chat": {"id": 42, "type": "private"},
                "date": 1_700_000_000,
                "text": "hello"
            }
        }));
        assert_eq!(update.update_id, Some(123));
        let message = update.message.unwrap();
        assert_eq!(message.text.as_deref(), Some("hello"));
        assert_eq!(message.from.unwrap().display_name(), "@ann");
    }

    #[tokio::test]
    async fn test_message_saves_user_then_chat() {
        let manager = Arc::new(RecordingManager::default());
        let mut update = Update::hydrate(&json!({
            "update_id": 1,
            "message": {
                "message_id": 1,
                "from": {"id": 7, "first_name": "Ann"},
                "chat": {"id": -20, "type": "group"}
            }
        }));
        update.save_participants(manager.clone()).await.unwrap();
        assert_eq!(manager.calls(), vec!["add_user:7", "add_chat:-20"]);

        let message = update.message.unwrap();
        assert!(message.chat.unwrap().db_manager().is_some());
        assert!(message.from.unwrap().db.is_some());
    }

    #[tokio::test]
    async fn test_channel_post_saves_chat_only() {
        let manager = Arc::new(RecordingManager::default());
        let mut update = Update::hydrate(&json!({
            "update_id": 2,
            "channel_post": {"message_id": 4, "chat": {"id": -100, "type": "channel"}}
        }));
        update.save_participants(manager.clone()).await.unwrap();
        assert_eq!(manager.calls(), vec!["add_chat:-100"]);
    }

    #[tokio::test]
    async fn test_inline_query_saves_sender() {
        let manager = Arc::new(RecordingManager::default());
        let mut update = Update::hydrate(&json!({
            "update_id": 3,
            "inline_query": {"id": "q", "from": {"id": 9}, "query": "cats", "offset": ""}
        }));
        update.save_participants(manager.clone()).await.unwrap();
        assert_eq!(manager.calls(), vec!["add_user:9"]);
    }

    #[tokio::test]
    async fn test_poll_update_saves_nothing() {
        let manager = Arc::new(RecordingManager::default());
        let mut update = Update::hydrate(&json!({"update_id": 4, "poll": {"id": "p"}}));
        update.save_participants(manager.clone()).await.unwrap();
        assert!(manager.calls().is_empty());
    }
}
