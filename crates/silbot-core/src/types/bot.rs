use super::ChatId;

wire_record! {
    /// Current status of a webhook, from `getWebhookInfo`.
    pub struct WebhookInfo {
        /// Empty when no webhook is set.
        pub url: String,
        pub has_custom_certificate: bool,
        pub pending_update_count: i64,
        pub ip_address: String,
        pub last_error_date: i64,
        pub last_error_message: String,
        pub max_connections: i64,
        pub allowed_updates: Vec<String>,
    }
}

wire_record! {
    /// Hints attached to a failed response.
    pub struct ResponseParameters {
        /// The group was migrated to a supergroup with this id.
        pub migrate_to_chat_id: i64,
        /// Seconds to wait before repeating a flood-limited request.
        pub retry_after: i64,
    }
}

wire_record! {
    pub struct BotCommand {
        /// 1-32 characters: lowercase letters, digits and underscores.
        pub command: String,
        pub description: String,
    }
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }
}

wire_record! {
    /// Scope of a command list; `kind` selects one of seven scopes.
    pub struct BotCommandScope {
        #[serde(rename = "type")]
        pub kind: String,
        pub chat_id: ChatId,
        pub user_id: i64,
    }
}

impl BotCommandScope {
    fn of(kind: &str) -> Self {
        Self {
            kind: Some(kind.to_string()),
            ..Default::default()
        }
    }

    pub fn default_scope() -> Self {
        Self::of("default")
    }

    pub fn all_private_chats() -> Self {
        Self::of("all_private_chats")
    }

    pub fn all_group_chats() -> Self {
        Self::of("all_group_chats")
    }

    pub fn all_chat_administrators() -> Self {
        Self::of("all_chat_administrators")
    }

    pub fn chat(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            ..Self::of("chat")
        }
    }

    pub fn chat_administrators(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            ..Self::of("chat_administrators")
        }
    }

    pub fn chat_member(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            user_id: Some(user_id),
            ..Self::of("chat_member")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WireRecord;
    use serde_json::json;

    #[test]
    fn test_scope_serialization() {
        assert_eq!(
            BotCommandScope::chat_member(-100_i64, 7).to_value(),
            json!({"type": "chat_member", "chat_id": -100, "user_id": 7})
        );
        assert_eq!(
            BotCommandScope::chat("@channel").to_value(),
            json!({"type": "chat", "chat_id": "@channel"})
        );
        assert_eq!(BotCommandScope::default_scope().to_value(), json!({"type": "default"}));
    }

    #[test]
    fn test_response_parameters_hydrate() {
        let params = ResponseParameters::hydrate(&json!({"retry_after": 30}));
        assert_eq!(params.retry_after, Some(30));
        assert_eq!(params.migrate_to_chat_id, None);
    }

    #[test]
    fn test_webhook_info_lists() {
        let info = WebhookInfo::hydrate(&json!({
            "url": "",
            "has_custom_certificate": false,
            "pending_update_count": 3,
            "allowed_updates": ["message", "callback_query"]
        }));
        assert_eq!(info.pending_update_count, Some(3));
        assert_eq!(info.allowed_updates.unwrap().len(), 2);
    }
}
