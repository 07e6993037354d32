use crate::database::{DatabaseManager, DbLink, Row, Subject};
use crate::error::SilbotError;
use crate::record::{lenient, Expected, Extra, ResultKind, WireRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// A Telegram user or bot.
///
/// See <https://core.telegram.org/bots/api#user>.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// IETF language tag of the user's client.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// Returned only in `getMe`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub can_join_groups: Option<bool>,
    /// Returned only in `getMe`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub can_read_all_group_messages: Option<bool>,
    /// Returned only in `getMe`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub supports_inline_queries: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
    /// Row returned by the attached manager on the last `save`/`get_info`.
    #[serde(skip)]
    pub db: Option<Row>,
    #[serde(skip)]
    db_manager: DbLink,
}

impl User {
    /// `@username` when set, otherwise the full name.
    pub fn display_name(&self) -> String {
        if let Some(ref username) = self.username {
            return format!("@{username}");
        }
        let first = self.first_name.clone().unwrap_or_default();
        match self.last_name {
            Some(ref last) => format!("{first} {last}"),
            None => first,
        }
    }

    /// Attach the manager used by `save`, `get_info` and `set_column`.
    pub fn set_db_manager(&mut self, manager: Arc<dyn DatabaseManager>) {
        self.db_manager.attach(manager);
    }

    pub fn db_manager(&self) -> Option<Arc<dyn DatabaseManager>> {
        self.db_manager.manager()
    }

    /// Store this user through the attached manager.
    ///
    /// Returns `false` without any I/O when no manager is attached.
    pub async fn save(&mut self) -> Result<bool, SilbotError> {
        self.save_with(&[]).await
    }

    /// Like [`User::save`], forwarding application-specific arguments.
    pub async fn save_with(&mut self, extra: &[Value]) -> Result<bool, SilbotError> {
        let Some(manager) = self.db_manager.manager() else {
            return Ok(false);
        };
        let row = manager.add_user(self, extra).await?;
        self.db = row;
        Ok(self.db.is_some())
    }

    /// Refresh `db` from the attached manager and return it.
    pub async fn get_info(&mut self) -> Result<Option<Row>, SilbotError> {
        let Some(manager) = self.db_manager.manager() else {
            return Ok(None);
        };
        let row = manager.get_info(Subject::User(self)).await?;
        self.db = row.clone();
        Ok(row)
    }

    /// Returns `false` when no manager is attached.
    pub async fn set_column(&self, column: &str, value: Value) -> Result<bool, SilbotError> {
        let Some(manager) = self.db_manager.manager() else {
            return Ok(false);
        };
        manager.set_column(Subject::User(self), column, value).await?;
        Ok(true)
    }
}

impl WireRecord for User {
    const NAME: &'static str = "User";

    fn extra(&self) -> &Extra {
        &self.extra
    }
}

impl Expected for User {
    fn kind() -> ResultKind {
        ResultKind::Record(Self::NAME)
    }

    fn from_result(value: &Value) -> Option<Self> {
        value.is_object().then(|| Self::hydrate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_prefers_username() {
        let user = User::hydrate(&json!({"id": 1, "first_name": "Ann", "username": "ann"}));
        assert_eq!(user.display_name(), "@ann");

        let user = User::hydrate(&json!({"id": 1, "first_name": "Ann", "last_name": "Lee"}));
        assert_eq!(user.display_name(), "Ann Lee");

        let user = User::hydrate(&json!({"id": 1, "first_name": "Ann"}));
        assert_eq!(user.display_name(), "Ann");
    }

    #[test]
    fn test_user_round_trip_skips_runtime_slots() {
        let source = json!({"id": 42, "is_bot": false, "first_name": "Bo", "added_in_2030": 1});
        let mut user = User::hydrate(&source);
        user.db = Some(json!({"row": true}));
        assert_eq!(user.to_value(), source);
        assert_eq!(user.extra_field("added_in_2030"), Some(&json!(1)));
    }
}
