//! Persistence hook.
//!
//! silbot ships no storage of its own. Applications implement
//! [`DatabaseManager`] over whatever store they like and attach it to
//! [`User`] and [`Chat`] records, which then expose `save`, `get_info` and
//! `set_column` conveniences. No schema, transaction or consistency
//! contract is imposed: two updates for the same chat may hit the store
//! concurrently.

use crate::error::SilbotError;
use crate::types::{Chat, User};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Opaque row handed back by a `DatabaseManager`.
pub type Row = Value;

/// The record a lookup or column update refers to.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    User(&'a User),
    Chat(&'a Chat),
}

impl Subject<'_> {
    /// Telegram id of the user or chat.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::User(user) => user.id,
            Self::Chat(chat) => chat.id,
        }
    }
}

/// Storage backend for per-user and per-chat state.
#[async_trait]
pub trait DatabaseManager: Send + Sync {
    /// Store (or refresh) a user. `None` signals that nothing was stored.
    async fn add_user(&self, user: &User, extra: &[Value]) -> Result<Option<Row>, SilbotError>;

    /// Store (or refresh) a chat. `None` signals that nothing was stored.
    async fn add_chat(&self, chat: &Chat, extra: &[Value]) -> Result<Option<Row>, SilbotError>;

    /// Fetch the stored row of a user or chat.
    async fn get_info(&self, subject: Subject<'_>) -> Result<Option<Row>, SilbotError>;

    /// Set one column of the stored row.
    async fn set_column(
        &self,
        subject: Subject<'_>,
        column: &str,
        value: Value,
    ) -> Result<(), SilbotError>;
}

/// Slot holding the manager attached to a record.
///
/// Never serialized, and ignored by equality so that records compare on
/// their Telegram data only.
#[derive(Clone, Default)]
pub struct DbLink(Option<Arc<dyn DatabaseManager>>);

impl DbLink {
    pub fn attach(&mut self, manager: Arc<dyn DatabaseManager>) {
        self.0 = Some(manager);
    }

    pub fn detach(&mut self) {
        self.0 = None;
    }

    pub fn manager(&self) -> Option<Arc<dyn DatabaseManager>> {
        self.0.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Debug for DbLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbLink")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl PartialEq for DbLink {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::WireRecord;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every hook call as `"<op>:<id>"`.
    #[derive(Default)]
    pub(crate) struct RecordingManager {
        pub calls: Mutex<Vec<String>>,
    }

    impl RecordingManager {
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn push(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl DatabaseManager for RecordingManager {
        async fn add_user(&self, user: &User, _extra: &[Value]) -> Result<Option<Row>, SilbotError> {
            self.push(format!("add_user:{}", user.id.unwrap_or_default()));
            Ok(Some(json!({"kind": "user", "count": 0})))
        }

        async fn add_chat(&self, chat: &Chat, _extra: &[Value]) -> Result<Option<Row>, SilbotError> {
            self.push(format!("add_chat:{}", chat.id.unwrap_or_default()));
            Ok(Some(json!({"kind": "chat", "count": 0})))
        }

        async fn get_info(&self, subject: Subject<'_>) -> Result<Option<Row>, SilbotError> {
            self.push(format!("get_info:{}", subject.id().unwrap_or_default()));
            Ok(Some(json!({"count": 3})))
        }

        async fn set_column(
            &self,
            subject: Subject<'_>,
            column: &str,
            value: Value,
        ) -> Result<(), SilbotError> {
            self.push(format!(
                "set_column:{}:{column}={value}",
                subject.id().unwrap_or_default()
            ));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_save_without_manager_returns_false() {
        let mut user = User::hydrate(&json!({"id": 10, "first_name": "Ann"}));
        assert!(!user.save().await.unwrap());
        assert!(user.db.is_none());
        assert!(user.get_info().await.unwrap().is_none());
        assert!(!user.set_column("state", json!("idle")).await.unwrap());
    }

    #[tokio::test]
    async fn test_save_delegates_exactly_once() {
        let manager = Arc::new(RecordingManager::default());
        let mut user = User::hydrate(&json!({"id": 10, "first_name": "Ann"}));
        user.set_db_manager(manager.clone());

        assert!(user.save().await.unwrap());
        assert_eq!(manager.calls(), vec!["add_user:10"]);
        assert_eq!(user.db, Some(json!({"kind": "user", "count": 0})));
    }

    #[tokio::test]
    async fn test_chat_get_info_and_set_column() {
        let manager = Arc::new(RecordingManager::default());
        let mut chat = Chat::hydrate(&json!({"id": -5, "type": "group"}));
        chat.set_db_manager(manager.clone());

        let row = chat.get_info().await.unwrap();
        assert_eq!(row, Some(json!({"count": 3})));
        assert_eq!(chat.db, row);
        assert!(chat.set_column("count", json!(4)).await.unwrap());
        assert_eq!(manager.calls(), vec!["get_info:-5", "set_column:-5:count=4"]);
    }

    #[test]
    fn test_db_link_is_ignored_by_equality() {
        let plain = User::hydrate(&json!({"id": 1}));
        let mut attached = plain.clone();
        attached.set_db_manager(Arc::new(RecordingManager::default()));
        assert_eq!(plain, attached);
        assert!(format!("{attached:?}").contains("attached: true"));
    }
}
