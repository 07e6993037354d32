//! SQLite persistence hook for the demo bots.
//!
//! Users and chats share one `chats` table keyed by Telegram id, with a
//! free-form `state` column and a message `count`.

use async_trait::async_trait;
use serde_json::{json, Value};
use silbot_core::config::shellexpand;
use silbot_core::database::{DatabaseManager, Row, Subject};
use silbot_core::error::SilbotError;
use silbot_core::types::{Chat, User};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Columns `set_column` may write.
const WRITABLE_COLUMNS: [&str; 6] = ["first_name", "last_name", "title", "username", "state", "count"];

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS chats (
    chat_id    INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL DEFAULT '',
    last_name  TEXT NOT NULL DEFAULT '',
    title      TEXT NOT NULL DEFAULT '',
    username   TEXT NOT NULL DEFAULT '',
    state      TEXT NOT NULL DEFAULT '',
    count      INTEGER NOT NULL DEFAULT 0
)";

type ChatRow = (i64, String, String, String, String, String, i64);

struct Profile<'a> {
    id: i64,
    first_name: &'a str,
    last_name: &'a str,
    title: &'a str,
    username: &'a str,
}

fn db_err(context: &str, e: sqlx::Error) -> SilbotError {
    SilbotError::Persistence(format!("{context}: {e}"))
}

/// [`DatabaseManager`] over a local SQLite file.
#[derive(Clone)]
pub struct SqliteManager {
    pool: SqlitePool,
}

impl SqliteManager {
    /// Open (creating if needed) the database at `db_path`; `~` is expanded.
    pub async fn open(db_path: &str) -> Result<Self, SilbotError> {
        let db_path = shellexpand(db_path);

        if let Some(parent) = std::path::Path::new(&db_path).parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SilbotError::Persistence(format!("failed to create data dir: {e}")))?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| db_err("invalid db path", e))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(opts)
            .await
            .map_err(|e| db_err("failed to connect to sqlite", e))?;

        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .map_err(|e| db_err("failed to create chats table", e))?;

        info!("chat store initialized at {db_path}");
        Ok(Self { pool })
    }

    async fn upsert(&self, profile: Profile<'_>) -> Result<Option<Row>, SilbotError> {
        sqlx::query(
            "INSERT INTO chats (chat_id, first_name, last_name, title, username)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(chat_id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                title = excluded.title,
                username = excluded.username",
        )
        .bind(profile.id)
        .bind(profile.first_name)
        .bind(profile.last_name)
        .bind(profile.title)
        .bind(profile.username)
        .execute(&self.pool)
        .await
        .map_err(|e| db_err("failed to save chat", e))?;

        self.fetch(profile.id).await
    }

    async fn fetch(&self, id: i64) -> Result<Option<Row>, SilbotError> {
        let row: Option<ChatRow> = sqlx::query_as(
            "SELECT chat_id, first_name, last_name, title, username, state, count
             FROM chats WHERE chat_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("failed to read chat", e))?;

        Ok(row.map(
            |(chat_id, first_name, last_name, title, username, state, count)| {
                json!({
                    "chat_id": chat_id,
                    "first_name": first_name,
                    "last_name": last_name,
                    "title": title,
                    "username": username,
                    "state": state,
                    "count": count,
                })
            },
        ))
    }
}

#[async_trait]
impl DatabaseManager for SqliteManager {
    async fn add_user(&self, user: &User, _extra: &[Value]) -> Result<Option<Row>, SilbotError> {
        let Some(id) = user.id else {
            return Ok(None);
        };
        self.upsert(Profile {
            id,
            first_name: user.first_name.as_deref().unwrap_or_default(),
            last_name: user.last_name.as_deref().unwrap_or_default(),
            title: "",
            username: user.username.as_deref().unwrap_or_default(),
        })
        .await
    }

    async fn add_chat(&self, chat: &Chat, _extra: &[Value]) -> Result<Option<Row>, SilbotError> {
        let Some(id) = chat.id else {
            return Ok(None);
        };
        self.upsert(Profile {
            id,
            first_name: chat.first_name.as_deref().unwrap_or_default(),
            last_name: chat.last_name.as_deref().unwrap_or_default(),
            title: chat.title.as_deref().unwrap_or_default(),
            username: chat.username.as_deref().unwrap_or_default(),
        })
        .await
    }

    async fn get_info(&self, subject: Subject<'_>) -> Result<Option<Row>, SilbotError> {
        match subject.id() {
            Some(id) => self.fetch(id).await,
            None => Ok(None),
        }
    }

    async fn set_column(
        &self,
        subject: Subject<'_>,
        column: &str,
        value: Value,
    ) -> Result<(), SilbotError> {
        if !WRITABLE_COLUMNS.contains(&column) {
            return Err(SilbotError::Persistence(format!("unknown column: {column}")));
        }
        let Some(id) = subject.id() else {
            return Err(SilbotError::Persistence("record has no id".to_string()));
        };

        let sql = format!("UPDATE chats SET {column} = ? WHERE chat_id = ?");
        let query = sqlx::query(&sql);
        let query = match value {
            Value::Number(n) if n.is_i64() => query.bind(n.as_i64()),
            Value::String(s) => query.bind(s),
            other => query.bind(other.to_string()),
        };
        let result = query
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("failed to update chat", e))?;
        debug!("set {column} for {id} ({} row)", result.rows_affected());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silbot_core::WireRecord;

    async fn test_store() -> (tempfile::TempDir, SqliteManager) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("silbot.db");
        let store = SqliteManager::open(path.to_str().unwrap()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_add_chat_then_refresh_profile() {
        let (_dir, store) = test_store().await;
        let chat = Chat::hydrate(&json!({"id": -10, "type": "group", "title": "Old"}));

        let row = store.add_chat(&chat, &[]).await.unwrap().unwrap();
        assert_eq!(row["title"], "Old");
        assert_eq!(row["count"], 0);

        let renamed = Chat::hydrate(&json!({"id": -10, "type": "group", "title": "New"}));
        let row = store.add_chat(&renamed, &[]).await.unwrap().unwrap();
        assert_eq!(row["title"], "New");
    }

    #[tokio::test]
    async fn test_set_column_keeps_counter_across_saves() {
        let (_dir, store) = test_store().await;
        let user = User::hydrate(&json!({"id": 7, "first_name": "Ann", "username": "ann"}));
        store.add_user(&user, &[]).await.unwrap();

        store
            .set_column(Subject::User(&user), "count", json!(3))
            .await
            .unwrap();
        store
            .set_column(Subject::User(&user), "state", json!("waiting"))
            .await
            .unwrap();
        let row = store.add_user(&user, &[]).await.unwrap().unwrap();

        assert_eq!(row["count"], 3);
        assert_eq!(row["state"], "waiting");
        assert_eq!(row["username"], "ann");
    }

    #[tokio::test]
    async fn test_unknown_column_rejected() {
        let (_dir, store) = test_store().await;
        let user = User::hydrate(&json!({"id": 1}));
        let err = store
            .set_column(Subject::User(&user), "chat_id; DROP TABLE chats", json!(1))
            .await
            .unwrap_err();
        assert!(matches!(err, SilbotError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_get_info_missing_and_without_id() {
        let (_dir, store) = test_store().await;
        let stranger = User::hydrate(&json!({"id": 99}));
        assert!(store.get_info(Subject::User(&stranger)).await.unwrap().is_none());
        let anonymous = Chat::default();
        assert!(store.get_info(Subject::Chat(&anonymous)).await.unwrap().is_none());
        assert!(store.add_chat(&anonymous, &[]).await.unwrap().is_none());
    }
}
