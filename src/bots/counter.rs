//! Counts the text messages of each chat in SQLite.
//!
//! Participants are saved by the dispatcher before the handler runs, so the
//! chat's `db` row is already loaded and its manager attached.

use super::reply_failed;
use async_trait::async_trait;
use serde_json::json;
use silbot_api::{SendOptions, UpdateContext, UpdateHandler};
use silbot_core::database::Row;
use silbot_core::types::{ParseMode, Update};
use tracing::warn;

const INTRO: &str = "<b>Silbot counter</b>\n\nThis bot counts the text messages sent in a \
                     chat, excluding its own commands. Send /count to see the total.";

pub struct CounterBot;

/// Stored message count of a row, 0 when missing.
fn stored_count(row: Option<&Row>) -> i64 {
    row.and_then(|row| row.get("count"))
        .and_then(|count| count.as_i64())
        .unwrap_or(0)
}

#[async_trait]
impl UpdateHandler for CounterBot {
    async fn handle(&self, update: Update, ctx: UpdateContext) {
        let Some(message) = update.message else {
            return;
        };
        let (Some(chat), Some(text)) = (message.chat, message.text) else {
            return;
        };
        let Some(chat_id) = chat.id else {
            return;
        };
        let count = stored_count(chat.db.as_ref());

        if text == "/start" {
            let options = SendOptions::new().parse_mode(ParseMode::Html);
            let (_, response) = ctx.bot.send_message(chat_id, INTRO, &options).await;
            reply_failed(chat_id, &response);
        } else if text.starts_with("/count") {
            let reply = format!("The number of text messages sent in this chat is {count}");
            let (_, response) = ctx.bot.send_message(chat_id, &reply, &SendOptions::new()).await;
            reply_failed(chat_id, &response);
        } else if let Err(e) = chat.set_column("count", json!(count + 1)).await {
            warn!("failed to update message count of {chat_id}: {e}");
        }
    }
}
