//! Tells users whether they joined, or administer, a given channel.

use super::reply_failed;
use async_trait::async_trait;
use silbot_api::{CallbackQueryExt, MembershipExt, SendOptions, UpdateContext, UpdateHandler};
use silbot_core::helper::{inline_kb_data, inline_kb_markup, inline_kb_row};
use silbot_core::types::{ParseMode, Update};

/// The bot must be an administrator of `channel_id`.
pub struct JoinedBot {
    pub channel_id: i64,
}

fn answer_text(check: &str, passed: bool) -> &'static str {
    match (check, passed) {
        ("/join", true) => "You joined the channel",
        ("/join", false) => "You have not joined the channel",
        (_, true) => "You are an admin of the channel",
        (_, false) => "You are not an admin of the channel",
    }
}

#[async_trait]
impl UpdateHandler for JoinedBot {
    async fn handle(&self, update: Update, ctx: UpdateContext) {
        let bot = &ctx.bot;
        if let Some(message) = &update.message {
            let chat_id = message.chat.as_ref().and_then(|c| c.id);
            if let (Some(chat_id), Some("/start")) = (chat_id, message.text.as_deref()) {
                let keyboard = inline_kb_markup([inline_kb_row([
                    inline_kb_data("Join Check", "/join"),
                    inline_kb_data("Admin Check", "/admin"),
                ])]);
                let options = SendOptions::new()
                    .parse_mode(ParseMode::Html)
                    .reply_markup(keyboard);
                let (_, response) = bot
                    .send_message(
                        chat_id,
                        "<b>Silbot membership example</b>\n\nPress a button to check whether \
                         you are a member or an admin of the configured channel.",
                        &options,
                    )
                    .await;
                reply_failed(chat_id, &response);
            }
        } else if let Some(callback) = &update.callback_query {
            let (Some(user), Some(check)) = (callback.from.as_ref(), callback.data.as_deref()) else {
                return;
            };
            let passed = match check {
                "/join" => user.is_member(bot, self.channel_id).await,
                "/admin" => user.is_admin(bot, self.channel_id).await,
                _ => return,
            };
            callback
                .answer(bot, Some(answer_text(check, passed)), false)
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_text() {
        assert_eq!(answer_text("/join", true), "You joined the channel");
        assert_eq!(answer_text("/admin", false), "You are not an admin of the channel");
    }
}
