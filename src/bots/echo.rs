//! Echo bot with an inline and a reply keyboard demo.

use super::reply_failed;
use async_trait::async_trait;
use silbot_api::{CallbackQueryExt, MessageRef, SendOptions, UpdateContext, UpdateHandler};
use silbot_core::helper::{
    inline_kb_data, inline_kb_markup, inline_kb_row, inline_kb_url, reply_kb_button, reply_kb_row,
    reply_keyboard, reply_keyboard_remove,
};
use silbot_core::types::{CallbackQuery, InlineKeyboardMarkup, Message, ParseMode, Update};
use tracing::debug;

pub struct EchoBot;

fn start_keyboard() -> InlineKeyboardMarkup {
    inline_kb_markup([
        inline_kb_row([inline_kb_data("editMessageText + answerCallbackQuery", "/edit")]),
        inline_kb_row([inline_kb_data("Reply Keyboard", "/reply")]),
        inline_kb_row([
            inline_kb_url("Documentation", "https://core.telegram.org/bots/api"),
            inline_kb_url("GitHub", "https://github.com/SilverOS/silbot-rs"),
        ]),
    ])
}

impl EchoBot {
    async fn on_message(&self, message: &Message, ctx: &UpdateContext) {
        let chat_id = message.chat.as_ref().and_then(|c| c.id);
        let (Some(chat_id), Some(text)) = (chat_id, message.text.as_deref()) else {
            return;
        };
        let bot = &ctx.bot;
        match text {
            "/start" => {
                let options = SendOptions::new()
                    .parse_mode(ParseMode::Html)
                    .reply_markup(start_keyboard());
                let (_, response) = bot
                    .send_message(chat_id, "This is a message with <b>inline keyboard</b>", &options)
                    .await;
                reply_failed(chat_id, &response);
            }
            "Remove Keyboard" => {
                let options = SendOptions::new().reply_markup(reply_keyboard_remove());
                let (_, response) = bot.send_message(chat_id, "Keyboard removed", &options).await;
                reply_failed(chat_id, &response);
            }
            _ => {
                let (_, response) = bot.send_message(chat_id, text, &SendOptions::new()).await;
                reply_failed(chat_id, &response);
            }
        }
    }

    async fn on_callback(&self, callback: &CallbackQuery, ctx: &UpdateContext) {
        let bot = &ctx.bot;
        let target = callback.message.as_deref().and_then(MessageRef::of);
        match (callback.data.as_deref(), target) {
            (Some("/edit"), Some(target)) => {
                bot.edit_message_text(&target, "This is an edited message", None, None)
                    .await;
                callback.answer(bot, Some("Alert"), false).await;
            }
            (Some("/reply"), Some(MessageRef::Chat { chat_id, message_id })) => {
                bot.delete_message(chat_id.clone(), message_id).await;
                let keyboard = reply_keyboard([reply_kb_row([
                    reply_kb_button("/start", None, None, None),
                    reply_kb_button("Remove Keyboard", None, None, None),
                ])]);
                let options = SendOptions::new().reply_markup(keyboard);
                let (_, response) = bot.send_message(chat_id.clone(), "Reply Keyboard", &options).await;
                reply_failed(chat_id, &response);
                callback.answer(bot, None, false).await;
            }
            (data, _) => debug!("ignoring callback {data:?}"),
        }
    }
}

#[async_trait]
impl UpdateHandler for EchoBot {
    async fn handle(&self, update: Update, ctx: UpdateContext) {
        if let Some(message) = &update.message {
            self.on_message(message, &ctx).await;
        } else if let Some(callback) = &update.callback_query {
            self.on_callback(callback, &ctx).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_keyboard_layout() {
        let keyboard = start_keyboard();
        let rows = keyboard.inline_keyboard.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0].callback_data.as_deref(), Some("/edit"));
        assert_eq!(rows[2].len(), 2);
        assert!(rows[2].iter().all(|b| b.url.is_some()));
    }
}
