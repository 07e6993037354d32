use super::{ApiResult, MessageRef, SendOptions};
use crate::client::BotApi;
use crate::params::Params;
use silbot_core::types::{Edited, GameHighScore, Message};

impl BotApi {
    /// Games can only be sent to numeric chat ids.
    pub async fn send_game(
        &self,
        chat_id: i64,
        game_short_name: &str,
        options: &SendOptions,
    ) -> ApiResult<Message> {
        let params = Params::new()
            .set("chat_id", chat_id)
            .set("game_short_name", game_short_name);
        let params = options.delivery(params, self.defaults());
        self.request("sendGame", params).await
    }

    /// Lower scores are rejected unless `force` is set.
    pub async fn set_game_score(
        &self,
        user_id: i64,
        score: i64,
        target: &MessageRef,
        force: Option<bool>,
        disable_edit_message: Option<bool>,
    ) -> ApiResult<Edited> {
        let params = target
            .apply(Params::new())
            .set("user_id", user_id)
            .set("score", score)
            .opt("force", force)
            .opt("disable_edit_message", disable_edit_message);
        self.request("setGameScore", params).await
    }

    pub async fn get_game_high_scores(
        &self,
        user_id: i64,
        target: &MessageRef,
    ) -> ApiResult<Vec<GameHighScore>> {
        let params = target.apply(Params::new()).set("user_id", user_id);
        self.request("getGameHighScores", params).await
    }
}
