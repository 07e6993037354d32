use super::ApiResult;
use crate::client::BotApi;
use crate::params::Params;
use silbot_core::types::{BotCommand, BotCommandScope, User};

fn scoped(scope: Option<&BotCommandScope>, language_code: Option<&str>) -> Params {
    Params::new()
        .opt("scope", scope)
        .opt("language_code", language_code)
}

impl BotApi {
    /// `getMe`: a cheap way to check the token.
    pub async fn get_me(&self) -> ApiResult<User> {
        self.request("getMe", Params::new()).await
    }

    /// Log out from the cloud Bot API server before moving to a local one.
    pub async fn log_out(&self) -> ApiResult<bool> {
        self.request("logOut", Params::new()).await
    }

    pub async fn close(&self) -> ApiResult<bool> {
        self.request("close", Params::new()).await
    }

    pub async fn set_my_commands(
        &self,
        commands: &[BotCommand],
        scope: Option<&BotCommandScope>,
        language_code: Option<&str>,
    ) -> ApiResult<bool> {
        let params = scoped(scope, language_code).set("commands", commands);
        self.request("setMyCommands", params).await
    }

    pub async fn delete_my_commands(
        &self,
        scope: Option<&BotCommandScope>,
        language_code: Option<&str>,
    ) -> ApiResult<bool> {
        self.request("deleteMyCommands", scoped(scope, language_code))
            .await
    }

    pub async fn get_my_commands(
        &self,
        scope: Option<&BotCommandScope>,
        language_code: Option<&str>,
    ) -> ApiResult<Vec<BotCommand>> {
        self.request("getMyCommands", scoped(scope, language_code))
            .await
    }
}
