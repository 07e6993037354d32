use super::ApiResult;
use crate::client::BotApi;
use crate::params::Params;
use silbot_core::types::PassportElementError;

impl BotApi {
    /// The user cannot resubmit the listed elements until the errors are fixed.
    pub async fn set_passport_data_errors(
        &self,
        user_id: i64,
        errors: &[PassportElementError],
    ) -> ApiResult<bool> {
        let params = Params::new()
            .set("user_id", user_id)
            .set("errors", errors);
        self.request("setPassportDataErrors", params).await
    }
}
