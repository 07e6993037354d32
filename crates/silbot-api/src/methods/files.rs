use super::ApiResult;
use crate::client::BotApi;
use crate::params::Params;
use silbot_core::types::{File, UserProfilePhotos};

impl BotApi {
    /// `getFile`: prepare a file for download. Links stay valid for an hour.
    pub async fn get_file(&self, file_id: &str) -> ApiResult<File> {
        self.request("getFile", Params::new().set("file_id", file_id))
            .await
    }

    /// Download URL of `file`, once `getFile` has filled its path.
    pub fn file_url(&self, file: &File) -> Option<String> {
        file.download_path()
            .map(|path| self.file_download_url(path))
    }

    pub async fn get_user_profile_photos(
        &self,
        user_id: i64,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ApiResult<UserProfilePhotos> {
        let params = Params::new()
            .set("user_id", user_id)
            .opt("offset", offset)
            .opt("limit", limit);
        self.request("getUserProfilePhotos", params).await
    }
}
