use super::ApiResult;
use crate::client::BotApi;
use crate::params::Params;
use silbot_core::types::StickerSet;

impl BotApi {
    pub async fn get_sticker_set(&self, name: &str) -> ApiResult<StickerSet> {
        self.request("getStickerSet", Params::new().set("name", name))
            .await
    }

    /// Move a sticker of a set created by the bot; `position` is 0-based.
    pub async fn set_sticker_position_in_set(&self, sticker: &str, position: i64) -> ApiResult<bool> {
        let params = Params::new()
            .set("sticker", sticker)
            .set("position", position);
        self.request("setStickerPositionInSet", params).await
    }

    pub async fn delete_sticker_from_set(&self, sticker: &str) -> ApiResult<bool> {
        self.request("deleteStickerFromSet", Params::new().set("sticker", sticker))
            .await
    }
}
