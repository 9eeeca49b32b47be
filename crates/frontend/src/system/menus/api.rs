use async_trait::async_trait;
use contracts::system::menus::MenuListResponse;

use crate::shared::api_utils::get_json;
use crate::shared::config::ApiConfig;
use crate::system::app_state::ports::MenuApi;
use crate::system::app_state::AppError;

pub struct HttpMenuApi {
    api: ApiConfig,
}

impl HttpMenuApi {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl MenuApi for HttpMenuApi {
    async fn list(&self) -> Result<MenuListResponse, AppError> {
        get_json(&self.api.url(&self.api.menus)).await
    }
}
