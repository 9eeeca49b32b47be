use async_trait::async_trait;
use contracts::system::auth::{LoginRequest, LoginResponse, LogoutResponse, QueryUserResponse};

use crate::shared::api_utils::{decode, get_json, post_json};
use crate::shared::config::ApiConfig;
use crate::system::app_state::ports::{LogoutPayload, SessionApi};
use crate::system::app_state::AppError;

/// Session endpoints over HTTP with the browser cookie jar.
pub struct HttpSessionApi {
    api: ApiConfig,
}

impl HttpSessionApi {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl SessionApi for HttpSessionApi {
    async fn query_user(&self) -> Result<QueryUserResponse, AppError> {
        match get_json::<QueryUserResponse>(&self.api.url(&self.api.user_info)).await {
            // no session cookie, or an expired one
            Err(AppError::Status(401 | 403)) => Ok(QueryUserResponse::default()),
            other => other,
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let response = post_json(&self.api.url(&self.api.user_login), request).await?;
        let status = response.status();
        let ok = response.ok();

        match decode::<LoginResponse>(response).await {
            Ok(body) => Ok(body),
            Err(_) if !ok => Err(AppError::Status(status)),
            Err(e) => Err(e),
        }
    }

    async fn logout(&self, payload: &LogoutPayload) -> Result<LogoutResponse, AppError> {
        let response = post_json(&self.api.url(&self.api.user_logout), payload).await?;
        let status = response.status();
        let ok = response.ok();

        // Error statuses usually carry a `{success: false, message}` body worth surfacing.
        match decode::<LogoutResponse>(response).await {
            Ok(body) => Ok(body),
            Err(_) if !ok => Ok(LogoutResponse {
                success: false,
                message: Some(format!("status {}", status)),
                ..Default::default()
            }),
            Err(e) => Err(e),
        }
    }
}
