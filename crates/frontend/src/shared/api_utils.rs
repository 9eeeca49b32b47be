//! HTTP helpers shared by the API modules.
//!
//! All calls send cookies (`credentials: include`) since the session lives
//! in a server-side cookie.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::system::app_state::AppError;

/// GET `url` and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    let response = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| AppError::Request(e.to_string()))?;

    ensure_ok(&response)?;
    decode(response).await
}

/// POST `body` as JSON to `url`.
///
/// Returns the raw response so callers can read error bodies too.
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, AppError> {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| AppError::Payload(e.to_string()))?
        .send()
        .await
        .map_err(|e| AppError::Request(e.to_string()))
}

pub fn ensure_ok(response: &Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(AppError::Status(response.status()))
    }
}

pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}
