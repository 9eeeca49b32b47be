//! Collaborators the store talks to.
//!
//! Browser implementations live in `system::auth`, `system::menus` and
//! `system::app_state::browser`; tests plug in in-memory fakes.

use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::system::auth::{LoginRequest, LoginResponse, LogoutResponse, QueryUserResponse};
use contracts::system::menus::MenuListResponse;

use super::AppError;

/// Parsed logout request; nested `a[b]=1` keys become nested objects.
pub type LogoutPayload = BTreeMap<String, serde_json::Value>;

#[async_trait(?Send)]
pub trait SessionApi {
    /// "Who am I" check backed by the session cookie.
    async fn query_user(&self) -> Result<QueryUserResponse, AppError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;

    async fn logout(&self, payload: &LogoutPayload) -> Result<LogoutResponse, AppError>;
}

#[async_trait(?Send)]
pub trait MenuApi {
    async fn list(&self) -> Result<MenuListResponse, AppError>;
}

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

pub trait Navigator {
    /// Push `to` (path plus optional `?query`) onto the history stack.
    fn push(&self, to: &str);
}

pub trait Viewport {
    /// Current layout width in CSS pixels.
    fn width(&self) -> i32;
}

#[derive(Clone)]
pub struct Ports {
    pub session: Rc<dyn SessionApi>,
    pub menus: Rc<dyn MenuApi>,
    pub storage: Rc<dyn KeyValueStorage>,
    pub navigator: Rc<dyn Navigator>,
    pub viewport: Rc<dyn Viewport>,
}
