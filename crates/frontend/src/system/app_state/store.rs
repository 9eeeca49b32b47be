use std::rc::Rc;

use contracts::system::auth::{LoginRequest, QueryUserResponse};

use super::action::{persisted_entry, reduce, AppAction, Persisted};
use super::menu_filter::visible_menu;
use super::ports::{LogoutPayload, Ports};
use super::state::{is_navbar_width, login_redirect, parse_query, AppState, DASHBOARD_ROUTE, LOGIN_ROUTE};
use super::storage;
use super::AppError;
use crate::shared::config::AppConfig;

/// Where the store keeps its `AppState`.
///
/// The browser uses a reactive signal so views re-render on `set`.
pub trait StateCell {
    fn get(&self) -> AppState;
    fn set(&self, state: AppState);
}

impl<T: StateCell + ?Sized> StateCell for Rc<T> {
    fn get(&self) -> AppState {
        (**self).get()
    }

    fn set(&self, state: AppState) {
        (**self).set(state)
    }
}

/// Session, menu and layout state plus the flows that change it.
///
/// Every mutation goes through [`AppStore::dispatch`]; flows are plain
/// `async fn`s awaited one call at a time.
#[derive(Clone)]
pub struct AppStore<C> {
    cell: C,
    config: Rc<AppConfig>,
    ports: Ports,
}

impl<C: StateCell> AppStore<C> {
    pub fn new(cell: C, config: Rc<AppConfig>, ports: Ports) -> Self {
        Self { cell, config, ports }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn select(&self) -> AppState {
        self.cell.get()
    }

    pub fn dispatch(&self, action: AppAction) {
        log::debug!("app action: {}", action.name());
        let next = reduce(&self.cell.get(), &action);

        match persisted_entry(&next, &action) {
            Some(Persisted::Flag(key, value)) => {
                storage::write_flag(&*self.ports.storage, &self.config.storage_key(key), value)
            }
            Some(Persisted::Json(key, value)) => {
                storage::write_json(&*self.ports.storage, &self.config.storage_key(key), &value)
            }
            None => {}
        }

        self.cell.set(next);
    }

    /// Check the session and route accordingly.
    ///
    /// Signed in: publish user, permissions and menu; leave `/login` for the
    /// dashboard. Anonymous on a protected route: go to `/login?from=...`.
    pub async fn initialize(&self) -> Result<(), AppError> {
        let authenticated = self.load_session().await?;
        let pathname = self.select().location_pathname;

        if authenticated {
            if pathname == LOGIN_ROUTE {
                self.redirect(DASHBOARD_ROUTE);
            }
        } else if !self.config.is_open_page(&pathname) {
            self.redirect(&login_redirect(&pathname));
        }
        Ok(())
    }

    /// Returns whether a user is signed in.
    async fn load_session(&self) -> Result<bool, AppError> {
        let QueryUserResponse { success, user, .. } = self.ports.session.query_user().await?;

        let Some(mut user) = user.filter(|_| success) else {
            if self.select().is_authenticated() {
                log::info!("Session ended");
                self.dispatch(AppAction::SessionCleared);
            }
            return Ok(false);
        };

        let list = self.ports.menus.list().await?.list;
        let total = list.len();
        let mut permissions = user.permissions.clone();
        let menu = visible_menu(list, &mut permissions);
        user.permissions = permissions.clone();

        log::info!(
            "Session loaded for {} ({}): {} of {} menu items visible",
            user.username,
            permissions.role.as_str(),
            menu.len(),
            total
        );
        self.dispatch(AppAction::SessionLoaded {
            user,
            permissions,
            menu,
        });
        Ok(true)
    }

    /// Sign in, load the session and return to `?from=` (or the dashboard).
    pub async fn login(&self, username: String, password: String) -> Result<(), AppError> {
        let response = self
            .ports
            .session
            .login(&LoginRequest { username, password })
            .await?;

        if !response.success {
            return Err(AppError::LoginRejected(
                response
                    .message
                    .unwrap_or_else(|| "invalid credentials".to_string()),
            ));
        }

        if !self.load_session().await? {
            return Err(AppError::LoginRejected(
                "session was not established".to_string(),
            ));
        }

        let target = self
            .select()
            .location_query
            .get("from")
            .filter(|from| is_local_path(from) && from.as_str() != LOGIN_ROUTE)
            .cloned()
            .unwrap_or_else(|| DASHBOARD_ROUTE.to_string());
        self.redirect(&target);
        Ok(())
    }

    /// `payload` is a query string (`a=1&b=2`) forwarded to the logout endpoint.
    pub async fn logout(&self, payload: &str) -> Result<(), AppError> {
        let payload: LogoutPayload = serde_qs::from_str(payload.trim_start_matches('?'))
            .map_err(|e| AppError::Payload(e.to_string()))?;

        let response = self.ports.session.logout(&payload).await?;
        if !response.success {
            log::warn!("Logout rejected: {:?}", response.message);
            return Err(AppError::LogoutRejected(response));
        }

        self.initialize().await
    }

    /// Recompute navbar mode from the viewport; dispatches only on change.
    pub fn change_navbar(&self) -> bool {
        let is_navbar = is_navbar_width(self.ports.viewport.width());
        if is_navbar == self.select().is_navbar {
            return false;
        }
        self.dispatch(AppAction::HandleNavbar(is_navbar));
        true
    }

    pub fn location_changed(&self, pathname: &str, search: &str) {
        self.dispatch(AppAction::LocationChanged {
            pathname: pathname.to_string(),
            query: parse_query(search),
        });
    }

    pub fn switch_sider(&self) {
        self.dispatch(AppAction::SwitchSider);
    }

    pub fn switch_theme(&self) {
        self.dispatch(AppAction::SwitchTheme);
    }

    pub fn switch_menu_popover(&self) {
        self.dispatch(AppAction::SwitchMenuPopover);
    }

    pub fn handle_nav_open_keys(&self, keys: Vec<String>) {
        self.dispatch(AppAction::HandleNavOpenKeys(keys));
    }

    fn redirect(&self, to: &str) {
        log::info!("Redirecting to {}", to);
        self.ports.navigator.push(to);
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}
