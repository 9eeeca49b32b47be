use std::collections::BTreeMap;

use contracts::system::auth::{Permissions, UserInfo};
use contracts::system::menus::MenuItem;

use super::ports::KeyValueStorage;
use super::storage::{self, DARK_THEME_KEY, NAV_OPEN_KEYS_KEY, SIDER_FOLD_KEY};
use crate::shared::config::AppConfig;

/// Viewports narrower than this use the navbar layout.
pub const NAVBAR_BREAKPOINT_PX: i32 = 769;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub user: Option<UserInfo>,
    pub permissions: Permissions,
    pub menu: Vec<MenuItem>,
    pub menu_popover_visible: bool,
    pub sider_fold: bool,
    pub dark_theme: bool,
    pub is_navbar: bool,
    pub nav_open_keys: Vec<String>,
    pub location_pathname: String,
    pub location_query: BTreeMap<String, String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            permissions: Permissions::default(),
            menu: vec![default_menu_item()],
            menu_popover_visible: false,
            sider_fold: false,
            dark_theme: false,
            is_navbar: false,
            nav_open_keys: Vec::new(),
            location_pathname: String::new(),
            location_query: BTreeMap::new(),
        }
    }
}

impl AppState {
    /// Initial state: layout preferences from storage, navbar mode from the viewport.
    pub fn restore(config: &AppConfig, storage: &dyn KeyValueStorage, viewport_width: i32) -> Self {
        Self {
            sider_fold: storage::read_flag(storage, &config.storage_key(SIDER_FOLD_KEY)),
            dark_theme: storage::read_flag(storage, &config.storage_key(DARK_THEME_KEY)),
            is_navbar: is_navbar_width(viewport_width),
            nav_open_keys: storage::read_json(storage, &config.storage_key(NAV_OPEN_KEYS_KEY))
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub fn is_navbar_width(width: i32) -> bool {
    width < NAVBAR_BREAKPOINT_PX
}

/// Shown before the menu service has answered.
fn default_menu_item() -> MenuItem {
    MenuItem {
        id: "1".to_string(),
        name: "Dashboard".to_string(),
        icon: Some("laptop".to_string()),
        route: Some(DASHBOARD_ROUTE.to_string()),
        ..Default::default()
    }
}

/// `/login?from=<path>`, remembering where an anonymous visitor was headed.
pub fn login_redirect(from: &str) -> String {
    format!("{}?from={}", LOGIN_ROUTE, urlencoding::encode(from))
}

/// Parse `?a=1&b=2` (leading `?` optional) into a map.
///
/// A repeated key keeps its first value; pairs that fail to decode are skipped.
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    let mut query = BTreeMap::new();
    for pair in search.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match (decode_component(key), decode_component(value)) {
            (Some(key), Some(value)) => {
                query.entry(key).or_insert(value);
            }
            _ => log::debug!("Skipping undecodable query pair {:?}", pair),
        }
    }
    query
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::app_state::storage::MemoryStorage;

    #[test]
    fn test_restore_from_storage() {
        let config = AppConfig::default();
        let storage = MemoryStorage::default();
        storage.set_item("adminDashboardsiderFold", "true");
        storage.set_item("adminDashboarddarkTheme", "false");
        storage.set_item("adminDashboardnavOpenKeys", r#"["2"]"#);

        let state = AppState::restore(&config, &storage, 1280);
        assert!(state.sider_fold);
        assert!(!state.dark_theme);
        assert!(!state.is_navbar);
        assert_eq!(state.nav_open_keys, vec!["2".to_string()]);
        assert_eq!(state.menu.len(), 1);
        assert_eq!(state.menu[0].route.as_deref(), Some(DASHBOARD_ROUTE));
    }

    #[test]
    fn test_restore_empty_storage_on_phone() {
        let state = AppState::restore(&AppConfig::default(), &MemoryStorage::default(), 375);
        assert!(!state.sider_fold);
        assert!(state.is_navbar);
        assert!(state.nav_open_keys.is_empty());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_navbar_breakpoint() {
        assert!(is_navbar_width(768));
        assert!(!is_navbar_width(769));
    }

    #[test]
    fn test_login_redirect_encodes_path() {
        assert_eq!(login_redirect("/user"), "/login?from=%2Fuser");
        assert_eq!(login_redirect("/user/1"), "/login?from=%2Fuser%2F1");
    }

    #[test]
    fn test_parse_query() {
        let query = parse_query("?from=%2Fuser&page=2");
        assert_eq!(query.get("from").map(String::as_str), Some("/user"));
        assert_eq!(query.get("page").map(String::as_str), Some("2"));
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_parse_query_repeated_key_keeps_the_rest() {
        let query = parse_query("?from=%2Fuser&tag=a&tag=b");
        assert_eq!(query.get("from").map(String::as_str), Some("/user"));
        assert_eq!(query.get("tag").map(String::as_str), Some("a"));
    }

    #[test]
    fn test_parse_query_odd_pairs() {
        let query = parse_query("flag&name=a+b&bad=%FF&&x=1");
        assert_eq!(query.get("flag").map(String::as_str), Some(""));
        assert_eq!(query.get("name").map(String::as_str), Some("a b"));
        assert!(!query.contains_key("bad"));
        assert_eq!(query.get("x").map(String::as_str), Some("1"));
    }
}
