//! Typed state transitions.
//!
//! `reduce` is pure; writing flags back to storage is described by
//! `persisted_entry` and carried out by the store.

use std::collections::BTreeMap;

use contracts::system::auth::{Permissions, UserInfo};
use contracts::system::menus::MenuItem;

use super::state::AppState;
use super::storage::{DARK_THEME_KEY, NAV_OPEN_KEYS_KEY, SIDER_FOLD_KEY};

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SessionLoaded {
        user: UserInfo,
        permissions: Permissions,
        menu: Vec<MenuItem>,
    },
    SessionCleared,
    LocationChanged {
        pathname: String,
        query: BTreeMap<String, String>,
    },
    SwitchSider,
    SwitchTheme,
    SwitchMenuPopover,
    HandleNavbar(bool),
    HandleNavOpenKeys(Vec<String>),
}

impl AppAction {
    pub fn name(&self) -> &'static str {
        match self {
            AppAction::SessionLoaded { .. } => "session_loaded",
            AppAction::SessionCleared => "session_cleared",
            AppAction::LocationChanged { .. } => "location_changed",
            AppAction::SwitchSider => "switch_sider",
            AppAction::SwitchTheme => "switch_theme",
            AppAction::SwitchMenuPopover => "switch_menu_popover",
            AppAction::HandleNavbar(_) => "handle_navbar",
            AppAction::HandleNavOpenKeys(_) => "handle_nav_open_keys",
        }
    }
}

/// Value to write to storage after `action` produced `state`.
#[derive(Debug, Clone, PartialEq)]
pub enum Persisted {
    Flag(&'static str, bool),
    Json(&'static str, Vec<String>),
}

pub fn reduce(state: &AppState, action: &AppAction) -> AppState {
    let mut next = state.clone();
    match action {
        AppAction::SessionLoaded {
            user,
            permissions,
            menu,
        } => {
            next.user = Some(user.clone());
            next.permissions = permissions.clone();
            next.menu = menu.clone();
        }
        AppAction::SessionCleared => {
            let fresh = AppState::default();
            next.user = fresh.user;
            next.permissions = fresh.permissions;
            next.menu = fresh.menu;
        }
        AppAction::LocationChanged { pathname, query } => {
            next.location_pathname = pathname.clone();
            next.location_query = query.clone();
        }
        AppAction::SwitchSider => next.sider_fold = !state.sider_fold,
        AppAction::SwitchTheme => next.dark_theme = !state.dark_theme,
        AppAction::SwitchMenuPopover => next.menu_popover_visible = !state.menu_popover_visible,
        AppAction::HandleNavbar(is_navbar) => next.is_navbar = *is_navbar,
        AppAction::HandleNavOpenKeys(keys) => next.nav_open_keys = keys.clone(),
    }
    next
}

pub fn persisted_entry(state: &AppState, action: &AppAction) -> Option<Persisted> {
    match action {
        AppAction::SwitchSider => Some(Persisted::Flag(SIDER_FOLD_KEY, state.sider_fold)),
        AppAction::SwitchTheme => Some(Persisted::Flag(DARK_THEME_KEY, state.dark_theme)),
        AppAction::HandleNavOpenKeys(_) => {
            Some(Persisted::Json(NAV_OPEN_KEYS_KEY, state.nav_open_keys.clone()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    #[test]
    fn test_switch_sider_twice_restores() {
        let state = AppState::default();
        let once = reduce(&state, &AppAction::SwitchSider);
        assert!(once.sider_fold);
        assert_eq!(
            persisted_entry(&once, &AppAction::SwitchSider),
            Some(Persisted::Flag(SIDER_FOLD_KEY, true))
        );

        let twice = reduce(&once, &AppAction::SwitchSider);
        assert_eq!(twice, state);
    }

    #[test]
    fn test_flags_are_independent() {
        let state = reduce(&AppState::default(), &AppAction::SwitchTheme);
        let state = reduce(&state, &AppAction::SwitchMenuPopover);
        assert!(state.dark_theme);
        assert!(state.menu_popover_visible);
        assert!(!state.sider_fold);
        assert!(!state.is_navbar);
        assert_eq!(persisted_entry(&state, &AppAction::SwitchMenuPopover), None);
    }

    #[test]
    fn test_session_loaded_replaces_user_and_menu() {
        let user = UserInfo {
            id: "1".to_string(),
            username: "admin".to_string(),
            permissions: Permissions {
                role: Role::Admin,
                visit: vec!["1".to_string()],
            },
        };
        let action = AppAction::SessionLoaded {
            permissions: user.permissions.clone(),
            user: user.clone(),
            menu: Vec::new(),
        };
        let state = reduce(&AppState::default(), &action);
        assert_eq!(state.user, Some(user));
        assert_eq!(state.permissions.role, Role::Admin);
        assert!(state.menu.is_empty());

        let cleared = reduce(&state, &AppAction::SessionCleared);
        assert_eq!(cleared.user, None);
        assert_eq!(cleared.permissions, Permissions::default());
        assert_eq!(cleared.menu, AppState::default().menu);
    }

    #[test]
    fn test_nav_open_keys_persisted_as_json() {
        let action = AppAction::HandleNavOpenKeys(vec!["2".to_string()]);
        let state = reduce(&AppState::default(), &action);
        assert_eq!(
            persisted_entry(&state, &action),
            Some(Persisted::Json(NAV_OPEN_KEYS_KEY, vec!["2".to_string()]))
        );
    }
}
