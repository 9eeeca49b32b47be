//! Light/dark theme driven by the `dark_theme` flag of the app state.
//!
//! The flag itself is persisted by the store; this module only applies it
//! to the document.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;
use crate::system::app_state::{use_app_state, use_app_store};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Returns the theme name (used for the `data-theme` attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the CSS file path for this theme.
    pub fn css_path(&self) -> &'static str {
        match self {
            Theme::Light => "/static/themes/light.css",
            Theme::Dark => "/static/themes/dark.css",
        }
    }
}

/// Swap the theme stylesheet and tag `<body>` for additional styling hooks.
fn apply_theme_css(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(head) = document.head() {
        if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
            existing.remove();
        }
        if let Ok(link) = document.create_element("link") {
            let _ = link.set_attribute("id", "theme-stylesheet");
            let _ = link.set_attribute("rel", "stylesheet");
            let _ = link.set_attribute("href", theme.css_path());
            let _ = head.append_child(&link);
        }
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Keeps the document in sync with `dark_theme`. Render once near the root.
#[component]
pub fn ThemeSync() -> impl IntoView {
    let state = use_app_state();
    let theme = Memo::new(move |_| state.with(|s| Theme::from_dark_flag(s.dark_theme)));

    Effect::new(move |_| apply_theme_css(theme.get()));
}

/// Header button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = use_app_state();
    let store = use_app_store();
    let is_dark = move || state.with(|s| s.dark_theme);

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| store.with_value(|s| s.switch_theme())
            title=move || if is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
        >
            {move || if is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_flag() {
        assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
        assert_eq!(Theme::from_dark_flag(false).as_str(), "light");
        assert_eq!(Theme::default(), Theme::Light);
    }
}
