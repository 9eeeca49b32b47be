//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sider fold toggle (or the popover menu on narrow screens)
//! - Application title
//! - Theme toggle
//! - User name and logout

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::left::Navbar;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::app_state::{use_app_state, use_app_store};

#[component]
pub fn TopHeader() -> impl IntoView {
    let state = use_app_state();
    let store = use_app_store();
    let title = store.with_value(|s| s.config().name.clone());
    let (logout_error, set_logout_error) = signal(Option::<String>::None);

    let is_navbar = move || state.with(|s| s.is_navbar);
    let is_folded = move || state.with(|s| s.sider_fold);

    let toggle_sidebar = move |_| store.with_value(|s| s.switch_sider());

    let logout = move |_| {
        let store = store.get_value();
        set_logout_error.set(None);
        spawn_local(async move {
            if let Err(e) = store.logout("").await {
                log::error!("{}", e);
                set_logout_error.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <Show
                    when=is_navbar
                    fallback=move || view! {
                        <button
                            class="top-header__icon-btn"
                            on:click=toggle_sidebar
                            title=move || if is_folded() { "Expand menu" } else { "Collapse menu" }
                        >
                            {move || if is_folded() {
                                icon("panel-left-open")
                            } else {
                                icon("panel-left-close")
                            }}
                        </button>
                    }
                >
                    <Navbar />
                </Show>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <Show when=move || logout_error.get().is_some()>
                    <span class="top-header__error">
                        {move || logout_error.get().unwrap_or_default()}
                    </span>
                </Show>

                <ThemeToggle />

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || state.with(|s| s.user
                            .as_ref()
                            .map(|u| u.username.clone())
                            .unwrap_or_else(|| "Guest".to_string()))}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
