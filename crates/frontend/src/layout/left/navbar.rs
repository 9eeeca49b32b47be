use leptos::prelude::*;

use super::sidebar::Sidebar;
use crate::shared::icons::icon;
use crate::system::app_state::{use_app_state, use_app_store};

/// Menu button and popover used instead of the sider on narrow screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_app_state();
    let store = use_app_store();
    let is_visible = move || state.with(|s| s.menu_popover_visible);

    view! {
        <div class="main-nav-bar">
            <button
                class="top-header__icon-btn"
                on:click=move |_| store.with_value(|s| s.switch_menu_popover())
                title="Menu"
            >
                {icon("menu")}
            </button>
            <Show when=is_visible>
                <div class="main-nav-bar__popover">
                    <Sidebar />
                </div>
            </Show>
        </div>
    }
}
