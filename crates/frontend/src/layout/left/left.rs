use leptos::prelude::*;

use crate::system::app_state::use_app_state;

/// Sider column; hidden in navbar mode, narrow when folded.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let state = use_app_state();
    let is_navbar = move || state.with(|s| s.is_navbar);
    let is_folded = move || state.with(|s| s.sider_fold);

    view! {
        <aside
            data-zone="left"
            class="left app-sidebar"
            class:app-sidebar--folded=is_folded
            class:hidden=is_navbar
        >
            {children()}
        </aside>
    }
}
