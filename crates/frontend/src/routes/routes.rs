use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

use crate::layout::Shell;
use crate::system::app_state::menu_tree::find_by_route;
use crate::system::app_state::state::DASHBOARD_ROUTE;
use crate::system::app_state::use_app_state;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;

/// Any menu route without a dedicated page.
#[component]
fn MenuPage() -> impl IntoView {
    let state = use_app_state();
    let title = move || {
        state.with(|s| {
            find_by_route(&s.menu, &s.location_pathname)
                .map(|m| m.name.clone())
                .unwrap_or_else(|| "Page not found".to_string())
        })
    };

    view! {
        <div class="menu-page">
            <h2>{title}</h2>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <Shell><MenuPage /></Shell> }>
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/dashboard") view=|| view! { <Shell><DashboardPage /></Shell> } />
            <Route path=path!("/") view=|| view! { <Redirect path=DASHBOARD_ROUTE /> } />
        </Routes>
    }
}
