use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::shared::theme::ThemeSync;
use crate::system::app_state::AppStateProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    view! {
        <Router>
            // The store needs the router for navigation and location tracking.
            <AppStateProvider config=config.clone()>
                <ThemeSync />
                <AppRoutes />
            </AppStateProvider>
        </Router>
    }
}
