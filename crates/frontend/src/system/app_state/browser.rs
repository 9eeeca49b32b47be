//! Browser side of the store: reactive cell, DOM ports and subscriptions.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use super::debounce::{Debouncer, GlooTimers};
use super::ports::{Navigator, Ports, Viewport};
use super::state::AppState;
use super::storage;
use super::store::{AppStore, StateCell};
use crate::shared::config::AppConfig;
use crate::system::auth::api::HttpSessionApi;
use crate::system::menus::api::HttpMenuApi;

/// Quiet period before a resize is acted on.
pub const RESIZE_DEBOUNCE_MS: u32 = 300;

pub type WebAppStore = AppStore<RwSignal<AppState>>;

impl StateCell for RwSignal<AppState> {
    fn get(&self) -> AppState {
        self.get_untracked()
    }

    fn set(&self, state: AppState) {
        Set::set(self, state);
    }
}

/// `document.body.clientWidth`
pub struct BodyViewport;

impl Viewport for BodyViewport {
    fn width(&self) -> i32 {
        window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.body())
            .map(|body| body.client_width())
            .unwrap_or_default()
    }
}

/// Pushes through the leptos router so route views update.
pub struct RouterNavigator {
    navigate: Box<dyn Fn(&str)>,
}

impl RouterNavigator {
    /// Must be called inside `<Router>`.
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Box::new(move |to| navigate(to, NavigateOptions::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn push(&self, to: &str) {
        (self.navigate)(to)
    }
}

/// Builds the store, provides it as context and starts the subscriptions:
/// location tracking, the initial session check and resize handling.
#[component]
pub fn AppStateProvider(config: AppConfig, children: Children) -> impl IntoView {
    let config = Rc::new(config);
    let storage = storage::browser_or_memory();
    let viewport = BodyViewport;
    let state = RwSignal::new(AppState::restore(&config, &*storage, viewport.width()));

    let ports = Ports {
        session: Rc::new(HttpSessionApi::new(config.api.clone())),
        menus: Rc::new(HttpMenuApi::new(config.api.clone())),
        storage,
        navigator: Rc::new(RouterNavigator::from_router()),
        viewport: Rc::new(viewport),
    };
    let store = AppStore::new(state, config, ports);

    let location = use_location();
    store.location_changed(
        &location.pathname.get_untracked(),
        &location.search.get_untracked(),
    );

    provide_context::<AppStoreHandle>(StoredValue::new_local(store.clone()));
    provide_context(state);

    let tracked = store.clone();
    Effect::new(move |_| {
        tracked.location_changed(&location.pathname.get(), &location.search.get());
    });

    let initial = store.clone();
    spawn_local(async move {
        if let Err(e) = initial.initialize().await {
            log::error!("Session check failed: {}", e);
        }
    });

    install_resize_listener(store);

    children()
}

/// Debounced `window.onresize` driving [`AppStore::change_navbar`].
fn install_resize_listener(store: WebAppStore) {
    let Some(window) = window() else {
        return;
    };

    let debouncer = Debouncer::new(GlooTimers, RESIZE_DEBOUNCE_MS);
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        let store = store.clone();
        debouncer.call(move || {
            store.change_navbar();
        });
    });

    if let Err(e) =
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
    {
        log::warn!("Failed to subscribe to resize events: {:?}", e);
    }
    on_resize.forget(); // listener lives as long as the page
}

/// Copyable handle to the store, usable from any view closure.
pub type AppStoreHandle = StoredValue<WebAppStore, LocalStorage>;

/// Hook to access the store.
pub fn use_app_store() -> AppStoreHandle {
    use_context::<AppStoreHandle>().expect("AppStateProvider not found in component tree")
}

/// Hook to access the reactive state.
pub fn use_app_state() -> RwSignal<AppState> {
    use_context::<RwSignal<AppState>>().expect("AppStateProvider not found in component tree")
}
