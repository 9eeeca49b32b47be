pub mod action;
pub mod browser;
pub mod debounce;
pub mod error;
pub mod menu_filter;
pub mod menu_tree;
pub mod ports;
pub mod state;
pub mod storage;
pub mod store;

pub use browser::{use_app_state, use_app_store, AppStateProvider, AppStoreHandle, WebAppStore};
pub use error::AppError;
pub use state::AppState;
pub use store::AppStore;
