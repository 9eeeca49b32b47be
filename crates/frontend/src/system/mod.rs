pub mod app_state;
pub mod auth;
pub mod menus;
pub mod pages;
