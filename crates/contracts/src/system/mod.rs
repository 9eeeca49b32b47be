pub mod auth;
pub mod menus;
