pub mod left;
pub mod navbar;
pub mod sidebar;

pub use left::Left;
pub use navbar::Navbar;
pub use sidebar::Sidebar;
