//! This crate contains all shared UI for the workspace.

mod navbar;
pub use navbar::Navbar;

mod layout;
pub use layout::Layout;

mod dashboard;
pub use dashboard::Dashboard;

mod timer;

mod components;
pub use components::*;
