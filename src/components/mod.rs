//! Page components.

pub mod electron_cloud;
pub mod nav_menu;
