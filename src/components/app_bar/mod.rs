//! Primary app bar: title link, menu button and the mobile drawer.

mod app_bar;
mod drawer;
mod hooks;

pub use app_bar::PrimaryAppBar;
pub use drawer::Drawer;
pub use hooks::use_viewport_class;
