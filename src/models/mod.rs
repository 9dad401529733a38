//! Data models and types for the application.
//!
//! - [`AppRoute`], [`Page`], [`ROUTES`] - Path-based navigation

mod route;

pub use route::{AppRoute, Page, ROUTES};
