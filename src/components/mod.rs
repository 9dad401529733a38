//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`theme_provider`] - Theme context, theme stylesheet and baseline reset
//! - [`app_bar`] - Primary app bar and its drawer
//! - [`page`] - Root page
//! - [`not_found`] - Fallback page
//! - [`typography`] - Text styled by theme variants
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod app_bar;
pub mod icons;
pub mod not_found;
pub mod page;
pub mod router;
pub mod theme_provider;
pub mod typography;

pub use router::AppRouter;
pub use theme_provider::{ThemeProvider, use_theme};
