//! Core logic of the shell, independent of the DOM.
//!
//! This module provides:
//! - [`theme`] - the [`ThemeConfig`] factory and its TOML overrides
//! - [`style`] - inline styles derived from the theme at render time
//! - [`css`] - global stylesheets rendered from the theme
//! - [`app_bar`] - drawer and viewport state of the primary app bar

pub mod app_bar;
pub mod css;
pub mod error;
pub mod style;
pub mod theme;

pub use app_bar::{AppBarState, AppBarView, DrawerState, Transition, ViewportClass};
pub use error::ThemeError;
pub use theme::{ThemeConfig, ThemeOverrides, create_theme, create_theme_with};
