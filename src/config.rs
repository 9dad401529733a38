//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Theme overrides are loaded at compile time using `include_str!`.

use crate::core::{ThemeConfig, ThemeError, ThemeOverrides, create_theme, create_theme_with};

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the app bar.
pub const APP_NAME: &str = "Django Chat";

/// Id of the element the app mounts into.
pub const ROOT_ELEMENT_ID: &str = "app";

// =============================================================================
// Theme Configuration
// =============================================================================

/// Theme overrides embedded from `assets/theme.toml`.
pub const THEME_OVERRIDES: &str = include_str!("../assets/theme.toml");

/// Build the session theme from [`THEME_OVERRIDES`].
pub fn configured_theme() -> Result<ThemeConfig, ThemeError> {
    let overrides = ThemeOverrides::from_toml(THEME_OVERRIDES)?;
    create_theme_with(&overrides)
}

/// [`configured_theme`], falling back to the built-in theme on error.
pub fn load_theme() -> ThemeConfig {
    configured_theme().unwrap_or_else(|err| {
        crate::utils::console::warn(&format!("{err}; using default theme"));
        create_theme()
    })
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
