//! Custom error types for the application.
//!
//! Rendering never fails; the only fallible step is loading the theme
//! overrides embedded at build time:
//!
//! - [`ThemeError`] - TOML parsing and validation of theme overrides

use thiserror::Error;

use crate::core::theme::{MAX_APP_BAR_HEIGHT, MAX_ELEVATION};

/// Theme override errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    /// Override document is not valid TOML or contains unknown keys.
    #[error("invalid theme overrides: {0}")]
    Parse(String),
    /// App bar height outside `1..=MAX_APP_BAR_HEIGHT`.
    #[error("app bar height must be between 1 and {max}px, got {0}px", max = MAX_APP_BAR_HEIGHT)]
    InvalidAppBarHeight(u32),
    /// Font stack override with no families.
    #[error("font family list must not be empty")]
    EmptyFontFamily,
    /// Elevation without a shadow definition.
    #[error("app bar elevation must be at most {max}, got {0}", max = MAX_ELEVATION)]
    UnsupportedElevation(u8),
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}
