//! Theme overrides loaded from TOML.
//!
//! ```toml
//! [primary_app_bar]
//! height = 56
//!
//! [typography]
//! font_family = ["Inter", "sans-serif"]
//!
//! [app_bar]
//! elevation = 0
//! color = "default"
//! ```
//!
//! Every table and key is optional; unknown keys are rejected.

use serde::Deserialize;

use super::{AppBarColor, MAX_APP_BAR_HEIGHT, MAX_ELEVATION};
use crate::core::error::ThemeError;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOverrides {
    pub primary_app_bar: PrimaryAppBarOverrides,
    pub typography: TypographyOverrides,
    pub app_bar: AppBarOverrides,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrimaryAppBarOverrides {
    pub height: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypographyOverrides {
    pub font_family: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppBarOverrides {
    pub elevation: Option<u8>,
    pub color: Option<AppBarColor>,
}

impl ThemeOverrides {
    /// Parses and validates an override document.
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        let overrides: Self = toml::from_str(source)?;
        overrides.validate()?;
        Ok(overrides)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        if let Some(height) = self.primary_app_bar.height
            && !(1..=MAX_APP_BAR_HEIGHT).contains(&height)
        {
            return Err(ThemeError::InvalidAppBarHeight(height));
        }
        if let Some(families) = &self.typography.font_family
            && families.iter().all(|f| f.trim().is_empty())
        {
            return Err(ThemeError::EmptyFontFamily);
        }
        if let Some(elevation) = self.app_bar.elevation
            && elevation > MAX_ELEVATION
        {
            return Err(ThemeError::UnsupportedElevation(elevation));
        }
        Ok(())
    }
}
