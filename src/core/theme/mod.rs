//! Theme factory.
//!
//! [`create_theme`] builds the single [`ThemeConfig`] shared by the whole
//! session: font stack, palette, breakpoints, z-index layers, the custom
//! `primary_app_bar` height and the app bar defaults. The type scale is made
//! responsive before the value is returned.

mod breakpoints;
mod overrides;
mod palette;
mod typography;

use serde::Deserialize;

pub use breakpoints::{Breakpoint, Breakpoints};
pub use overrides::{AppBarOverrides, PrimaryAppBarOverrides, ThemeOverrides, TypographyOverrides};
pub use palette::{Background, Palette, TextColors};
pub use typography::{MediaStep, ResponsiveOptions, TextTag, TypeStyle, Typography, Variant};

use crate::core::error::ThemeError;

/// Default app bar height in pixels.
pub const DEFAULT_APP_BAR_HEIGHT: u32 = 50;

/// Largest accepted app bar height override.
pub const MAX_APP_BAR_HEIGHT: u32 = 256;

/// Highest elevation with a shadow definition.
pub const MAX_ELEVATION: u8 = 4;

/// Box shadows indexed by elevation.
const SHADOWS: [&str; MAX_ELEVATION as usize + 1] = [
    "none",
    "0px 2px 1px -1px rgba(0,0,0,0.2),0px 1px 1px 0px rgba(0,0,0,0.14),0px 1px 3px 0px rgba(0,0,0,0.12)",
    "0px 3px 1px -2px rgba(0,0,0,0.2),0px 2px 2px 0px rgba(0,0,0,0.14),0px 1px 5px 0px rgba(0,0,0,0.12)",
    "0px 3px 3px -2px rgba(0,0,0,0.2),0px 3px 4px 0px rgba(0,0,0,0.14),0px 1px 8px 0px rgba(0,0,0,0.12)",
    "0px 2px 4px -1px rgba(0,0,0,0.2),0px 4px 5px 0px rgba(0,0,0,0.14),0px 1px 10px 0px rgba(0,0,0,0.12)",
];

/// Stacking order of layered surfaces. The app bar is placed relative to
/// the drawer layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZIndex {
    pub drawer: i32,
}

impl Default for ZIndex {
    fn default() -> Self {
        Self { drawer: 1200 }
    }
}

/// Custom theme field read by anything laid out around the top bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimaryAppBar {
    /// Bar height in pixels.
    pub height: u32,
}

/// App bar fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppBarColor {
    #[default]
    Default,
    Inherit,
    Transparent,
}

/// Default props of the app bar component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppBarDefaults {
    pub color: AppBarColor,
    pub elevation: u8,
}

impl AppBarDefaults {
    pub fn box_shadow(&self) -> &'static str {
        SHADOWS[usize::from(self.elevation.min(MAX_ELEVATION))]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentDefaults {
    pub app_bar: AppBarDefaults,
}

/// Immutable, session-wide theme.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeConfig {
    pub typography: Typography,
    pub palette: Palette,
    pub breakpoints: Breakpoints,
    pub z_index: ZIndex,
    /// Spacing unit in pixels.
    pub spacing_unit: u32,
    pub primary_app_bar: PrimaryAppBar,
    pub components: ComponentDefaults,
}

impl ThemeConfig {
    /// `factor` spacing units in pixels.
    pub fn spacing(&self, factor: u32) -> u32 {
        self.spacing_unit * factor
    }

    /// Background resolved for an app bar color prop.
    ///
    /// `Default` blends the bar into the page background.
    pub fn app_bar_fill(&self, color: AppBarColor) -> &str {
        match color {
            AppBarColor::Default => &self.palette.background.default,
            AppBarColor::Inherit => "inherit",
            AppBarColor::Transparent => "transparent",
        }
    }
}

/// Base theme before the responsive transform.
fn base_theme() -> ThemeConfig {
    ThemeConfig {
        typography: Typography::new(vec!["IBM Plex Sans".to_string(), "sans-serif".to_string()]),
        palette: Palette::default(),
        breakpoints: Breakpoints::default(),
        z_index: ZIndex::default(),
        spacing_unit: 8,
        primary_app_bar: PrimaryAppBar {
            height: DEFAULT_APP_BAR_HEIGHT,
        },
        components: ComponentDefaults {
            app_bar: AppBarDefaults {
                color: AppBarColor::Default,
                elevation: 0,
            },
        },
    }
}

/// Scales the type scale across breakpoint tiers.
pub fn responsive_font_sizes(mut theme: ThemeConfig, options: &ResponsiveOptions) -> ThemeConfig {
    let widths: Vec<u32> = options
        .breakpoints
        .iter()
        .map(|bp| theme.breakpoints.value(*bp))
        .collect();
    theme.typography.make_responsive(&widths, options);
    theme
}

/// Creates the application theme.
pub fn create_theme() -> ThemeConfig {
    responsive_font_sizes(base_theme(), &ResponsiveOptions::default())
}

/// Creates the application theme with validated overrides applied.
pub fn create_theme_with(overrides: &ThemeOverrides) -> Result<ThemeConfig, ThemeError> {
    overrides.validate()?;

    let mut theme = base_theme();
    if let Some(height) = overrides.primary_app_bar.height {
        theme.primary_app_bar.height = height;
    }
    if let Some(families) = &overrides.typography.font_family {
        theme.typography.font_family = families
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
    }
    if let Some(elevation) = overrides.app_bar.elevation {
        theme.components.app_bar.elevation = elevation;
    }
    if let Some(color) = overrides.app_bar.color {
        theme.components.app_bar.color = color;
    }

    Ok(responsive_font_sizes(theme, &ResponsiveOptions::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = create_theme();
        assert_eq!(
            theme.typography.font_family,
            vec!["IBM Plex Sans".to_string(), "sans-serif".to_string()]
        );
        assert_eq!(theme.primary_app_bar.height, 50);
        assert_eq!(theme.components.app_bar.color, AppBarColor::Default);
        assert_eq!(theme.components.app_bar.elevation, 0);
        assert_eq!(theme.components.app_bar.box_shadow(), "none");
        assert_eq!(theme.breakpoints.sm, 600);
        assert_eq!(theme.spacing(2), 16);
    }

    #[test]
    fn test_theme_is_pure() {
        assert_eq!(create_theme(), create_theme());
    }

    #[test]
    fn test_theme_is_responsive() {
        let theme = create_theme();
        assert_eq!(theme.typography.variant(Variant::H6).responsive.len(), 3);
        assert!(theme.typography.variant(Variant::Body1).responsive.is_empty());
    }

    #[test]
    fn test_default_overrides_match_factory() {
        assert_eq!(
            create_theme_with(&ThemeOverrides::default()),
            Ok(create_theme())
        );
    }

    #[test]
    fn test_overrides_applied() {
        let overrides = ThemeOverrides {
            primary_app_bar: PrimaryAppBarOverrides { height: Some(64) },
            typography: TypographyOverrides {
                font_family: Some(vec![" Inter ".to_string(), "".to_string(), "sans-serif".to_string()]),
            },
            app_bar: AppBarOverrides {
                elevation: Some(4),
                color: Some(AppBarColor::Transparent),
            },
        };
        let theme = create_theme_with(&overrides).unwrap();
        assert_eq!(theme.primary_app_bar.height, 64);
        assert_eq!(
            theme.typography.font_family,
            vec!["Inter".to_string(), "sans-serif".to_string()]
        );
        assert_eq!(theme.components.app_bar.color, AppBarColor::Transparent);
        assert!(theme.components.app_bar.box_shadow().starts_with("0px 2px 4px"));
        // responsive transform still runs
        assert_eq!(theme.typography.variant(Variant::H1).responsive.len(), 3);
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        let overrides = ThemeOverrides {
            primary_app_bar: PrimaryAppBarOverrides { height: Some(0) },
            ..ThemeOverrides::default()
        };
        assert_eq!(
            create_theme_with(&overrides),
            Err(ThemeError::InvalidAppBarHeight(0))
        );
    }

    #[test]
    fn test_app_bar_fill() {
        let theme = create_theme();
        assert_eq!(theme.app_bar_fill(AppBarColor::Default), "#fff");
        assert_eq!(theme.app_bar_fill(AppBarColor::Transparent), "transparent");
    }
}
