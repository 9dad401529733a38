//! Inline styles derived from the theme at render time.
//!
//! Components never hardcode z-index, colors or the bar height; they call
//! one of the `*_style` functions with the ambient [`ThemeConfig`].

use crate::core::theme::ThemeConfig;

/// Declarations rendered into a `style` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle(Vec<(&'static str, String)>);

impl InlineStyle {
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.0.push((property, value.into()));
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// `property: value;` pairs joined by spaces.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fixed top bar. Sits two layers above the drawer so the menu button stays
/// clickable while the drawer is open.
pub fn app_bar_style(theme: &ThemeConfig) -> InlineStyle {
    let defaults = &theme.components.app_bar;
    InlineStyle::default()
        .with("z-index", (theme.z_index.drawer + 2).to_string())
        .with("background-color", theme.app_bar_fill(defaults.color))
        .with("color", theme.palette.text.primary.clone())
        .with("border-bottom", format!("1px solid {}", theme.palette.divider))
        .with("box-shadow", defaults.box_shadow())
}

/// Dense toolbar inside the bar.
pub fn toolbar_style(theme: &ThemeConfig) -> InlineStyle {
    let height = format!("{}px", theme.primary_app_bar.height);
    InlineStyle::default()
        .with("height", height.clone())
        .with("min-height", height)
        .with("padding", format!("0 {}px", theme.spacing(2)))
}

/// Menu button spacing.
pub fn menu_button_style(theme: &ThemeConfig) -> InlineStyle {
    InlineStyle::default().with("margin-right", format!("{}px", theme.spacing(2)))
}

/// Drawer layer, placed below the bar. Its top offset comes from
/// `--djchat-app-bar-height` in the theme stylesheet.
pub fn drawer_style(theme: &ThemeConfig) -> InlineStyle {
    InlineStyle::default().with("z-index", theme.z_index.drawer.to_string())
}

pub fn drawer_backdrop_style(theme: &ThemeConfig) -> InlineStyle {
    InlineStyle::default().with("background-color", theme.palette.backdrop.clone())
}

pub fn drawer_paper_style(theme: &ThemeConfig) -> InlineStyle {
    InlineStyle::default()
        .with("background-color", theme.palette.background.paper.clone())
        .with("color", theme.palette.text.primary.clone())
        .with("padding", format!("0 {}px", theme.spacing(2)))
}

/// Bold, tight-tracked site title.
pub fn title_style() -> InlineStyle {
    InlineStyle::default()
        .with("font-weight", "700")
        .with("letter-spacing", "-0.5px")
}

/// Crash fallback page. It replaces the themed tree, so the font stack is
/// set inline rather than through the theme stylesheet.
pub fn fallback_page_style(theme: &ThemeConfig) -> InlineStyle {
    InlineStyle::default()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("align-items", "center")
        .with("justify-content", "center")
        .with("height", "100vh")
        .with("padding", format!("{}px", theme.spacing(4)))
        .with("font-family", theme.typography.font_family_css())
        .with("color", theme.palette.text.primary.clone())
        .with("background-color", theme.palette.background.default.clone())
}

/// Error list on the crash fallback page.
pub fn fallback_errors_style(theme: &ThemeConfig) -> InlineStyle {
    InlineStyle::default()
        .with("margin-bottom", format!("{}px", theme.spacing(4)))
        .with("color", theme.palette.error.clone())
}
