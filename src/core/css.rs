//! Global stylesheets rendered from the theme.
//!
//! - [`theme_stylesheet`] - custom properties and one class per type variant
//! - [`baseline_stylesheet`] - document reset

use std::fmt::Write;

use crate::core::theme::{ThemeConfig, TypeStyle, Variant};

/// Prefix of generated class names and custom properties.
pub const CSS_PREFIX: &str = "djchat";

/// Custom property holding the app bar height, read by the drawer module CSS.
pub const APP_BAR_HEIGHT_VAR: &str = "--djchat-app-bar-height";

/// Class applied by a text node of `variant`.
pub fn typography_class(variant: Variant) -> String {
    format!("{}-typography-{}", CSS_PREFIX, variant.name())
}

pub fn no_wrap_class() -> String {
    format!("{}-typography-nowrap", CSS_PREFIX)
}

pub fn paragraph_class() -> String {
    format!("{}-typography-paragraph", CSS_PREFIX)
}

fn type_declarations(style: &TypeStyle, font_family: &str) -> String {
    let mut decls = format!(
        "font-family: {}; font-weight: {}; font-size: {}rem; line-height: {}; letter-spacing: {}em;",
        font_family, style.font_weight, style.font_size_rem, style.line_height, style.letter_spacing_em
    );
    if style.uppercase {
        decls.push_str(" text-transform: uppercase;");
    }
    decls
}

/// Custom properties plus typography classes with their media steps.
pub fn theme_stylesheet(theme: &ThemeConfig) -> String {
    let font_family = theme.typography.font_family_css();
    let mut css = String::new();

    let _ = writeln!(
        css,
        ":root {{ {}: {}px; }}",
        APP_BAR_HEIGHT_VAR, theme.primary_app_bar.height
    );

    for variant in Variant::ALL {
        let style = theme.typography.variant(variant);
        let class = typography_class(variant);
        let _ = writeln!(css, ".{} {{ margin: 0; {} }}", class, type_declarations(style, &font_family));
        for step in &style.responsive {
            let _ = writeln!(
                css,
                "@media (min-width:{}px) {{ .{} {{ font-size: {}rem; }} }}",
                step.min_width, class, step.font_size_rem
            );
        }
    }

    let _ = writeln!(
        css,
        ".{} {{ overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }}",
        no_wrap_class()
    );
    let _ = writeln!(
        css,
        ".{} {{ margin-bottom: {}px; }}",
        paragraph_class(),
        theme.spacing(2)
    );
    css
}

/// Document reset: box sizing, margins, body typography and background.
pub fn baseline_stylesheet(theme: &ThemeConfig) -> String {
    let body = type_declarations(
        theme.typography.variant(Variant::Body1),
        &theme.typography.font_family_css(),
    );
    let mut css = String::new();
    let _ = writeln!(
        css,
        "html {{ -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale; box-sizing: border-box; -webkit-text-size-adjust: 100%; }}"
    );
    let _ = writeln!(css, "*, *::before, *::after {{ box-sizing: inherit; }}");
    let _ = writeln!(css, "strong, b {{ font-weight: 700; }}");
    let _ = writeln!(
        css,
        "body {{ margin: 0; color: {}; background-color: {}; {} }}",
        theme.palette.text.primary, theme.palette.background.default, body
    );
    let _ = writeln!(css, "@media print {{ body {{ background-color: #fff; }} }}");
    let _ = writeln!(
        css,
        "body::backdrop {{ background-color: {}; }}",
        theme.palette.background.default
    );
    css
}
