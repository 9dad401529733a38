//! Theme context and global stylesheets.
//!
//! [`ThemeProvider`] makes one [`ThemeConfig`] available to every descendant
//! through [`use_theme`] and injects the stylesheet rendered from it.

use std::sync::Arc;

use leptos::prelude::*;

use crate::core::css::{baseline_stylesheet, theme_stylesheet};
use crate::core::{ThemeConfig, create_theme};

/// Shared, read-only theme.
#[derive(Clone)]
pub struct ThemeContext(pub Arc<ThemeConfig>);

/// Theme of the nearest [`ThemeProvider`], or the default theme outside one.
pub fn use_theme() -> Arc<ThemeConfig> {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Arc::new(create_theme()))
}

/// Provides `theme` to `children`.
#[component]
pub fn ThemeProvider(theme: ThemeConfig, children: Children) -> impl IntoView {
    let stylesheet = theme_stylesheet(&theme);
    provide_context(ThemeContext(Arc::new(theme)));

    view! {
        <style>{stylesheet}</style>
        {children()}
    }
}

/// Baseline reset derived from the ambient theme.
#[component]
pub fn CssBaseline() -> impl IntoView {
    let stylesheet = baseline_stylesheet(&use_theme());
    view! { <style>{stylesheet}</style> }
}
