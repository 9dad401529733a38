//! Left off-canvas drawer.
//!
//! The entry list stays mounted while closed; only visibility changes.

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::components::typography::Typography;
use crate::core::app_bar::placeholder_entries;
use crate::core::style::{drawer_backdrop_style, drawer_paper_style, drawer_style};
use crate::core::theme::Variant;

stylance::import_crate_style!(css, "src/components/app_bar/drawer.module.css");

/// Drawer anchored to the left edge, below the app bar.
///
/// # Props
/// - `open`: visibility
/// - `on_dismiss`: invoked when the backdrop is clicked
#[component]
pub fn Drawer(#[prop(into)] open: Signal<bool>, on_dismiss: Callback<()>) -> impl IntoView {
    let theme = use_theme();
    let layer = drawer_style(&theme).to_css();
    let backdrop = drawer_backdrop_style(&theme).to_css();
    let paper = drawer_paper_style(&theme).to_css();

    view! {
        <div
            class=move || {
                if open.get() {
                    format!("{} {}", css::drawer, css::drawerOpen)
                } else {
                    css::drawer.to_string()
                }
            }
            style=layer
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class=css::backdrop style=backdrop on:click=move |_| on_dismiss.run(())></div>
            // Placeholder entries until real navigation exists
            <nav class=css::paper style=paper aria-label="navigation drawer">
                {placeholder_entries()
                    .map(|n| {
                        view! { <Typography variant=Variant::Body1 paragraph=true>{n}</Typography> }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
