//! Root page.

use leptos::prelude::*;

use crate::components::app_bar::PrimaryAppBar;
use crate::components::theme_provider::CssBaseline;

stylance::import_crate_style!(css, "src/components/page.module.css");

/// Home page: baseline reset plus the app bar in a flex row.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class=css::page>
            <CssBaseline />
            <PrimaryAppBar />
        </div>
    }
}
