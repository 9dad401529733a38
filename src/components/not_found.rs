//! Fallback page for paths missing from the route table.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::router::Link;
use crate::components::theme_provider::CssBaseline;
use crate::components::typography::Typography;
use crate::core::theme::Variant;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/not_found.module.css");

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <main class=css::notFound>
            <CssBaseline />
            <Typography variant=Variant::H3>"404 Not Found"</Typography>
            <Typography variant=Variant::Body1>
                "No page matches "
                <code class=css::path>{path}</code>
            </Typography>
            <Link to=AppRoute::Home class=css::homeLink>
                <Icon icon=ic::HOME />
                <Typography variant=Variant::Button>"Back home"</Typography>
            </Link>
        </main>
    }
}
