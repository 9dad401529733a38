//! Fixed top bar.
//!
//! ## Responsive behavior
//!
//! | Viewport | Display |
//! |----------|---------|
//! | Below `sm` (< 600px) | Menu button + title; menu button toggles the drawer |
//! | `sm` and up | Title only; an open drawer is closed on the way up |

use leptos::prelude::*;
use leptos_icons::Icon;

use super::drawer::Drawer;
use super::hooks::use_viewport_class;
use crate::components::icons as ic;
use crate::components::router::Link;
use crate::components::theme_provider::use_theme;
use crate::components::typography::Typography;
use crate::config::APP_NAME;
use crate::core::style::{app_bar_style, menu_button_style, title_style, toolbar_style};
use crate::core::theme::{TextTag, Variant};
use crate::core::{AppBarState, Transition};
use crate::models::AppRoute;
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/app_bar/app_bar.module.css");

/// Primary app bar with the side drawer it controls.
#[component]
pub fn PrimaryAppBar() -> impl IntoView {
    let theme = use_theme();
    let viewport = use_viewport_class(&theme.breakpoints);
    let state = RwSignal::new(AppBarState::new(viewport.get_untracked()));

    // Persist every reclassification
    Effect::new(move || {
        let current = viewport.get();
        if state.try_update(|s| s.reclassify(current)) == Some(Transition::AutoClosed) {
            console::debug("viewport widened, drawer closed");
        }
    });

    // Project against the live viewport, not the stored one, so the frame
    // that first sees a wide viewport already has the drawer closed
    let view = Memo::new(move |_| state.with(|s| s.view_for(viewport.get())));
    let show_toggle = Signal::derive(move || view.get().show_toggle);
    let drawer_open = Signal::derive(move || view.get().drawer_open);

    let on_toggle = Callback::new(move |_: ()| {
        if let Some(Transition::Toggled(drawer)) = state.try_update(|s| s.toggle()) {
            console::debug(&format!("drawer {:?}", drawer));
        }
    });

    let bar_style = app_bar_style(&theme).to_css();
    let toolbar = toolbar_style(&theme).to_css();
    let menu_style = menu_button_style(&theme).to_css();
    let title = title_style().to_css();

    view! {
        <header class=css::appBar style=bar_style>
            <div class=css::toolbar style=toolbar>
                <Show when=move || show_toggle.get()>
                    <button
                        class=css::menuButton
                        style=menu_style.clone()
                        aria-label="open drawer"
                        aria-expanded=move || drawer_open.get().to_string()
                        on:click=move |_| on_toggle.run(())
                    >
                        <Icon icon=ic::MENU />
                    </button>
                </Show>

                <Link to=AppRoute::Home class=css::homeLink>
                    <Typography variant=Variant::H6 tag=TextTag::Div no_wrap=true style=title>
                        {APP_NAME}
                    </Typography>
                </Link>
            </div>
        </header>
        // Outside the header so both layers stack in the root context
        <Drawer open=drawer_open on_dismiss=on_toggle />
    }
}
