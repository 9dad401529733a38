//! Application router component.
//!
//! Handles path-based client-side routing over the static route table.
//! Uses the History API and native popstate events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL path is the source of truth**: the route signal is derived from
//!   `location.pathname`
//! - **[`Link`] never reloads**: plain clicks push a history entry and update
//!   the route signal
//! - **popstate events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::not_found::NotFound;
use crate::components::page::HomePage;
use crate::models::AppRoute;
use crate::utils::dom;

// ============================================================================
// Router Context
// ============================================================================

/// Navigation handle available below [`AppRouter`].
#[derive(Clone, Copy)]
pub struct RouterContext {
    route: RwSignal<AppRoute>,
}

impl RouterContext {
    /// Navigate to `route` without reloading the page.
    pub fn navigate(&self, route: AppRoute) {
        if self.route.with_untracked(|current| *current == route) {
            return;
        }
        route.push();
        self.route.set(route);
    }
}

pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext must be provided by AppRouter")
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/` → [`HomePage`]
/// - anything else → [`NotFound`]
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    provide_context(RouterContext { route });

    let page = Memo::new(move |_| route.get());

    view! {
        {move || match page.get() {
            AppRoute::Home => view! { <HomePage /> }.into_any(),
            AppRoute::NotFound { path } => view! { <NotFound path=path /> }.into_any(),
        }}
    }
}

// ============================================================================
// Link
// ============================================================================

/// Anchor that navigates client-side.
///
/// Renders a real `href`, so modified clicks (new tab, ...) still work.
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.path().to_string();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if dom::is_plain_primary_click(&ev) {
            ev.prevent_default();
            router.navigate(to.clone());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
