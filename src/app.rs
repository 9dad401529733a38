//! Root application module.
//!
//! Loads the session theme and mounts the provider, the router and an error
//! boundary around them.

use leptos::prelude::*;

use crate::components::{AppRouter, ThemeProvider};
use crate::config;
use crate::core::style::{fallback_errors_style, fallback_page_style};

/// Root application component with error boundary.
///
/// This component:
/// - Builds the theme once for the whole session
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router inside the theme provider
#[component]
pub fn App() -> impl IntoView {
    let theme = config::load_theme();
    let page_style = fallback_page_style(&theme).to_css();
    let errors_style = fallback_errors_style(&theme).to_css();

    view! {
        <ErrorBoundary
            fallback=move |errors| view! {
                <div style=page_style.clone()>
                    <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                    <ul style=errors_style.clone()>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            padding: 0.75rem 2rem;
                            border: none;
                            border-radius: 4px;
                            cursor: pointer;
                            font: inherit;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <ThemeProvider theme=theme>
                <AppRouter />
            </ThemeProvider>
        </ErrorBoundary>
    }
}
