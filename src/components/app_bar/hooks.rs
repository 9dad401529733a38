//! Reactive viewport classification.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::core::ViewportClass;
use crate::core::theme::{Breakpoint, Breakpoints};

/// Tracks whether the viewport is below the `sm` breakpoint.
pub fn use_viewport_class(breakpoints: &Breakpoints) -> Signal<ViewportClass> {
    let at_least_small = use_media_query(breakpoints.up(Breakpoint::Sm));
    Signal::derive(move || ViewportClass::from_media_match(at_least_small.get()))
}
