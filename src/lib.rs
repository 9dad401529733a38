//! Single-page shell of the Django Chat front end.
//!
//! - [`app`] - Root component
//! - [`components`] - Leptos components
//! - [`core`] - Theme factory, derived styles and app bar state
//! - [`models`] - Route table
//! - [`config`] - Compile-time configuration

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
