//! Utility modules for DOM access and console logging.
//!
//! Provides:
//! - [`dom`] - Browser window, location and history helpers
//! - [`console`] - Leveled logging to the browser console

pub mod console;
pub mod dom;
