//! Browser console logging.
//!
//! Messages go to `console.debug` / `console.warn` on wasm. Other targets
//! have no console binding, so the calls compile to nothing there.

/// Log a debug message.
pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a warning.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
