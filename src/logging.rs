//! Dev Logging
//!
//! Console logging compiled out of release bundles. Called from effects
//! and event handlers, never from the render path.

#[cfg(debug_assertions)]
pub fn debug(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(debug_assertions))]
pub fn debug(_message: &str) {}
