extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

// Re-exports for testing
pub use domain::notification::{CancelToken, DisplayedSet, Notification, NotificationId, WidgetError};
pub use domain::stream::{ReconnectPolicy, StreamClient, StreamState};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
