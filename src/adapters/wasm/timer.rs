use crate::domain::notification::WidgetError;
use crate::ports::{TimerId, TimerPort};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::error_conversions::describe;

/// `window.setTimeout`-backed timer.
///
/// The callback closure hands itself to the JS garbage collector
/// (`Closure::once_into_js`), so a fired timeout frees its closure; a
/// cleared one is left to the GC.
#[derive(Debug, Clone, Copy)]
pub struct WindowTimer;

impl WindowTimer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerPort for WindowTimer {
    fn set_timeout(
        &self,
        callback: Box<dyn FnOnce()>,
        delay_ms: i32,
    ) -> Result<TimerId, WidgetError> {
        let window = super::window()?;
        let callback = Closure::once_into_js(callback);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms,
            )
            .map_err(|e| WidgetError::timer(describe(e)))?;
        Ok(TimerId(id))
    }

    fn clear_timeout(&self, id: TimerId) {
        if let Ok(window) = super::window() {
            window.clear_timeout_with_handle(id.0);
        }
    }
}
