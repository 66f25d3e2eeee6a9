pub mod api;
pub mod console_logger;
pub mod error_conversions;
pub mod stream;
pub mod timer;
pub mod view;

pub use api::FetchApi;
pub use console_logger::ConsoleLogger;
pub use stream::EventSourceStream;
pub use timer::WindowTimer;
pub use view::DomView;

use crate::domain::notification::WidgetError;

pub(crate) fn window() -> Result<web_sys::Window, WidgetError> {
    web_sys::window().ok_or_else(|| WidgetError::dom("no window in global scope"))
}
