pub mod converters;
pub mod widget;

pub use widget::{NotificationWidget, WidgetConfig};
