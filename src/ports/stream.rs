use crate::domain::notification::{Notification, WidgetError};

/// Callbacks a stream connection reports into.
///
/// `on_event` receives each decoded notification; `on_error` receives a
/// diagnostic description of a transport failure.
pub struct StreamCallbacks {
    pub on_event: Box<dyn Fn(Notification)>,
    pub on_error: Box<dyn Fn(String)>,
}

/// A live server-push connection. Dropping the handle does not close the
/// connection; `close` does, and also detaches the callbacks.
pub trait StreamHandle {
    fn close(&self);
}

/// Port for the server-push notification stream.
pub trait StreamPort {
    /// Opens a connection delivering into `callbacks`.
    fn connect(&self, callbacks: StreamCallbacks) -> Result<Box<dyn StreamHandle>, WidgetError>;
}
