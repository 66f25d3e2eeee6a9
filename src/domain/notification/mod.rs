pub mod cancel;
pub mod codec;
pub mod error;
pub mod operations;
pub mod store;
pub mod types;

pub use cancel::CancelToken;
pub use codec::decode_event;
pub use error::WidgetError;
pub use operations::{accept_push, load_backlog, mark_read, render_if_new, TOAST_TIMEOUT_MS};
pub use store::DisplayedSet;
pub use types::{Notification, NotificationId};
