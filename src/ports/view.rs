use crate::domain::notification::{Notification, NotificationId, WidgetError};
use std::rc::Rc;

/// Port for the rendering surface.
///
/// One entry per notification id lives in the persistent list, one toast per
/// push in the transient container. Removals are idempotent: asking to
/// remove a node that is not rendered is a no-op, so the mark-read path and
/// the toast timeout can race without coordination.
pub trait ViewPort {
    /// Appends a list entry displaying the notification.
    fn append_entry(&self, notification: &Notification) -> Result<(), WidgetError>;

    /// Removes the list entry for `id`, if rendered.
    fn remove_entry(&self, id: &NotificationId) -> Result<(), WidgetError>;

    /// Shows a transient toast for the notification.
    fn show_toast(&self, notification: &Notification) -> Result<(), WidgetError>;

    /// Removes the toast for `id`, if still visible.
    fn remove_toast(&self, id: &NotificationId) -> Result<(), WidgetError>;

    /// Registers the handler invoked when the user acknowledges a
    /// notification, from the list control or the toast body alike.
    fn set_ack_handler(&self, handler: Rc<dyn Fn(NotificationId)>);
}
