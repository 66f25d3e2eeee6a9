use crate::domain::notification::{Notification, NotificationId, WidgetError};
use async_trait::async_trait;

/// Port for the notification backend HTTP endpoints.
#[async_trait(?Send)]
pub trait ApiPort {
    /// Retrieves the current backlog of undelivered notifications.
    async fn fetch_backlog(&self) -> Result<Vec<Notification>, WidgetError>;

    /// Marks one notification read server-side.
    async fn mark_read(&self, id: &NotificationId) -> Result<(), WidgetError>;
}
