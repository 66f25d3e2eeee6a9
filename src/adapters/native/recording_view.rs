use crate::domain::notification::{Notification, NotificationId, WidgetError};
use crate::ports::ViewPort;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    EntryAppended(NotificationId),
    EntryRemoved(NotificationId),
    ToastShown(NotificationId),
    ToastRemoved(NotificationId),
}

/// View double recording every rendering call.
///
/// Removal events are recorded only when something actually left, mirroring
/// a node leaving the document; tests can dispatch acknowledge clicks
/// through the registered handler.
#[derive(Default)]
pub struct RecordingView {
    entries: RefCell<Vec<NotificationId>>,
    toasts: RefCell<Vec<NotificationId>>,
    events: RefCell<Vec<ViewEvent>>,
    ack: RefCell<Option<Rc<dyn Fn(NotificationId)>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<NotificationId> {
        self.entries.borrow().clone()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn has_entry(&self, id: &NotificationId) -> bool {
        self.entries.borrow().iter().any(|e| e == id)
    }

    pub fn entry_count(&self, id: &NotificationId) -> usize {
        self.entries.borrow().iter().filter(|e| *e == id).count()
    }

    pub fn has_toast(&self, id: &NotificationId) -> bool {
        self.toasts.borrow().iter().any(|t| t == id)
    }

    /// Toasts for `id` currently visible.
    pub fn toast_count(&self, id: &NotificationId) -> usize {
        self.toasts.borrow().iter().filter(|t| *t == id).count()
    }

    /// Toasts for `id` ever shown.
    pub fn toasts_shown(&self, id: &NotificationId) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ViewEvent::ToastShown(shown) if shown == id))
            .count()
    }

    /// Simulates a user click on the acknowledge control or toast for `id`.
    pub fn click_ack(&self, id: &NotificationId) {
        let handler = self.ack.borrow().clone();
        if let Some(handler) = handler {
            handler(id.clone());
        }
    }
}

impl ViewPort for RecordingView {
    fn append_entry(&self, notification: &Notification) -> Result<(), WidgetError> {
        // A node rendered again for the same id displaces the previous one,
        // as the DOM view does.
        let mut entries = self.entries.borrow_mut();
        entries.retain(|e| e != &notification.id);
        entries.push(notification.id.clone());
        self.events
            .borrow_mut()
            .push(ViewEvent::EntryAppended(notification.id.clone()));
        Ok(())
    }

    fn remove_entry(&self, id: &NotificationId) -> Result<(), WidgetError> {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|e| e != id);
        if entries.len() < before {
            self.events
                .borrow_mut()
                .push(ViewEvent::EntryRemoved(id.clone()));
        }
        Ok(())
    }

    fn show_toast(&self, notification: &Notification) -> Result<(), WidgetError> {
        let mut toasts = self.toasts.borrow_mut();
        toasts.retain(|t| t != &notification.id);
        toasts.push(notification.id.clone());
        self.events
            .borrow_mut()
            .push(ViewEvent::ToastShown(notification.id.clone()));
        Ok(())
    }

    fn remove_toast(&self, id: &NotificationId) -> Result<(), WidgetError> {
        let mut toasts = self.toasts.borrow_mut();
        let before = toasts.len();
        toasts.retain(|t| t != id);
        if toasts.len() < before {
            self.events
                .borrow_mut()
                .push(ViewEvent::ToastRemoved(id.clone()));
        }
        Ok(())
    }

    fn set_ack_handler(&self, handler: Rc<dyn Fn(NotificationId)>) {
        *self.ack.borrow_mut() = Some(handler);
    }
}
