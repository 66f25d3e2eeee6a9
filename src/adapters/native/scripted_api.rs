use crate::domain::notification::{Notification, NotificationId, WidgetError};
use crate::ports::ApiPort;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};

/// API double returning canned results and recording every call.
#[derive(Default)]
pub struct ScriptedApi {
    backlog: RefCell<Vec<Notification>>,
    backlog_error: RefCell<Option<WidgetError>>,
    mark_read_error: RefCell<Option<WidgetError>>,
    backlog_calls: Cell<usize>,
    read_calls: RefCell<Vec<NotificationId>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backlog(backlog: Vec<Notification>) -> Self {
        let api = Self::default();
        *api.backlog.borrow_mut() = backlog;
        api
    }

    pub fn fail_backlog(&self, error: WidgetError) {
        *self.backlog_error.borrow_mut() = Some(error);
    }

    pub fn fail_mark_read(&self, error: WidgetError) {
        *self.mark_read_error.borrow_mut() = Some(error);
    }

    pub fn backlog_calls(&self) -> usize {
        self.backlog_calls.get()
    }

    pub fn read_calls(&self) -> Vec<NotificationId> {
        self.read_calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ApiPort for ScriptedApi {
    async fn fetch_backlog(&self) -> Result<Vec<Notification>, WidgetError> {
        self.backlog_calls.set(self.backlog_calls.get() + 1);
        if let Some(error) = self.backlog_error.borrow().clone() {
            return Err(error);
        }
        Ok(self.backlog.borrow().clone())
    }

    async fn mark_read(&self, id: &NotificationId) -> Result<(), WidgetError> {
        self.read_calls.borrow_mut().push(id.clone());
        if let Some(error) = self.mark_read_error.borrow().clone() {
            return Err(error);
        }
        Ok(())
    }
}
