use crate::domain::notification::{Notification, WidgetError};
use crate::ports::{StreamCallbacks, StreamHandle, StreamPort};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One connection the double has handed out; tests drive its callbacks.
pub struct Connection {
    callbacks: StreamCallbacks,
    closed: Cell<bool>,
}

impl Connection {
    /// Delivers a decoded notification, as a stream message would.
    pub fn push(&self, notification: Notification) {
        (self.callbacks.on_event)(notification);
    }

    /// Reports a transport failure.
    pub fn fail(&self, detail: &str) {
        (self.callbacks.on_error)(detail.to_string());
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

struct ScriptedHandle {
    connection: Rc<Connection>,
}

impl StreamHandle for ScriptedHandle {
    fn close(&self) {
        self.connection.closed.set(true);
    }
}

/// Stream double recording every connection.
#[derive(Default)]
pub struct ScriptedStream {
    connections: RefCell<Vec<Rc<Connection>>>,
    connect_error: RefCell<Option<WidgetError>>,
}

impl ScriptedStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent connect attempts fail with `error`.
    pub fn fail_connect(&self, error: WidgetError) {
        *self.connect_error.borrow_mut() = Some(error);
    }

    pub fn clear_connect_failure(&self) {
        *self.connect_error.borrow_mut() = None;
    }

    pub fn connect_count(&self) -> usize {
        self.connections.borrow().len()
    }

    pub fn last_connection(&self) -> Option<Rc<Connection>> {
        self.connections.borrow().last().cloned()
    }
}

impl StreamPort for ScriptedStream {
    fn connect(&self, callbacks: StreamCallbacks) -> Result<Box<dyn StreamHandle>, WidgetError> {
        if let Some(error) = self.connect_error.borrow().clone() {
            return Err(error);
        }

        let connection = Rc::new(Connection {
            callbacks,
            closed: Cell::new(false),
        });
        self.connections.borrow_mut().push(Rc::clone(&connection));
        Ok(Box::new(ScriptedHandle { connection }))
    }
}
