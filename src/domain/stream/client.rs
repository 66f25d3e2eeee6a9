use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::notification::{Notification, WidgetError};
use crate::platform::Platform;
use crate::ports::{LoggerPort, StreamCallbacks, StreamHandle, StreamPort, TimerId, TimerPort};

use super::policy::{ReconnectPolicy, StreamState};

/// The reconnecting push-stream client.
///
/// Holds at most one live connection. On a stream error the handle is
/// closed and one reconnect is scheduled after the policy delay; errors
/// while a reconnect is already pending schedule nothing further, so
/// connections never overlap. Retries are unbounded.
pub struct StreamClient {
    platform: Platform,
    policy: ReconnectPolicy,
    on_event: Rc<dyn Fn(Notification)>,
    state: Cell<StreamState>,
    handle: RefCell<Option<Box<dyn StreamHandle>>>,
    reconnect: Cell<Option<TimerId>>,
}

impl StreamClient {
    pub fn new(
        platform: Platform,
        policy: ReconnectPolicy,
        on_event: Rc<dyn Fn(Notification)>,
    ) -> Rc<Self> {
        Rc::new(Self {
            platform,
            policy,
            on_event,
            state: Cell::new(StreamState::Disconnected),
            handle: RefCell::new(None),
            reconnect: Cell::new(None),
        })
    }

    pub fn state(&self) -> StreamState {
        self.state.get()
    }

    /// Opens the stream. A no-op while already connected.
    ///
    /// Scheduled callbacks hold a weak reference, so a dropped client stops
    /// reconnecting instead of keeping itself alive.
    pub fn connect(self: &Rc<Self>) -> Result<(), WidgetError> {
        if self.state.get() == StreamState::Connected {
            return Ok(());
        }

        let on_event = {
            let forward = Rc::clone(&self.on_event);
            Box::new(move |notification: Notification| forward(notification))
                as Box<dyn Fn(Notification)>
        };
        let on_error = {
            let client = Rc::downgrade(self);
            Box::new(move |detail: String| {
                if let Some(client) = client.upgrade() {
                    client.on_stream_error(&detail);
                }
            }) as Box<dyn Fn(String)>
        };

        let handle = self
            .platform
            .stream()
            .connect(StreamCallbacks { on_event, on_error })?;

        *self.handle.borrow_mut() = Some(handle);
        self.state.set(StreamState::Connected);
        Ok(())
    }

    /// Teardown: cancels a pending reconnect and closes the connection.
    pub fn close(&self) {
        if let Some(id) = self.reconnect.take() {
            self.platform.timer().clear_timeout(id);
        }
        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.close();
        }
        self.state.set(StreamState::Disconnected);
    }

    fn on_stream_error(self: &Rc<Self>, detail: &str) {
        self.platform
            .logger()
            .error(&format!("notification stream error: {detail}"));

        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.close();
        }
        self.state.set(StreamState::Disconnected);
        self.schedule_reconnect();
    }

    fn schedule_reconnect(self: &Rc<Self>) {
        // One pending attempt at a time.
        if self.reconnect.get().is_some() {
            return;
        }

        let client = Rc::downgrade(self);
        let scheduled = self.platform.timer().set_timeout(
            Box::new(move || {
                if let Some(client) = client.upgrade() {
                    client.reconnect.set(None);
                    if let Err(e) = client.connect() {
                        client.on_stream_error(&format!("reconnect failed: {e}"));
                    }
                }
            }),
            self.policy.delay_ms(),
        );

        match scheduled {
            Ok(id) => self.reconnect.set(Some(id)),
            Err(e) => self
                .platform
                .logger()
                .error(&format!("failed to schedule reconnect: {e}")),
        }
    }
}
