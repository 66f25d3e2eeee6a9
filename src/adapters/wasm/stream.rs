use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventSource, EventSourceInit, MessageEvent};

use crate::adapters::logger;
use crate::domain::notification::{codec, WidgetError};
use crate::ports::{LoggerPort, StreamCallbacks, StreamHandle, StreamPort};

use super::error_conversions::transport_error;

pub const STREAM_URL: &str = "/api/notifications/stream";

/// SSE connector over `web_sys::EventSource`, credentials included.
///
/// EventSource has its own retry built in; the client closes the source on
/// error and drives reconnection itself, so that retry never runs.
pub struct EventSourceStream {
    url: String,
}

impl EventSourceStream {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for EventSourceStream {
    fn default() -> Self {
        Self::new(STREAM_URL)
    }
}

struct EventSourceHandle {
    source: EventSource,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onerror: Closure<dyn FnMut(Event)>,
}

impl StreamHandle for EventSourceHandle {
    fn close(&self) {
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
        self.source.close();
    }
}

impl StreamPort for EventSourceStream {
    fn connect(&self, callbacks: StreamCallbacks) -> Result<Box<dyn StreamHandle>, WidgetError> {
        let init = EventSourceInit::new();
        init.set_with_credentials(true);
        let source = EventSource::new_with_event_source_init_dict(&self.url, &init)
            .map_err(transport_error)?;

        let on_event = callbacks.on_event;
        let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
            match event.data().as_string() {
                Some(payload) => match codec::decode_event(&payload) {
                    Ok(notification) => on_event(notification),
                    // A bad payload drops only the message that carried it.
                    Err(e) => logger().error(&format!("dropping stream message: {e}")),
                },
                None => logger().error("dropping non-text stream message"),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        source.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let on_error = callbacks.on_error;
        let onerror = Closure::wrap(Box::new(move |event: Event| {
            on_error(format!("event source error: {:?}", event.type_()));
        }) as Box<dyn FnMut(Event)>);
        source.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        Ok(Box::new(EventSourceHandle {
            source,
            _onmessage: onmessage,
            _onerror: onerror,
        }))
    }
}
