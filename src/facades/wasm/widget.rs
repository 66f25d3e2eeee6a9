use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::adapters::wasm::api::{BACKLOG_URL, READ_URL_BASE};
use crate::adapters::wasm::stream::STREAM_URL;
use crate::adapters::wasm::view::{LIST_CONTAINER_ID, TOAST_CONTAINER_ID};
use crate::adapters::wasm::{DomView, EventSourceStream, FetchApi, WindowTimer};
use crate::domain::notification::{
    operations, CancelToken, DisplayedSet, Notification, NotificationId,
};
use crate::domain::notification::WidgetError;
use crate::domain::stream::{ReconnectPolicy, StreamClient};
use crate::platform::Platform;
use crate::ports::{LoggerPort, ViewPort};

use super::converters;

/// Container element ids and endpoint paths, with the deployment defaults.
pub struct WidgetConfig {
    pub list_container_id: String,
    pub toast_container_id: String,
    pub backlog_url: String,
    pub read_url_base: String,
    pub stream_url: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            list_container_id: LIST_CONTAINER_ID.to_string(),
            toast_container_id: TOAST_CONTAINER_ID.to_string(),
            backlog_url: BACKLOG_URL.to_string(),
            read_url_base: READ_URL_BASE.to_string(),
            stream_url: STREAM_URL.to_string(),
        }
    }
}

/// The in-app notification widget.
///
/// Owns the displayed-id store and the stream client for one mount of the
/// UI; `unmount` is the teardown disposer.
#[wasm_bindgen]
pub struct NotificationWidget {
    platform: Platform,
    store: Rc<RefCell<DisplayedSet>>,
    stream: Rc<StreamClient>,
    tasks: Rc<RefCell<CancelToken>>,
}

impl NotificationWidget {
    /// Builds the widget against an already-rendered page: both containers
    /// must exist before this runs.
    pub fn with_config(config: WidgetConfig) -> Result<Self, WidgetError> {
        let view = Rc::new(DomView::new(
            &config.list_container_id,
            &config.toast_container_id,
        )?);
        let api = Rc::new(FetchApi::new(config.backlog_url, config.read_url_base));
        let timer = Rc::new(WindowTimer::new());
        let stream_port = Rc::new(EventSourceStream::new(config.stream_url));
        let platform = Platform::new(api, view.clone(), timer, stream_port);
        let store = Rc::new(RefCell::new(DisplayedSet::new()));
        let tasks = Rc::new(RefCell::new(CancelToken::new()));

        // Every acknowledge click, list control or toast body, runs the
        // same mark-read path, under the token current at click time.
        {
            let platform = platform.clone();
            let store = Rc::clone(&store);
            let tasks = Rc::clone(&tasks);
            view.set_ack_handler(Rc::new(move |id: NotificationId| {
                let platform = platform.clone();
                let store = Rc::clone(&store);
                let token = tasks.borrow().clone();
                spawn_local(async move {
                    if let Err(e) = operations::mark_read(&platform, &store, &id, &token).await {
                        platform
                            .logger()
                            .error(&format!("mark read failed for {id}: {e}"));
                    }
                });
            }));
        }

        let on_event: Rc<dyn Fn(Notification)> = {
            let platform = platform.clone();
            let store = Rc::clone(&store);
            Rc::new(move |notification: Notification| {
                if let Err(e) = operations::accept_push(&platform, &store, &notification) {
                    platform
                        .logger()
                        .error(&format!("failed to display pushed notification: {e}"));
                }
            })
        };
        let stream = StreamClient::new(platform.clone(), ReconnectPolicy::default(), on_event);

        Ok(Self {
            platform,
            store,
            stream,
            tasks,
        })
    }
}

#[wasm_bindgen]
impl NotificationWidget {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<NotificationWidget, JsValue> {
        Self::with_config(WidgetConfig::default()).map_err(converters::to_js_error)
    }

    /// Loads the backlog and opens the event stream. The two run
    /// independently; both go through the same dedup check, so completion
    /// order does not matter.
    pub fn mount(&self) -> Result<(), JsValue> {
        *self.tasks.borrow_mut() = CancelToken::new();
        let token = self.tasks.borrow().clone();

        let platform = self.platform.clone();
        let store = Rc::clone(&self.store);
        spawn_local(async move {
            match operations::load_backlog(&platform, &store, &token).await {
                Ok(added) => platform
                    .logger()
                    .log(&format!("backlog loaded, {added} notifications rendered")),
                Err(e) => platform.logger().error(&format!("backlog load failed: {e}")),
            }
        });

        self.stream.connect().map_err(converters::to_js_error)
    }

    /// Tears the widget down: closes the stream, cancelling any pending
    /// reconnect, cancels in-flight request tasks and forgets the displayed
    /// ids.
    pub fn unmount(&self) {
        self.stream.close();
        self.tasks.borrow().cancel();
        self.store.borrow_mut().clear();
    }
}
