use crate::domain::notification::{Notification, NotificationId, WidgetError};
use crate::ports::ApiPort;
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use super::error_conversions::transport_error;

pub const BACKLOG_URL: &str = "/api/notifications/inapp";
pub const READ_URL_BASE: &str = "/api/notifications";

/// `fetch`-backed API client. Requests carry session credentials; nothing
/// here enforces a timeout, a hung request stalls only its own operation.
pub struct FetchApi {
    backlog_url: String,
    read_url_base: String,
}

impl FetchApi {
    pub fn new(backlog_url: impl Into<String>, read_url_base: impl Into<String>) -> Self {
        Self {
            backlog_url: backlog_url.into(),
            read_url_base: read_url_base.into(),
        }
    }

    fn read_url(&self, id: &NotificationId) -> String {
        format!("{}/{}/read", self.read_url_base, id)
    }

    async fn send(&self, url: &str, method: &str) -> Result<Response, WidgetError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_credentials(RequestCredentials::Include);

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport_error)?;
        let window = super::window()?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_error)?;
        response.dyn_into::<Response>().map_err(|_| {
            WidgetError::transport("fetch resolved to something that is not a Response")
        })
    }
}

impl Default for FetchApi {
    fn default() -> Self {
        Self::new(BACKLOG_URL, READ_URL_BASE)
    }
}

#[async_trait(?Send)]
impl ApiPort for FetchApi {
    async fn fetch_backlog(&self) -> Result<Vec<Notification>, WidgetError> {
        let response = self.send(&self.backlog_url, "GET").await?;
        let json = JsFuture::from(response.json().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;
        serde_wasm_bindgen::from_value(json)
            .map_err(|e| WidgetError::decode(format!("invalid backlog payload: {e}")))
    }

    async fn mark_read(&self, id: &NotificationId) -> Result<(), WidgetError> {
        // Response status and body are not inspected.
        self.send(&self.read_url(id), "POST").await?;
        Ok(())
    }
}
