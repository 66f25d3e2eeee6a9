use crate::domain::notification::WidgetError;
use wasm_bindgen::JsValue;

pub(crate) fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub(crate) fn dom_error(err: JsValue) -> WidgetError {
    WidgetError::dom(describe(err))
}

pub(crate) fn transport_error(err: JsValue) -> WidgetError {
    WidgetError::transport(describe(err))
}
