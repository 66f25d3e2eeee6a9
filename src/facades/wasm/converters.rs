use wasm_bindgen::JsValue;

pub(crate) fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
