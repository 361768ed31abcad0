//! Error type shared by the page installers.

/// Error returned by installers and storage backends.
///
/// Missing markup is not an error; installers skip behaviors whose elements
/// are absent. These variants cover the environment itself misbehaving.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// A DOM call threw; the payload is the stringified JS value.
    #[error("DOM call failed: {0}")]
    Js(String),
    /// The persistence backend refused a read or write.
    #[error("storage unavailable: {0}")]
    Storage(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Best-effort human description of a thrown JS value.
#[cfg(feature = "browser")]
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
