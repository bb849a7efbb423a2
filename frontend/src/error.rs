use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("region is not mounted")]
    Detached,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        HostError::Js(message)
    }
}
