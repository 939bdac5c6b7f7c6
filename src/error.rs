// Error type for start-up wiring. Drawing and simulation never fail.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas `{0}` has no 2d context")]
    NoContext(String),
    #[error("`{0}` is not a {1}")]
    WrongType(String, &'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(SiteError::NoBody.to_string(), "document has no body");
        assert_eq!(
            SiteError::NoContext("particles-canvas".to_owned()).to_string(),
            "canvas `particles-canvas` has no 2d context"
        );
    }
}
