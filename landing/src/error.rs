//! Failures the page can run into while talking to the browser.
//!
//! None of these are fatal: callers log them and carry on.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("document has no <body>")]
    NoBody,

    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// Best-effort text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl SiteError {
    pub fn dom(value: JsValue) -> Self {
        SiteError::Dom(js_message(&value))
    }

    pub fn clipboard(value: JsValue) -> Self {
        SiteError::ClipboardRejected(js_message(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(SiteError::NoBody.to_string(), "document has no <body>");
        assert_eq!(
            SiteError::ClipboardRejected("NotAllowedError".into()).to_string(),
            "clipboard write rejected: NotAllowedError"
        );
    }
}
