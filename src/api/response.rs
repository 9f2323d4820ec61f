//! Response normalization.
//!
//! The endpoint answers with a JSON body on a good day. On others it
//! interposes a small HTML page whose `HREF` attribute points at the real
//! response, which must then be fetched with a GET. Both shapes, plus every
//! failure mode, normalize into the one [`ApiResponse`] struct here.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback message when a failure carries no text of its own.
pub const GENERIC_FAILURE: &str = "terjadi kesalahan";

/// The endpoint's uniform reply shape.
///
/// `success` is the only field always present; everything else depends on
/// the action that was called.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the backend accepted the call
    #[serde(default)]
    pub success: bool,
    /// Row data for reads, a profile object for auth calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Backend-provided failure text, shown to the user verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Suggested landing route after a successful auth call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Id of a freshly created product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Id of a freshly created order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Informational text on some successful writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Status actually stored by an order update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_status: Option<String>,
}

impl ApiResponse {
    /// A failure result carrying a human-readable message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// The failure text to show the user, with the generic fallback when the
    /// backend sent none.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.error
            .as_deref()
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or(GENERIC_FAILURE)
    }

    /// Converts the uniform shape into a crate result for the typed
    /// operation wrappers.
    ///
    /// # Errors
    /// Returns [`Error::Backend`] carrying [`Self::error_message`] when the
    /// backend reported failure.
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::Backend {
                message: self.error_message().to_string(),
            })
        }
    }
}

/// What a response body turned out to contain.
#[derive(Debug, PartialEq)]
pub(crate) enum Reply {
    /// A direct JSON reply, returned unchanged
    Json(ApiResponse),
    /// An HTML page pointing at the real response
    Redirect(String),
    /// Neither JSON nor a usable redirect page
    Malformed(String),
}

/// Classifies a raw response body without performing any I/O.
pub(crate) fn classify_body(text: &str) -> Reply {
    if text.contains("<HTML>") || text.contains("<html>") {
        return match extract_redirect_href(text) {
            Some(url) => Reply::Redirect(url),
            None => Reply::Malformed("HTML response without a redirect target".to_string()),
        };
    }
    match serde_json::from_str(text) {
        Ok(parsed) => Reply::Json(parsed),
        Err(e) => Reply::Malformed(format!("unexpected response from server: {e}")),
    }
}

/// Pulls the redirect target out of the interposed HTML page.
///
/// The page quotes its target in an `HREF="..."` attribute with `&`
/// HTML-escaped as `&amp;`; the returned URL is entity-decoded and ready to
/// fetch.
pub(crate) fn extract_redirect_href(html: &str) -> Option<String> {
    let start = html
        .find("HREF=\"")
        .or_else(|| html.find("href=\""))
        .map(|i| i + 6)?;
    let rest = &html[start..];
    let end = rest.find('"')?;
    let url = rest[..end].replace("&amp;", "&");
    if url.is_empty() { None } else { Some(url) }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_json_is_returned_unchanged() {
        let body = r#"{"success":true,"data":[["p-1","a@x.com"]],"product_id":"p-1"}"#;
        let Reply::Json(resp) = classify_body(body) else {
            panic!("expected a JSON reply");
        };
        assert!(resp.success);
        assert_eq!(resp.data, Some(json!([["p-1", "a@x.com"]])));
        assert_eq!(resp.product_id.as_deref(), Some("p-1"));
        assert_eq!(resp.error, None);
    }

    #[test]
    fn test_backend_failure_parses_as_json() {
        let body = r#"{"success":false,"error":"Email already exists"}"#;
        let Reply::Json(resp) = classify_body(body) else {
            panic!("expected a JSON reply");
        };
        assert!(!resp.success);
        assert_eq!(resp.error_message(), "Email already exists");
    }

    #[test]
    fn test_html_body_classifies_as_redirect() {
        let body = r#"<HTML><HEAD><TITLE>Moved Temporarily</TITLE></HEAD>
<BODY><A HREF="https://script.googleusercontent.com/echo?user_content_key=abc&amp;lib=def">here</A></BODY></HTML>"#;
        assert_eq!(
            classify_body(body),
            Reply::Redirect(
                "https://script.googleusercontent.com/echo?user_content_key=abc&lib=def".to_string()
            )
        );
    }

    #[test]
    fn test_lowercase_html_redirect_is_recognized() {
        let body = r#"<html><body><a href="https://example.org/real?a=1&amp;b=2">moved</a></body></html>"#;
        assert_eq!(
            classify_body(body),
            Reply::Redirect("https://example.org/real?a=1&b=2".to_string())
        );
    }

    #[test]
    fn test_html_without_href_is_malformed() {
        let Reply::Malformed(msg) = classify_body("<HTML><BODY>nothing here</BODY></HTML>") else {
            panic!("expected malformed");
        };
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let Reply::Malformed(msg) = classify_body("Internal error, please retry") else {
            panic!("expected malformed");
        };
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_error_message_falls_back_to_generic_text() {
        assert_eq!(ApiResponse::default().error_message(), GENERIC_FAILURE);
        assert_eq!(ApiResponse::failure("  ").error_message(), GENERIC_FAILURE);
        assert_eq!(ApiResponse::failure("Access denied").error_message(), "Access denied");
    }

    #[test]
    fn test_into_result_maps_failure_to_backend_error() {
        let err = ApiResponse::failure("Order not found").into_result().unwrap_err();
        assert_eq!(err.to_string(), "Order not found");

        let ok = ApiResponse {
            success: true,
            ..ApiResponse::default()
        };
        assert!(ok.into_result().is_ok());
    }
}
