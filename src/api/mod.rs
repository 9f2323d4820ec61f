//! Request mediator - the single gateway to the scripting endpoint.
//!
//! Every UI action becomes one POST of a JSON envelope to one fixed URL.
//! The reply is normalized by [`response`] (following the endpoint's HTML
//! redirect page when one is interposed) and always comes back as an
//! [`ApiResponse`]: the mediator never returns an error to its caller, it
//! folds transport and parse failures into the uniform failure shape.
//!
//! No retry, no caching, no client-side timeout - the endpoint is the sole
//! arbiter of conflicting writes and the UI re-triggers failed actions.

/// Envelope building for the three backend sheets
pub mod envelope;
/// Order operations
pub mod orders;
/// Product operations
pub mod products;
/// Response normalization
pub mod response;
/// Authentication operations
pub mod users;

use crate::config::AppConfig;
use response::Reply;
use serde::Serialize;
use tracing::{debug, warn};

pub use response::{ApiResponse, GENERIC_FAILURE};
pub use users::AuthGrant;

/// Client for the spreadsheet-backed scripting endpoint.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the given endpoint URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a client from the loaded application configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.endpoint_url.clone())
    }

    /// The endpoint URL this client talks to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one envelope and normalizes the reply.
    ///
    /// This call is infallible by design: network failures, non-JSON bodies,
    /// and malformed redirect pages all come back as a failure
    /// [`ApiResponse`] whose message the caller can present directly.
    pub async fn call(&self, payload: &impl Serialize) -> ApiResponse {
        match self.dispatch(payload).await {
            Ok(response) => response,
            Err(message) => {
                warn!("API call failed: {message}");
                ApiResponse::failure(message)
            }
        }
    }

    /// The fallible inner path; every error is a display-ready message.
    async fn dispatch(&self, payload: &impl Serialize) -> Result<ApiResponse, String> {
        let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;

        // The endpoint expects the JSON envelope as a plain-text body
        let text = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .text()
            .await
            .map_err(|e| e.to_string())?;

        match response::classify_body(&text) {
            Reply::Json(parsed) => Ok(parsed),
            Reply::Redirect(url) => {
                debug!("Following endpoint redirect page.");
                let redirected = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| e.to_string())?
                    .text()
                    .await
                    .map_err(|e| e.to_string())?;
                serde_json::from_str(&redirected)
                    .map_err(|e| format!("unexpected response after redirect: {e}"))
            }
            Reply::Malformed(message) => Err(message),
        }
    }
}
