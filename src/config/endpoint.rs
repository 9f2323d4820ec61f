//! Endpoint configuration.
//!
//! The remote scripting endpoint is a single deployment-specific URL, so it
//! comes from the environment (usually via `.env`) rather than being baked
//! into the binary. There is no sensible default.

use crate::errors::{Error, Result};

/// Environment variable holding the scripting endpoint URL.
pub const API_URL_ENV: &str = "PASARKU_API_URL";

/// Reads the endpoint URL from `PASARKU_API_URL`.
///
/// # Errors
/// Returns an error if the variable is unset or the value is blank.
pub fn endpoint_url() -> Result<String> {
    let url = std::env::var(API_URL_ENV)?;
    if url.trim().is_empty() {
        return Err(Error::Config {
            message: format!("{API_URL_ENV} is set but empty"),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_depends_on_environment() {
        // The variable may or may not be set in the test environment; either
        // way the call must not panic.
        match endpoint_url() {
            Ok(url) => assert!(!url.trim().is_empty()),
            Err(e) => assert!(matches!(e, Error::EnvVar(_) | Error::Config { .. })),
        }
    }
}
