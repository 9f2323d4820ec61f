//! Configuration management for the marketplace client.

/// Endpoint URL loading from environment variables
pub mod endpoint;

/// Legacy seller-id mapping loaded from config.toml
pub mod legacy;

use crate::errors::Result;
use legacy::LegacySellerMap;
use tracing::info;

/// Everything the application needs to construct a client and derive views.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// URL of the remote scripting endpoint
    pub endpoint_url: String,
    /// Pre-migration seller-id lookups, usually empty
    pub legacy_sellers: LegacySellerMap,
}

/// Loads the full application configuration.
///
/// The endpoint URL is required; the legacy seller table is optional and
/// defaults to empty when `config.toml` is absent.
///
/// # Errors
/// Returns an error if the endpoint URL variable is unset or `config.toml`
/// exists but cannot be parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let endpoint_url = endpoint::endpoint_url()?;
    let legacy_sellers = legacy::load_default_config()?;
    if !legacy_sellers.is_empty() {
        info!(
            entries = legacy_sellers.len(),
            "Loaded legacy seller mapping; migrate these rows and delete the table."
        );
    }
    Ok(AppConfig {
        endpoint_url,
        legacy_sellers,
    })
}
