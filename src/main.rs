//! Smoke binary: wires configuration and the API client together and runs a
//! read against the live endpoint, logging what it finds. Useful for
//! checking a deployment without opening the UI.

use dotenvy::dotenv;
use pasarku::api::ApiClient;
use pasarku::config;
use pasarku::core::catalog;
use pasarku::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load application configuration: {e}"))?;
    info!(endpoint = %app_config.endpoint_url, "Configuration loaded.");

    // 4. Hit the endpoint with a read and summarize what came back.
    // Reads are not authorized per-user, so any syntactically valid email works.
    let client = ApiClient::from_config(&app_config);
    let email = std::env::var("PASARKU_SMOKE_EMAIL")
        .unwrap_or_else(|_| "smoke@pasarku.local".to_string());

    let products = client
        .list_products(&email)
        .await
        .inspect_err(|e| error!("Product read failed: {e}"))?;
    let categories = catalog::categories(&products);
    info!(
        products = products.len(),
        purchasable = products.iter().filter(|p| p.is_purchasable()).count(),
        ?categories,
        "Product sheet is reachable."
    );

    let orders = client
        .list_orders(&email)
        .await
        .inspect_err(|e| error!("Order read failed: {e}"))?;
    info!(orders = orders.len(), "Order sheet is reachable.");

    Ok(())
}
