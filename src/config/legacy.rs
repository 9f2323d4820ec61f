//! Legacy seller-id mapping loaded from config.toml
//!
//! Early sheet rows stored a generated UUID in the owner column; the backend
//! has since switched to using the seller's email directly. Until those rows
//! are migrated, ownership checks consult this table to recognize a seller's
//! pre-migration listings. The table is migration data, not a feature: it is
//! empty by default and should shrink to nothing over time.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
struct Config {
    /// Pre-migration owner ids keyed by seller email
    #[serde(default)]
    legacy_sellers: Vec<LegacySellerEntry>,
}

/// One pre-migration seller row
#[derive(Debug, Deserialize, Clone)]
struct LegacySellerEntry {
    /// The seller's login email
    email: String,
    /// The UUID that older sheet rows carry in their owner column
    legacy_id: String,
}

/// Lookup table from seller email to pre-migration owner id.
#[derive(Clone, Debug, Default)]
pub struct LegacySellerMap {
    by_email: HashMap<String, String>,
}

impl LegacySellerMap {
    /// Builds a map from `(email, legacy_id)` pairs. Mostly useful in tests;
    /// production code loads the map from `config.toml`.
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            by_email: pairs
                .into_iter()
                .map(|(email, id)| (email.into(), id.into()))
                .collect(),
        }
    }

    /// The pre-migration owner id recorded for `email`, if any.
    #[must_use]
    pub fn legacy_id_for(&self, email: &str) -> Option<&str> {
        self.by_email.get(email).map(String::as_str)
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }

    /// Number of sellers still carrying a legacy id.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_email.len()
    }
}

/// Loads the legacy seller table from a TOML file.
///
/// A missing file is not an error - the table is optional and empty by
/// default. A file that exists but does not parse is an error.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LegacySellerMap> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(LegacySellerMap::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: Config = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    Ok(LegacySellerMap::from_pairs(
        config
            .legacy_sellers
            .into_iter()
            .map(|entry| (entry.email, entry.legacy_id)),
    ))
}

/// Loads the legacy seller table from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<LegacySellerMap> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_legacy_seller_config() {
        let toml_str = r#"
            [[legacy_sellers]]
            email = "budi@kampus.ac.id"
            legacy_id = "287799bf-9621-4ef9-ad24-3f8e77cf1461"

            [[legacy_sellers]]
            email = "sari@kampus.ac.id"
            legacy_id = "7c1de2aa-0b4f-4d6e-9a31-5e2f8c90d210"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.legacy_sellers.len(), 2);
        assert_eq!(config.legacy_sellers[0].email, "budi@kampus.ac.id");

        let map = LegacySellerMap::from_pairs(
            config
                .legacy_sellers
                .into_iter()
                .map(|e| (e.email, e.legacy_id)),
        );
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.legacy_id_for("budi@kampus.ac.id"),
            Some("287799bf-9621-4ef9-ad24-3f8e77cf1461")
        );
        assert_eq!(map.legacy_id_for("unknown@kampus.ac.id"), None);
    }

    #[test]
    fn test_empty_document_parses_to_empty_table() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.legacy_sellers.is_empty());
    }

    #[test]
    fn test_missing_file_is_empty_table() {
        let map = load_config("definitely/not/a/real/config.toml").unwrap();
        assert!(map.is_empty());
    }
}
