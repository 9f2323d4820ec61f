//! Product entity - One listing in the Products sheet.
//!
//! Sheet columns, in order: `product_id`, `user_id` (owner email),
//! `product_name`, `image_url`, `description`, `price`, `stock`, `category`,
//! `status`, `created_at`, `updated_at`. A product is purchasable when it is
//! active (`status == 1`) and has stock left.

use crate::entities::row;
use crate::errors::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

/// Status value marking a listing as active.
pub const STATUS_ACTIVE: i64 = 1;

/// One product listing, decoded from a positional sheet row.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// Unique identifier assigned by the backend
    pub product_id: String,
    /// Email of the seller who owns this listing
    pub owner: String,
    /// Listing name; empty when the sheet cell is blank
    pub name: String,
    /// Hosted image URL, if an image was uploaded
    pub image_url: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Unit price in rupiah
    pub price: f64,
    /// Units in stock
    pub stock: i64,
    /// Category label used by the catalog filter
    pub category: String,
    /// 1 = active, 0 = hidden
    pub status: i64,
    /// When the listing was created
    pub created_at: DateTime<Utc>,
    /// When the listing was last modified
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Decodes a single positional row.
    ///
    /// The id and owner columns are required; every other column decodes
    /// leniently so a half-filled row still lists (it simply fails text
    /// matches instead of erroring).
    pub fn from_row(cells: &[Value]) -> Result<Self> {
        Ok(Self {
            product_id: row::required_str(cells, 0, "product_id")?,
            owner: row::required_str(cells, 1, "user_id")?,
            name: row::str_or_default(cells, 2),
            image_url: row::opt_str(cells, 3),
            description: row::opt_str(cells, 4),
            price: row::f64_or_default(cells, 5),
            stock: row::i64_or(cells, 6, 0),
            category: row::str_or_default(cells, 7),
            status: row::i64_or(cells, 8, 0),
            created_at: row::timestamp_or_epoch(cells, 9),
            updated_at: row::timestamp_or_epoch(cells, 10),
        })
    }

    /// Decodes the `data` payload of a read response (an array of rows).
    ///
    /// Rows that fail to decode are skipped with a warning rather than
    /// aborting the whole listing.
    #[must_use]
    pub fn from_rows(data: &Value) -> Vec<Self> {
        let Some(rows) = data.as_array() else {
            return Vec::new();
        };
        rows.iter()
            .filter_map(|r| {
                let cells = r.as_array()?;
                match Self::from_row(cells) {
                    Ok(product) => Some(product),
                    Err(e) => {
                        warn!("Skipping unreadable product row: {e}");
                        None
                    }
                }
            })
            .collect()
    }

    /// Whether the listing is visible in the buyer catalog at all.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    /// Whether an order can be placed right now.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        self.is_active() && self.stock > 0
    }
}

/// Base64 image payload attached to a create or update call.
#[derive(Clone, Debug)]
pub struct ImageUpload {
    /// Base64-encoded file contents
    pub data: String,
    /// MIME type, e.g. `image/jpeg`
    pub mime_type: String,
    /// Original file name
    pub file_name: String,
}

/// Input for creating a listing.
#[derive(Clone, Debug)]
pub struct NewProduct {
    /// Listing name, required
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Unit price in rupiah, must be finite and non-negative
    pub price: f64,
    /// Units in stock, must be non-negative
    pub stock: i64,
    /// Category label, required
    pub category: String,
    /// Optional image to upload alongside the listing
    pub image: Option<ImageUpload>,
}

/// Partial update for an existing listing; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct ProductPatch {
    /// New listing name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New unit price
    pub price: Option<f64>,
    /// New stock count
    pub stock: Option<i64>,
    /// New category label
    pub category: Option<String>,
    /// New status (1 = active, 0 = hidden)
    pub status: Option<i64>,
    /// Replacement image
    pub image: Option<ImageUpload>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::product_row;
    use serde_json::json;

    #[test]
    fn test_from_row_decodes_full_row() {
        let cells = product_row(
            "p-1",
            "budi@kampus.ac.id",
            "Telur Ayam",
            "Telur ayam kampung segar",
            25000.0,
            40,
            "Sembako",
            1,
        );
        let product = Product::from_row(cells.as_array().unwrap()).unwrap();

        assert_eq!(product.product_id, "p-1");
        assert_eq!(product.owner, "budi@kampus.ac.id");
        assert_eq!(product.name, "Telur Ayam");
        assert_eq!(product.price, 25000.0);
        assert_eq!(product.stock, 40);
        assert_eq!(product.category, "Sembako");
        assert!(product.is_active());
        assert!(product.is_purchasable());
    }

    #[test]
    fn test_from_row_accepts_numeric_strings() {
        let cells = json!([
            "p-2", "budi@kampus.ac.id", "Beras", "", "", "52000", "12", "Sembako", "1",
            "2024-05-01T08:00:00Z", "2024-05-01T08:00:00Z"
        ]);
        let product = Product::from_row(cells.as_array().unwrap()).unwrap();
        assert_eq!(product.price, 52000.0);
        assert_eq!(product.stock, 12);
        assert!(product.is_active());
    }

    #[test]
    fn test_from_row_tolerates_missing_name_and_description() {
        let cells = json!(["p-3", "budi@kampus.ac.id"]);
        let product = Product::from_row(cells.as_array().unwrap()).unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.description, None);
        assert_eq!(product.stock, 0);
        assert!(!product.is_purchasable());
    }

    #[test]
    fn test_from_row_requires_identity_columns() {
        assert!(Product::from_row(json!(["", "budi@kampus.ac.id"]).as_array().unwrap()).is_err());
        assert!(Product::from_row(json!(["p-4"]).as_array().unwrap()).is_err());
    }

    #[test]
    fn test_from_rows_skips_bad_rows() {
        let data = json!([
            ["p-1", "budi@kampus.ac.id", "Telur Ayam", "", "", 25000, 40, "Sembako", 1,
             "2024-05-01T08:00:00Z", "2024-05-01T08:00:00Z"],
            ["", "missing-id"],
            "not-a-row"
        ]);
        let products = Product::from_rows(&data);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_id, "p-1");
    }

    #[test]
    fn test_from_rows_of_non_array_is_empty() {
        assert!(Product::from_rows(&json!(null)).is_empty());
        assert!(Product::from_rows(&json!({"rows": []})).is_empty());
    }

    #[test]
    fn test_out_of_stock_is_not_purchasable() {
        let cells = product_row("p-5", "x@y.z", "Gula", "", 18000.0, 0, "Sembako", 1);
        let product = Product::from_row(cells.as_array().unwrap()).unwrap();
        assert!(product.is_active());
        assert!(!product.is_purchasable());
    }
}
