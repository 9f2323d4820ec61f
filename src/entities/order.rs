//! Order entity - One purchase in the Orders sheet.
//!
//! Sheet columns, in order: `order_id`, `user_id` (buyer email), `seller_id`
//! (seller email), `product_id`, `quantity`, `total_price`, `order_status`,
//! `created_at`, `updated_at`. Status transitions are driven by the seller;
//! the backend passes status strings through without validating them, so
//! decoding keeps unrecognized values instead of failing.

use crate::entities::Product;
use crate::entities::row;
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

/// Lifecycle state of an order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    /// Placed by the buyer, not yet acknowledged
    Pending,
    /// Acknowledged by the seller
    Confirmed,
    /// Being prepared
    Processing,
    /// Handed to delivery
    Shipped,
    /// Received by the buyer
    Delivered,
    /// Cancelled by the seller
    Cancelled,
    /// Any other string the backend stored
    Other(String),
}

impl OrderStatus {
    /// The statuses a seller can move an order to, in display order.
    pub const SELLER_CHOICES: [Self; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Wire name of the status, as stored in the Orders sheet.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            "" | "pending" => Self::Pending,
            "confirmed" => Self::Confirmed,
            "processing" => Self::Processing,
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            "cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// One order, decoded from a positional sheet row.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    /// Unique identifier assigned by the backend
    pub order_id: String,
    /// Email of the buyer who placed the order
    pub buyer: String,
    /// Email of the seller fulfilling the order
    pub seller: String,
    /// Product being purchased
    pub product_id: String,
    /// Units ordered
    pub quantity: i64,
    /// Total price at creation time (quantity x unit price)
    pub total_price: f64,
    /// Current lifecycle state
    pub status: OrderStatus,
    /// When the order was placed
    pub created_at: DateTime<Utc>,
    /// When the order was last modified
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Decodes a single positional row.
    ///
    /// The id, buyer, and seller columns are required; everything else
    /// decodes leniently.
    pub fn from_row(cells: &[Value]) -> Result<Self> {
        Ok(Self {
            order_id: row::required_str(cells, 0, "order_id")?,
            buyer: row::required_str(cells, 1, "user_id")?,
            seller: row::required_str(cells, 2, "seller_id")?,
            product_id: row::str_or_default(cells, 3),
            quantity: row::i64_or(cells, 4, 1),
            total_price: row::f64_or_default(cells, 5),
            status: OrderStatus::from(row::str_or_default(cells, 6).as_str()),
            created_at: row::timestamp_or_epoch(cells, 7),
            updated_at: row::timestamp_or_epoch(cells, 8),
        })
    }

    /// Decodes the `data` payload of a read response (an array of rows),
    /// skipping rows that fail to decode.
    #[must_use]
    pub fn from_rows(data: &Value) -> Vec<Self> {
        let Some(rows) = data.as_array() else {
            return Vec::new();
        };
        rows.iter()
            .filter_map(|r| {
                let cells = r.as_array()?;
                match Self::from_row(cells) {
                    Ok(order) => Some(order),
                    Err(e) => {
                        warn!("Skipping unreadable order row: {e}");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Input for placing an order.
///
/// The total is always computed here from the product record, never accepted
/// from the caller, so it cannot drift from `quantity x unit price`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewOrder {
    /// Product being purchased
    pub product_id: String,
    /// Units ordered
    pub quantity: i64,
    /// Computed total, `quantity x product.price`
    pub total_price: f64,
}

impl NewOrder {
    /// Builds an order for `quantity` units of `product`.
    ///
    /// # Errors
    /// Returns a validation error if the product is not purchasable, the
    /// quantity is below 1, or the quantity exceeds the available stock.
    pub fn for_product(product: &Product, quantity: i64) -> Result<Self> {
        if !product.is_purchasable() {
            return Err(Error::Validation {
                message: "Produk tidak tersedia".to_string(),
            });
        }
        if quantity < 1 {
            return Err(Error::Validation {
                message: "Quantity minimal 1".to_string(),
            });
        }
        if quantity > product.stock {
            return Err(Error::Validation {
                message: "Stok tidak mencukupi".to_string(),
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let total_price = product.price * quantity as f64;
        Ok(Self {
            product_id: product.product_id.clone(),
            quantity,
            total_price,
        })
    }
}
