//! Ownership views - which rows belong to the signed-in user.
//!
//! Ownership is email equality. The one wrinkle is pre-migration sheet rows
//! whose owner column still holds a generated UUID; the configured
//! [`LegacySellerMap`] bridges those until the data is migrated.

use crate::config::legacy::LegacySellerMap;
use crate::entities::{Order, Product};

/// Whether `owner_id` denotes the viewer, directly or through a legacy id.
fn owned_by(owner_id: &str, viewer_email: &str, legacy: &LegacySellerMap) -> bool {
    owner_id == viewer_email || legacy.legacy_id_for(viewer_email) == Some(owner_id)
}

/// The seller's own listings, in fetched order.
#[must_use]
pub fn seller_products(
    products: &[Product],
    viewer_email: &str,
    legacy: &LegacySellerMap,
) -> Vec<Product> {
    products
        .iter()
        .filter(|p| owned_by(&p.owner, viewer_email, legacy))
        .cloned()
        .collect()
}

/// The orders addressed to this seller, in fetched order.
#[must_use]
pub fn seller_orders(orders: &[Order], viewer_email: &str, legacy: &LegacySellerMap) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| owned_by(&o.seller, viewer_email, legacy))
        .cloned()
        .collect()
}

/// The orders this buyer has placed, in fetched order.
#[must_use]
pub fn buyer_orders(orders: &[Order], viewer_email: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| o.buyer == viewer_email)
        .cloned()
        .collect()
}
