//! Shared test utilities for `Pasarku`.
//!
//! This module provides common helper functions for building sheet rows and
//! entities with sensible defaults.

use crate::entities::{Order, OrderStatus, Product, Role, UserProfile};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

/// Default timestamp used by row and entity builders.
pub const DEFAULT_CREATED_AT: &str = "2024-05-01T08:00:00Z";

fn parse_ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map_or(DateTime::UNIX_EPOCH, |dt| dt.with_timezone(&Utc))
}

/// Builds an 11-column Products sheet row the way the backend returns it.
#[allow(clippy::too_many_arguments)]
pub fn product_row(
    product_id: &str,
    owner: &str,
    name: &str,
    description: &str,
    price: f64,
    stock: i64,
    category: &str,
    status: i64,
) -> Value {
    json!([
        product_id,
        owner,
        name,
        "",
        description,
        price,
        stock,
        category,
        status,
        DEFAULT_CREATED_AT,
        DEFAULT_CREATED_AT
    ])
}

/// Builds a 9-column Orders sheet row the way the backend returns it.
#[allow(clippy::too_many_arguments)]
pub fn order_row(
    order_id: &str,
    buyer: &str,
    seller: &str,
    product_id: &str,
    quantity: i64,
    total_price: f64,
    status: &str,
) -> Value {
    json!([
        order_id,
        buyer,
        seller,
        product_id,
        quantity,
        total_price,
        status,
        DEFAULT_CREATED_AT,
        DEFAULT_CREATED_AT
    ])
}

/// Creates a test product with the default timestamp.
#[allow(clippy::too_many_arguments)]
pub fn test_product(
    product_id: &str,
    owner: &str,
    name: &str,
    price: f64,
    stock: i64,
    category: &str,
    status: i64,
) -> Product {
    test_product_created_at(product_id, owner, name, price, stock, category, status, DEFAULT_CREATED_AT)
}

/// Creates a test product with an explicit creation timestamp, for ordering
/// tests.
#[allow(clippy::too_many_arguments)]
pub fn test_product_created_at(
    product_id: &str,
    owner: &str,
    name: &str,
    price: f64,
    stock: i64,
    category: &str,
    status: i64,
    created_at: &str,
) -> Product {
    Product {
        product_id: product_id.to_string(),
        owner: owner.to_string(),
        name: name.to_string(),
        image_url: None,
        description: None,
        price,
        stock,
        category: category.to_string(),
        status,
        created_at: parse_ts(created_at),
        updated_at: parse_ts(created_at),
    }
}

/// Creates a test order with the default timestamp.
#[allow(clippy::too_many_arguments)]
pub fn test_order(
    order_id: &str,
    buyer: &str,
    seller: &str,
    product_id: &str,
    quantity: i64,
    total_price: f64,
    status: &str,
) -> Order {
    Order {
        order_id: order_id.to_string(),
        buyer: buyer.to_string(),
        seller: seller.to_string(),
        product_id: product_id.to_string(),
        quantity,
        total_price,
        status: OrderStatus::from(status),
        created_at: parse_ts(DEFAULT_CREATED_AT),
        updated_at: parse_ts(DEFAULT_CREATED_AT),
    }
}

/// Creates a test profile for session tests.
pub fn test_profile(email: &str, full_name: &str, role: Role) -> UserProfile {
    UserProfile {
        user_id: email.to_string(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        phone: String::new(),
        department: String::new(),
        role,
        created_at: parse_ts(DEFAULT_CREATED_AT),
        updated_at: parse_ts(DEFAULT_CREATED_AT),
    }
}
