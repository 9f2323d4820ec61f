//! Order operations - create, read, and status updates against the Orders
//! sheet.
//!
//! Order creation goes through [`NewOrder::for_product`], which computes the
//! total from the product record; the seller email is resolved by the
//! backend from the product row, never supplied here.

use crate::api::ApiClient;
use crate::api::envelope::OrderEnvelope;
use crate::entities::{NewOrder, Order, OrderStatus};
use crate::errors::{Error, Result};
use tracing::info;

impl ApiClient {
    /// Fetches every order row, decoded. Unreadable rows are skipped.
    ///
    /// # Errors
    /// Returns a backend error if the call fails or is rejected.
    pub async fn list_orders(&self, email: &str) -> Result<Vec<Order>> {
        let response = self.call(&OrderEnvelope::read(email)).await.into_result()?;
        let orders = response
            .data
            .as_ref()
            .map(Order::from_rows)
            .unwrap_or_default();
        info!(count = orders.len(), "Fetched orders.");
        Ok(orders)
    }

    /// Places an order; returns the id the backend assigned.
    ///
    /// # Errors
    /// Returns a backend error if the caller is not a buyer or the product
    /// row has vanished.
    pub async fn create_order(&self, email: &str, new_order: &NewOrder) -> Result<String> {
        let response = self
            .call(&OrderEnvelope::create(email, new_order))
            .await
            .into_result()?;
        response.order_id.ok_or_else(|| Error::Backend {
            message: "missing order_id in create response".to_string(),
        })
    }

    /// Moves an order to a new status; returns the status the backend
    /// actually stored.
    ///
    /// # Errors
    /// Returns a backend error if the order is missing or belongs to a
    /// different seller.
    pub async fn update_order_status(
        &self,
        email: &str,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<OrderStatus> {
        let response = self
            .call(&OrderEnvelope::update(email, order_id, Some(status.clone()), None))
            .await
            .into_result()?;
        let stored = response
            .new_status
            .as_deref()
            .map_or(status, OrderStatus::from);
        info!(order_id, status = %stored, "Order status updated.");
        Ok(stored)
    }
}
