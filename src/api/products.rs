//! Product operations - CRUD against the Products sheet.
//!
//! Reads decode the positional rows into [`Product`] records at the
//! boundary. The backend enforces that only sellers may write and only to
//! their own rows; those rejections surface as backend errors with the
//! endpoint's own message.

use crate::api::ApiClient;
use crate::api::envelope::ProductEnvelope;
use crate::entities::{NewProduct, Product, ProductPatch};
use crate::errors::{Error, Result};
use tracing::info;

impl ApiClient {
    /// Fetches every product row, decoded. Unreadable rows are skipped.
    ///
    /// # Errors
    /// Returns a backend error if the call fails or is rejected.
    pub async fn list_products(&self, email: &str) -> Result<Vec<Product>> {
        let response = self.call(&ProductEnvelope::read(email)).await.into_result()?;
        let products = response
            .data
            .as_ref()
            .map(Product::from_rows)
            .unwrap_or_default();
        info!(count = products.len(), "Fetched product listings.");
        Ok(products)
    }

    /// Lists a new product; returns the id the backend assigned.
    ///
    /// # Errors
    /// Returns a validation error for malformed input, or a backend error if
    /// the caller is not a seller.
    pub async fn create_product(&self, email: &str, new_product: &NewProduct) -> Result<String> {
        validate_new_product(new_product)?;
        let response = self
            .call(&ProductEnvelope::create(email, new_product))
            .await
            .into_result()?;
        response.product_id.ok_or_else(|| Error::Backend {
            message: "missing product_id in create response".to_string(),
        })
    }

    /// Applies a partial update to an existing product.
    ///
    /// # Errors
    /// Returns a validation error for malformed patch values, or a backend
    /// error if the product is missing or owned by someone else.
    pub async fn update_product(&self, email: &str, product_id: &str, patch: &ProductPatch) -> Result<()> {
        validate_patch(patch)?;
        self.call(&ProductEnvelope::update(email, product_id, patch))
            .await
            .into_result()?;
        Ok(())
    }

    /// Deletes a product row.
    ///
    /// # Errors
    /// Returns a backend error if the product is missing or owned by someone
    /// else.
    pub async fn delete_product(&self, email: &str, product_id: &str) -> Result<()> {
        self.call(&ProductEnvelope::delete(email, product_id))
            .await
            .into_result()?;
        Ok(())
    }
}

fn validate_price(price: f64) -> Result<()> {
    if price < 0.0 || !price.is_finite() {
        return Err(Error::Validation {
            message: "Harga harus lebih dari 0".to_string(),
        });
    }
    Ok(())
}

fn validate_new_product(new_product: &NewProduct) -> Result<()> {
    if new_product.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Nama produk wajib diisi".to_string(),
        });
    }
    validate_price(new_product.price)?;
    if new_product.stock < 0 {
        return Err(Error::Validation {
            message: "Stok tidak boleh negatif".to_string(),
        });
    }
    if new_product.category.trim().is_empty() {
        return Err(Error::Validation {
            message: "Kategori wajib diisi".to_string(),
        });
    }
    Ok(())
}

fn validate_patch(patch: &ProductPatch) -> Result<()> {
    if let Some(name) = &patch.name
        && name.trim().is_empty()
    {
        return Err(Error::Validation {
            message: "Nama produk wajib diisi".to_string(),
        });
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    if let Some(stock) = patch.stock
        && stock < 0
    {
        return Err(Error::Validation {
            message: "Stok tidak boleh negatif".to_string(),
        });
    }
    Ok(())
}
