//! Envelope building - the exact JSON shapes the scripting endpoint expects.
//!
//! Every call POSTs one envelope keyed by a `sheet` tag and an `action`
//! name. The shapes are dictated by the backend and cannot change here;
//! in particular the Orders update call accepts a status either at the top
//! level or nested inside the data bag, and the nested value wins when both
//! are present.

use crate::entities::{NewOrder, NewProduct, NewUser, OrderStatus, ProductPatch, Role};
use serde::Serialize;

/// Target sheet of an envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Sheet {
    /// Authentication and profiles
    Users,
    /// Product listings
    Products,
    /// Purchases
    Orders,
}

/// Action name understood by the endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Create a user account
    Register,
    /// Authenticate an existing account
    Login,
    /// Append a new row
    Create,
    /// Fetch all rows of the sheet
    Read,
    /// Modify an existing row
    Update,
    /// Remove a row (products only)
    Delete,
}

/// Envelope for the Users sheet (register and login).
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    sheet: Sheet,
    action: Action,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
    #[serde(rename = "nomorHp", skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(rename = "jurusan", skip_serializing_if = "Option::is_none")]
    department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
}

impl UserEnvelope {
    /// Envelope for creating an account.
    #[must_use]
    pub fn register(new_user: &NewUser) -> Self {
        Self {
            sheet: Sheet::Users,
            action: Action::Register,
            email: new_user.email.clone(),
            password: Some(new_user.password.clone()),
            full_name: Some(new_user.full_name.clone()),
            phone: new_user.phone.clone(),
            department: new_user.department.clone(),
            role: Some(new_user.role),
        }
    }

    /// Envelope for authenticating an existing account.
    #[must_use]
    pub fn login(email: &str, password: &str) -> Self {
        Self {
            sheet: Sheet::Users,
            action: Action::Login,
            email: email.to_string(),
            password: Some(password.to_string()),
            full_name: None,
            phone: None,
            department: None,
            role: None,
        }
    }
}

/// Data bag for product create and update calls, in the backend's wire names.
#[derive(Debug, Default, Serialize)]
pub struct ProductData {
    #[serde(skip_serializing_if = "Option::is_none")]
    product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<i64>,
    #[serde(rename = "imageData", skip_serializing_if = "Option::is_none")]
    image_data: Option<String>,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
}

impl From<&NewProduct> for ProductData {
    fn from(new_product: &NewProduct) -> Self {
        let mut data = Self {
            product_name: Some(new_product.name.clone()),
            description: new_product.description.clone(),
            price: Some(new_product.price),
            stock: Some(new_product.stock),
            category: Some(new_product.category.clone()),
            status: None,
            ..Self::default()
        };
        if let Some(image) = &new_product.image {
            data.image_data = Some(image.data.clone());
            data.mime_type = Some(image.mime_type.clone());
            data.file_name = Some(image.file_name.clone());
        }
        data
    }
}

impl From<&ProductPatch> for ProductData {
    fn from(patch: &ProductPatch) -> Self {
        let mut data = Self {
            product_name: patch.name.clone(),
            description: patch.description.clone(),
            price: patch.price,
            stock: patch.stock,
            category: patch.category.clone(),
            status: patch.status,
            ..Self::default()
        };
        if let Some(image) = &patch.image {
            data.image_data = Some(image.data.clone());
            data.mime_type = Some(image.mime_type.clone());
            data.file_name = Some(image.file_name.clone());
        }
        data
    }
}

/// Envelope for the Products sheet.
#[derive(Debug, Serialize)]
pub struct ProductEnvelope {
    sheet: Sheet,
    action: Action,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ProductData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_id: Option<String>,
}

impl ProductEnvelope {
    /// Envelope for listing a new product.
    #[must_use]
    pub fn create(email: &str, new_product: &NewProduct) -> Self {
        Self {
            sheet: Sheet::Products,
            action: Action::Create,
            email: email.to_string(),
            data: Some(ProductData::from(new_product)),
            product_id: None,
        }
    }

    /// Envelope for fetching every product row.
    #[must_use]
    pub fn read(email: &str) -> Self {
        Self {
            sheet: Sheet::Products,
            action: Action::Read,
            email: email.to_string(),
            data: None,
            product_id: None,
        }
    }

    /// Envelope for partially updating an existing product.
    #[must_use]
    pub fn update(email: &str, product_id: &str, patch: &ProductPatch) -> Self {
        Self {
            sheet: Sheet::Products,
            action: Action::Update,
            email: email.to_string(),
            data: Some(ProductData::from(patch)),
            product_id: Some(product_id.to_string()),
        }
    }

    /// Envelope for deleting a product.
    #[must_use]
    pub fn delete(email: &str, product_id: &str) -> Self {
        Self {
            sheet: Sheet::Products,
            action: Action::Delete,
            email: email.to_string(),
            data: None,
            product_id: Some(product_id.to_string()),
        }
    }
}

/// Data bag for order create and update calls.
#[derive(Debug, Default, Serialize)]
pub struct OrderData {
    #[serde(skip_serializing_if = "Option::is_none")]
    product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_status: Option<OrderStatus>,
}

impl OrderData {
    /// Data bag carrying only a status change, the older of the two update
    /// shapes the backend accepts.
    #[must_use]
    pub fn status_only(status: OrderStatus) -> Self {
        Self {
            order_status: Some(status),
            ..Self::default()
        }
    }
}

impl From<&NewOrder> for OrderData {
    fn from(new_order: &NewOrder) -> Self {
        Self {
            product_id: Some(new_order.product_id.clone()),
            quantity: Some(new_order.quantity),
            total_price: Some(new_order.total_price),
            order_status: None,
        }
    }
}

/// Envelope for the Orders sheet.
#[derive(Debug, Serialize)]
pub struct OrderEnvelope {
    sheet: Sheet,
    action: Action,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<OrderData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_status: Option<OrderStatus>,
}

impl OrderEnvelope {
    /// Envelope for placing an order.
    #[must_use]
    pub fn create(email: &str, new_order: &NewOrder) -> Self {
        Self {
            sheet: Sheet::Orders,
            action: Action::Create,
            email: email.to_string(),
            order_id: None,
            data: Some(OrderData::from(new_order)),
            order_status: None,
        }
    }

    /// Envelope for fetching every order row.
    #[must_use]
    pub fn read(email: &str) -> Self {
        Self {
            sheet: Sheet::Orders,
            action: Action::Read,
            email: email.to_string(),
            order_id: None,
            data: None,
            order_status: None,
        }
    }

    /// Envelope for a status update.
    ///
    /// The backend accepts the new status either as a top-level field or
    /// nested in the data bag; both shapes are still produced by deployed
    /// clients, so this builder takes both and hoists one to the top level.
    /// When both are present the nested value wins.
    #[must_use]
    pub fn update(
        email: &str,
        order_id: &str,
        status: Option<OrderStatus>,
        data: Option<OrderData>,
    ) -> Self {
        let hoisted = data
            .as_ref()
            .and_then(|d| d.order_status.clone())
            .or(status);
        Self {
            sheet: Sheet::Orders,
            action: Action::Update,
            email: email.to_string(),
            order_id: Some(order_id.to_string()),
            data,
            order_status: hoisted,
        }
    }
}
