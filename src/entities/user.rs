//! User entity - The signed-in identity and registration input.
//!
//! The Users sheet is never read row-by-row on this side; the backend
//! answers auth calls with a ready-made profile object, so [`UserProfile`]
//! deserializes that object directly. Email doubles as the user id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace role, fixed at registration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses the catalog and places orders
    Buyer,
    /// Lists products and fulfils orders
    Seller,
}

impl Role {
    /// Wire name of the role, as stored in the Users sheet.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile object returned by the backend on login and registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier; the backend uses the email itself
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Login email, also the ownership key for products and orders
    pub email: String,
    /// Display name
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Contact phone number, may be empty
    #[serde(rename = "nomorHp", default)]
    pub phone: String,
    /// Campus department, may be empty
    #[serde(rename = "jurusan", default)]
    pub department: String,
    /// Buyer or seller
    pub role: Role,
    /// When the account was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// When the account was last modified
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for the registration operation.
#[derive(Clone, Debug)]
pub struct NewUser {
    /// Login email; must look like an email address
    pub email: String,
    /// Plain-text password; hashing happens on the backend
    pub password: String,
    /// Display name, required
    pub full_name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Campus department
    pub department: Option<String>,
    /// Buyer or seller
    pub role: Role,
}
