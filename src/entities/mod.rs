//! Entity module - Typed records for the three backend sheets.
//!
//! The backend returns flat positional arrays, one per spreadsheet row. Each
//! entity decodes those arrays into a named struct at the boundary so that
//! no raw column index ever reaches the callers.

pub mod order;
pub mod product;
mod row;
pub mod user;

// Re-export the types callers touch most often
pub use order::{NewOrder, Order, OrderStatus};
pub use product::{ImageUpload, NewProduct, Product, ProductPatch};
pub use user::{NewUser, Role, UserProfile};
