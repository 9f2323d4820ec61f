//! Core derivation logic - pure, framework-agnostic list operations.
//!
//! Everything here is a pure function of data already fetched: given the
//! full row set and the view's parameters, produce exactly the list that
//! view renders. Nothing in this module performs I/O or mutates its input,
//! so recomputation on every dependency change is safe and cheap (row sets
//! are dozens to low hundreds of entries).

/// Buyer catalog filtering and sorting
pub mod catalog;
/// Seller/buyer ownership views
pub mod ownership;
/// Seller dashboard statistics and currency formatting
pub mod stats;

pub use catalog::{CatalogQuery, SortKey};
pub use stats::ListingStats;
