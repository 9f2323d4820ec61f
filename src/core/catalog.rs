//! Buyer catalog derivation - search, category, visibility, and ordering.
//!
//! Filters are conjunctive and applied in a fixed order: free-text search,
//! then category, then buyer visibility (active listings from other
//! sellers). Sorting runs last. The input slice is never mutated.

use crate::entities::Product;

/// Available catalog orderings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Alphabetical by listing name
    Name,
    /// Largest stock first
    StockHigh,
    /// Most recently created first
    #[default]
    Newest,
}

impl SortKey {
    /// Wire name used by the sort dropdown.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Name => "name",
            Self::StockHigh => "stock",
            Self::Newest => "newest",
        }
    }
}

impl From<&str> for SortKey {
    /// Unrecognized values fall back to newest-first, the UI default.
    fn from(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name" => Self::Name,
            "stock" => Self::StockHigh,
            _ => Self::Newest,
        }
    }
}

/// Parameters of one catalog view.
#[derive(Clone, Debug, Default)]
pub struct CatalogQuery {
    /// Free-text search; empty matches everything
    pub search: String,
    /// Selected category; `None`, `""`, and `"all"` match everything
    pub category: Option<String>,
    /// Requested ordering
    pub sort: SortKey,
}

/// Derives the buyer catalog: filter, then sort, into a fresh `Vec`.
#[must_use]
pub fn derive_catalog(products: &[Product], query: &CatalogQuery, viewer_email: &str) -> Vec<Product> {
    let mut listed: Vec<Product> = products
        .iter()
        .filter(|p| matches_search(p, &query.search))
        .filter(|p| matches_category(p, query.category.as_deref()))
        .filter(|p| visible_to_buyer(p, viewer_email))
        .cloned()
        .collect();
    sort_products(&mut listed, query.sort);
    listed
}

/// Case-insensitive substring match on name or description.
///
/// An empty query matches every row; a row with no description simply
/// cannot match on it.
fn matches_search(product: &Product, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

/// Exact category equality behind the `"all"`/empty sentinels.
fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        None | Some("" | "all") => true,
        Some(selected) => product.category == selected,
    }
}

/// Buyers see active listings from other sellers only.
fn visible_to_buyer(product: &Product, viewer_email: &str) -> bool {
    product.is_active() && product.owner != viewer_email
}

/// Sorts in place by the requested key. Uses a stable sort, so rows that
/// compare equal keep their fetched order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::StockHigh => products.sort_by(|a, b| b.stock.cmp(&a.stock)),
        SortKey::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

/// The distinct non-empty category values, in first-seen order, for the
/// filter dropdown.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = Vec::new();
    for product in products {
        if !product.category.is_empty() && !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
