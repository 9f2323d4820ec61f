//! Seller dashboard statistics and price formatting.

use crate::entities::Product;

/// Headline numbers for a seller's dashboard, computed over their own
/// listings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListingStats {
    /// Number of listings
    pub total_products: usize,
    /// Listings currently active
    pub active_products: usize,
    /// Listings with zero stock
    pub out_of_stock: usize,
    /// Total inventory value, `sum(price x stock)`
    pub inventory_value: f64,
}

/// Computes dashboard statistics for a set of listings.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn listing_stats(products: &[Product]) -> ListingStats {
    ListingStats {
        total_products: products.len(),
        active_products: products.iter().filter(|p| p.is_active()).count(),
        out_of_stock: products.iter().filter(|p| p.stock == 0).count(),
        inventory_value: products.iter().map(|p| p.price * p.stock as f64).sum(),
    }
}

/// Formats an amount the way the `id-ID` locale renders IDR:
/// `Rp 50.000,00` - dot thousands separators, comma decimals.
#[must_use]
pub fn format_rupiah(amount: f64) -> String {
    let negative = amount < 0.0;
    #[allow(clippy::cast_possible_truncation)]
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}Rp {grouped},{fraction:02}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::test_product;

    #[test]
    fn test_listing_stats_over_mixed_inventory() {
        let products = vec![
            test_product("p-1", "a@x.com", "Telur", 25000.0, 40, "Sembako", 1),
            test_product("p-2", "a@x.com", "Beras", 52000.0, 0, "Sembako", 1),
            test_product("p-3", "a@x.com", "Gula", 18000.0, 10, "Sembako", 0),
        ];
        let stats = listing_stats(&products);

        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.active_products, 2);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.inventory_value, 25000.0 * 40.0 + 18000.0 * 10.0);
    }

    #[test]
    fn test_empty_inventory_stats() {
        assert_eq!(listing_stats(&[]), ListingStats::default());
    }

    #[test]
    fn test_format_rupiah_groups_thousands() {
        assert_eq!(format_rupiah(50000.0), "Rp 50.000,00");
        assert_eq!(format_rupiah(1_234_567.5), "Rp 1.234.567,50");
        assert_eq!(format_rupiah(999.0), "Rp 999,00");
        assert_eq!(format_rupiah(0.0), "Rp 0,00");
    }

    #[test]
    fn test_format_rupiah_negative_amounts() {
        assert_eq!(format_rupiah(-25000.0), "-Rp 25.000,00");
    }
}
