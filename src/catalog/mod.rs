//! Static product catalog
//!
//! The catalog is the mock product database: an insertion-ordered mapping from
//! lowercase keyword phrases to the listings sold under them. It is built once
//! at startup and shared read-only across requests.

use crate::listing::Listing;
use serde::{Deserialize, Serialize};

/// One keyword phrase and the listings filed under it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Lowercase, space-delimited keyword phrase
    pub keyword: String,
    /// Listings in insertion order
    pub listings: Vec<Listing>,
}

/// Insertion-ordered keyword -> listings catalog
///
/// Entry order matters: when several phrases match a query, listings are
/// concatenated in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyword phrase with its listings
    pub fn insert(&mut self, keyword: impl Into<String>, listings: Vec<Listing>) {
        self.entries.push(CatalogEntry {
            keyword: keyword.into(),
            listings,
        });
    }

    /// Iterate entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Number of keyword phrases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total listings across all phrases
    pub fn listing_count(&self) -> usize {
        self.entries.iter().map(|e| e.listings.len()).sum()
    }

    /// Build the built-in mock catalog
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.insert(
            "iphone 16",
            vec![
                listing(
                    1,
                    "iPhone 16 Pro Max 256GB",
                    "Latest Apple iPhone with A18 chip",
                    1199,
                    1299,
                    "Amazon",
                    4.5,
                    2148,
                    Some(("EXTRA10", "Additional 10% off with code")),
                    "Free shipping",
                    "Delivered by Sep 28",
                    "30-day return policy",
                ),
                listing(
                    2,
                    "iPhone 16 Pro Max 256GB",
                    "Latest Apple iPhone with A18 chip",
                    1179,
                    1299,
                    "Best Buy",
                    4.0,
                    1872,
                    Some(("BESTBUY15", "15% off for new customers")),
                    "Free shipping",
                    "Delivered by Sep 30",
                    "In-store pickup available",
                ),
                listing(
                    3,
                    "iPhone 16 Pro Max 256GB",
                    "Latest Apple iPhone with A18 chip",
                    1189,
                    1299,
                    "Walmart",
                    4.8,
                    3045,
                    None,
                    "Free shipping",
                    "Delivered by Sep 25",
                    "90-day return policy",
                ),
            ],
        );

        catalog.insert(
            "samsung tv",
            vec![
                listing(
                    4,
                    "Samsung 65\" QLED 4K Smart TV",
                    "Quantum HDR with 100% Color Volume",
                    899,
                    1099,
                    "Amazon",
                    4.3,
                    3421,
                    Some(("TVDEAL20", "$20 off with code")),
                    "Free shipping",
                    "Delivered by Oct 5",
                    "30-day return policy",
                ),
                listing(
                    5,
                    "Samsung 65\" QLED 4K Smart TV",
                    "Quantum HDR with 100% Color Volume",
                    879,
                    1099,
                    "Best Buy",
                    4.5,
                    2876,
                    None,
                    "Free shipping",
                    "Delivered by Oct 3",
                    "In-store pickup available",
                ),
            ],
        );

        catalog.insert(
            "macbook pro",
            vec![
                listing(
                    6,
                    "MacBook Pro 16\" M3 Max",
                    "12-core CPU, 40-core GPU, 48GB RAM",
                    3499,
                    3899,
                    "Apple Store",
                    4.9,
                    1254,
                    Some(("EDU100", "$100 off for students")),
                    "Free shipping",
                    "Delivered by Sep 20",
                    "14-day return policy",
                ),
                listing(
                    7,
                    "MacBook Pro 16\" M3 Max",
                    "12-core CPU, 40-core GPU, 48GB RAM",
                    3399,
                    3899,
                    "Amazon",
                    4.7,
                    987,
                    Some(("PRIME50", "$50 off for Prime members")),
                    "Free shipping",
                    "Delivered by Sep 22",
                    "30-day return policy",
                ),
            ],
        );

        catalog
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u32,
    name: &str,
    description: &str,
    price: u32,
    original_price: u32,
    store: &str,
    rating: f64,
    reviews: u32,
    coupon: Option<(&str, &str)>,
    shipping: &str,
    delivery: &str,
    return_policy: &str,
) -> Listing {
    let (coupon, coupon_description) = match coupon {
        Some((code, desc)) => (Some(code.to_string()), Some(desc.to_string())),
        None => (None, None),
    };
    Listing {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        original_price,
        store: store.to_string(),
        rating,
        reviews,
        coupon,
        coupon_description,
        shipping: shipping.to_string(),
        delivery: delivery.to_string(),
        return_policy: return_policy.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.listing_count(), 7);

        let keywords: Vec<&str> = catalog.entries().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["iphone 16", "samsung tv", "macbook pro"]);
    }

    #[test]
    fn test_builtin_invariants() {
        let catalog = Catalog::builtin();
        for entry in catalog.entries() {
            assert_eq!(entry.keyword, entry.keyword.to_lowercase());
            for l in &entry.listings {
                assert!(l.is_well_formed(), "listing {} violates invariants", l.id);
            }
        }
    }

    #[test]
    fn test_builtin_prices() {
        let catalog = Catalog::builtin();
        let iphone = catalog.entries().next().unwrap();
        let prices: Vec<u32> = iphone.listings.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![1199, 1179, 1189]);
    }
}
