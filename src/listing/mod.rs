//! Listing type definitions
//!
//! A `Listing` is one store's offer for a product: price, discount framing,
//! rating, optional coupon, and delivery terms. Catalog listings are fixed at
//! process start; generated listings are built per request and discarded.

use serde::{Deserialize, Serialize};

/// A single store listing for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Identifier, unique within one response (not globally)
    pub id: u32,
    /// Product name as shown by the store
    pub name: String,
    /// Short product description
    pub description: String,
    /// Offer price in whole currency units
    pub price: u32,
    /// Pre-discount price; always >= `price`
    pub original_price: u32,
    /// Store name
    pub store: String,
    /// Average customer rating in [0.0, 5.0]
    pub rating: f64,
    /// Number of customer reviews
    pub reviews: u32,
    /// Promotion code, absent when the offer has no promotion
    pub coupon: Option<String>,
    /// Human-readable promotion text; present iff `coupon` is present
    pub coupon_description: Option<String>,
    /// Shipping descriptor ("Free shipping", ...)
    pub shipping: String,
    /// Human-readable delivery date phrase
    pub delivery: String,
    /// Return policy descriptor
    pub return_policy: String,
}

impl Listing {
    /// Discount amount implied by the original price
    pub fn discount(&self) -> u32 {
        self.original_price.saturating_sub(self.price)
    }

    /// Whether the listing carries a promotion code
    pub fn has_coupon(&self) -> bool {
        self.coupon.is_some()
    }

    /// Check the cross-field invariants every listing must satisfy
    pub fn is_well_formed(&self) -> bool {
        self.original_price >= self.price
            && (0.0..=5.0).contains(&self.rating)
            && self.coupon.is_some() == self.coupon_description.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing {
            id: 1,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 90,
            original_price: 100,
            store: "Amazon".to_string(),
            rating: 4.5,
            reviews: 10,
            coupon: None,
            coupon_description: None,
            shipping: "Free shipping".to_string(),
            delivery: "Delivered by Sep 28".to_string(),
            return_policy: "30-day return policy".to_string(),
        }
    }

    #[test]
    fn test_discount() {
        assert_eq!(listing().discount(), 10);
    }

    #[test]
    fn test_well_formed() {
        assert!(listing().is_well_formed());

        let mut bad = listing();
        bad.original_price = 50;
        assert!(!bad.is_well_formed());

        let mut lopsided = listing();
        lopsided.coupon = Some("SAVE10".to_string());
        assert!(!lopsided.is_well_formed());
    }

    #[test]
    fn test_serialization_field_names() {
        let json = serde_json::to_value(listing()).unwrap();
        assert_eq!(json["original_price"], 100);
        assert_eq!(json["return_policy"], "30-day return policy");
        assert!(json["coupon"].is_null());
    }
}
