//! Synthetic listing generation
//!
//! Fallback for queries that match nothing in the catalog: fabricates 2 to 5
//! plausible store listings from the query text. The random source is passed
//! in by the caller so tests can use a seeded generator.

use crate::listing::Listing;
use chrono::{Duration, Local};
use rand::seq::SliceRandom;
use rand::Rng;

/// Stores synthetic listings can be attributed to
const STORES: &[&str] = &["Amazon", "Best Buy", "Walmart", "Target", "Newegg", "eBay"];

/// Name suffixes appended to the title-cased query
const SUFFIXES: &[&str] = &["Pro", "Max", "Plus", "Elite", "Premium"];

/// Shipping descriptors
const SHIPPING: &[&str] = &["Free shipping", "Free 2-day shipping", "Standard shipping"];

/// Generate between 2 and 5 synthetic listings for a query
pub fn generate<R: Rng>(query: &str, rng: &mut R) -> Vec<Listing> {
    let count = rng.gen_range(2..=5);
    (0..count).map(|_| generate_one(query, rng)).collect()
}

fn generate_one<R: Rng>(query: &str, rng: &mut R) -> Listing {
    let base_price: u32 = rng.gen_range(100..=2000);
    let discount_percent: u32 = rng.gen_range(5..=30);
    let price = base_price - base_price * discount_percent / 100;

    let suffix = SUFFIXES.choose(rng).copied().unwrap_or("Pro");
    let store = STORES.choose(rng).copied().unwrap_or("Amazon");
    let shipping = SHIPPING.choose(rng).copied().unwrap_or("Free shipping");

    let delivery_date = Local::now() + Duration::days(rng.gen_range(1..=10));

    let (coupon, coupon_description) = if rng.gen_bool(0.5) {
        (
            Some(format!("SAVE{}", rng.gen_range(5..=25))),
            Some(format!("Save ${} with code", rng.gen_range(10..=100))),
        )
    } else {
        (None, None)
    };

    Listing {
        id: rng.gen_range(100..=1000),
        name: format!("{} {}", title_case(query), suffix),
        description: format!("High-quality {} with premium features", query),
        price,
        original_price: base_price,
        store: store.to_string(),
        rating: round1(rng.gen_range(3.5..=5.0)),
        reviews: rng.gen_range(100..=5000),
        coupon,
        coupon_description,
        shipping: shipping.to_string(),
        delivery: format!("Delivered by {}", delivery_date.format("%b %d")),
        return_policy: format!("{}-day return policy", rng.gen_range(14..=90)),
    }
}

/// Uppercase the first character of each whitespace-separated word,
/// lowercasing the rest
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
