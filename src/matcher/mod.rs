//! Query-to-catalog matching
//!
//! Two matching tiers, first non-empty result wins:
//!
//! 1. Substring tier: the whole normalized query is a substring of a catalog
//!    keyword phrase.
//! 2. Token tier: any whitespace-delimited token of the query is a substring
//!    of a keyword phrase.
//!
//! Listings are concatenated in catalog order across all matching phrases.
//! A listing set is appended once per matching phrase; overlapping phrases
//! can therefore repeat listings, matching the original service's behavior.

use crate::catalog::Catalog;
use crate::listing::Listing;

/// Normalize a raw query for matching: trim and lowercase
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolve a normalized query against the catalog
///
/// Returns an empty vector when neither tier matches; the caller falls back
/// to the generator in that case.
pub fn match_listings(query: &str, catalog: &Catalog) -> Vec<Listing> {
    let mut results: Vec<Listing> = Vec::new();

    // Substring tier: whole query inside a keyword phrase
    for entry in catalog.entries() {
        if entry.keyword.contains(query) {
            results.extend(entry.listings.iter().cloned());
        }
    }

    // Token tier: any query token inside a keyword phrase
    if results.is_empty() {
        for entry in catalog.entries() {
            if query.split_whitespace().any(|tok| entry.keyword.contains(tok)) {
                results.extend(entry.listings.iter().cloned());
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  iPhone 16 "), "iphone 16");
    }

    #[test]
    fn test_exact_phrase_match() {
        let catalog = Catalog::builtin();
        let results = match_listings("iphone 16", &catalog);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, 1);
        assert_eq!(results[2].id, 3);
    }

    #[test]
    fn test_substring_of_phrase_matches() {
        let catalog = Catalog::builtin();
        // Every non-empty substring of a phrase matches that phrase
        let results = match_listings("iphone", &catalog);
        assert_eq!(results.len(), 3);

        let results = match_listings("samsung", &catalog);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].store, "Amazon");
        assert_eq!(results[1].price, 879);
    }

    #[test]
    fn test_token_tier_fallback() {
        let catalog = Catalog::builtin();
        // "cheap iphone" is not a substring of any phrase, but the token
        // "iphone" is
        let results = match_listings("cheap iphone", &catalog);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn test_token_tier_multiple_phrases() {
        let catalog = Catalog::builtin();
        // "pro" appears in both "iphone 16"? no; in "macbook pro" only
        let results = match_listings("refurbished pro", &catalog);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|l| l.name.starts_with("MacBook")));
    }

    #[test]
    fn test_no_match_yields_empty() {
        let catalog = Catalog::builtin();
        assert!(match_listings("xyz123", &catalog).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let catalog = Catalog::builtin();
        let a = match_listings("iphone 16", &catalog);
        let b = match_listings("iphone 16", &catalog);
        assert_eq!(a, b);
    }
}
