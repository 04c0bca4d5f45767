//! Best-price selection
//!
//! Picks the minimum-price listing from a result set. Ties go to the
//! earliest-occurring listing so the selection is stable over the sequence.

use crate::listing::Listing;

/// Return the cheapest listing, or `None` for an empty set
pub fn best(listings: &[Listing]) -> Option<&Listing> {
    listings
        .iter()
        .reduce(|best, l| if l.price < best.price { l } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::matcher::match_listings;

    #[test]
    fn test_empty_is_none() {
        assert!(best(&[]).is_none());
    }

    #[test]
    fn test_unique_minimum() {
        let catalog = Catalog::builtin();
        let results = match_listings("iphone 16", &catalog);
        let pick = best(&results).unwrap();
        assert_eq!(pick.price, 1179);
        assert_eq!(pick.store, "Best Buy");
    }

    #[test]
    fn test_samsung_best() {
        let catalog = Catalog::builtin();
        let results = match_listings("samsung", &catalog);
        assert_eq!(best(&results).unwrap().price, 879);
    }

    #[test]
    fn test_tie_takes_first_occurrence() {
        let catalog = Catalog::builtin();
        let mut results = match_listings("iphone 16", &catalog);
        // Duplicate the minimum at the end; the earlier occurrence must win
        let mut clone = results[1].clone();
        clone.store = "Imposter".to_string();
        results.push(clone);

        let pick = best(&results).unwrap();
        assert_eq!(pick.price, 1179);
        assert_eq!(pick.store, "Best Buy");
    }
}
