//! Search orchestration
//!
//! Runs the full pipeline for one query: catalog matching, synthetic
//! fallback, then best-price selection. Validation of the raw query happens
//! at the web boundary; the pipeline only sees normalized, non-empty input.

use crate::catalog::Catalog;
use crate::generator;
use crate::listing::Listing;
use crate::matcher;
use crate::metrics::Metrics;
use crate::ranker;
use std::sync::Arc;
use tracing::debug;

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// All resolved listings, in discovery order
    pub results: Vec<Listing>,
    /// Cheapest listing in `results`
    pub best_price: Option<Listing>,
    /// Whether the results came from the generator rather than the catalog
    pub generated: bool,
}

/// Pipeline over an immutable catalog
pub struct SearchPipeline {
    catalog: Arc<Catalog>,
    metrics: Arc<Metrics>,
}

impl SearchPipeline {
    pub fn new(catalog: Arc<Catalog>, metrics: Arc<Metrics>) -> Self {
        Self { catalog, metrics }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Execute the pipeline for a normalized query
    ///
    /// Never returns an empty result set: the generator yields at least two
    /// listings whenever the catalog yields none.
    pub fn execute(&self, query: &str) -> SearchOutcome {
        self.metrics.inc_search();

        let mut results = matcher::match_listings(query, &self.catalog);
        let generated = results.is_empty();

        if generated {
            debug!("no catalog match for '{}', generating listings", query);
            results = generator::generate(query, &mut rand::thread_rng());
            self.metrics.inc_generated_fallback();
        } else {
            debug!("catalog matched {} listings for '{}'", results.len(), query);
            self.metrics.inc_catalog_hit();
        }

        let best_price = ranker::best(&results).cloned();

        SearchOutcome {
            results,
            best_price,
            generated,
        }
    }
}
