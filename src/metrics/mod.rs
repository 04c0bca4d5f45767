//! Metrics collection
//!
//! Lightweight request counters exposed through `/api/stats`.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide request counters
#[derive(Debug, Default)]
pub struct Metrics {
    total_searches: AtomicU64,
    catalog_hits: AtomicU64,
    generated_fallbacks: AtomicU64,
    logins: AtomicU64,
    signups: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub total_searches: u64,
    pub catalog_hits: u64,
    pub generated_fallbacks: u64,
    pub logins: u64,
    pub signups: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_search(&self) {
        self.total_searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_catalog_hit(&self) {
        self.catalog_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_generated_fallback(&self) {
        self.generated_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_login(&self) {
        self.logins.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_signup(&self) {
        self.signups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_searches: self.total_searches.load(Ordering::Relaxed),
            catalog_hits: self.catalog_hits.load(Ordering::Relaxed),
            generated_fallbacks: self.generated_fallbacks.load(Ordering::Relaxed),
            logins: self.logins.load(Ordering::Relaxed),
            signups: self.signups.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = Metrics::new();
        metrics.inc_search();
        metrics.inc_search();
        metrics.inc_catalog_hit();
        metrics.inc_login();

        let snap = metrics.snapshot();
        assert_eq!(snap.total_searches, 2);
        assert_eq!(snap.catalog_hits, 1);
        assert_eq!(snap.generated_fallbacks, 0);
        assert_eq!(snap.logins, 1);
        assert_eq!(snap.signups, 0);
    }
}
