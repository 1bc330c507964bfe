use std::sync::{Arc, RwLock};

use crate::types::MarketRecord;

// ---------------------------------------------------------------------------
// MarketCatalog — immutable snapshot
// ---------------------------------------------------------------------------

/// Immutable snapshot of every named market region. Built once by the loader
/// and shared read-only; a refresh produces a whole new catalog rather than
/// mutating this one. Record order is preserved from the source — resolution
/// tie-breaking is "first occurrence wins".
#[derive(Debug, Default)]
pub struct MarketCatalog {
    records: Vec<MarketRecord>,
}

impl MarketCatalog {
    pub fn new(records: Vec<MarketRecord>) -> Self {
        Self { records }
    }

    pub fn all_markets(&self) -> &[MarketRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// An empty catalog is valid — every resolution simply returns no match.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CatalogHandle — atomic snapshot publication
// ---------------------------------------------------------------------------

/// Shared handle for refreshing the catalog without disturbing readers.
/// `swap` publishes a complete new snapshot by replacing the inner Arc, so an
/// in-flight resolution keeps the snapshot it started with and never sees a
/// half-updated record set.
pub struct CatalogHandle {
    inner: RwLock<Arc<MarketCatalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: MarketCatalog) -> Self {
        Self {
            inner: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Current snapshot. Cheap — clones the Arc, not the records.
    pub fn snapshot(&self) -> Arc<MarketCatalog> {
        Arc::clone(&self.inner.read().unwrap_or_else(|e| e.into_inner()))
    }

    /// Publish a freshly loaded catalog as the new snapshot.
    pub fn swap(&self, catalog: MarketCatalog) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MarketRecord, MarketTier};

    fn record(region_id: i64) -> MarketRecord {
        MarketRecord {
            region_id,
            latitude: 40.0,
            longitude: -74.0,
            radius_miles: 50.0,
            size_rank: 1,
            tier: MarketTier::MajorMetro,
            city_state: "Test, NY".to_string(),
            monthly_rental_average: None,
            yoy_growth: None,
        }
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = MarketCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.all_markets().is_empty());
    }

    #[test]
    fn swap_does_not_disturb_existing_snapshot() {
        let handle = CatalogHandle::new(MarketCatalog::new(vec![record(1)]));
        let before = handle.snapshot();

        handle.swap(MarketCatalog::new(vec![record(2), record(3)]));

        // The old snapshot is unchanged; new readers see the refresh.
        assert_eq!(before.len(), 1);
        assert_eq!(before.all_markets()[0].region_id, 1);
        assert_eq!(handle.snapshot().len(), 2);
    }
}
