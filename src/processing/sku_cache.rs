//! Per-region VM size capability cache.
//!
//! The first capability lookup in a region pulls that region's full size
//! catalog through a [`SizeCatalogSource`] and indexes it by size name;
//! every later lookup in the region is a pure map access. Capability data
//! is treated as static for the duration of a run, so entries are never
//! evicted or refreshed, and the cache is shared across subscriptions
//! (catalogs are keyed by region, not subscription).

use crate::models::SizeCapability;
use std::collections::HashMap;
use std::error::Error;

/// Source of one region's size capability catalog.
pub trait SizeCatalogSource {
    /// Fetch the full catalog for a region.
    fn fetch_region(&self, region: &str) -> Result<Vec<SizeCapability>, Box<dyn Error>>;
}

/// Lazily-populated (region, size name) -> capability cache.
pub struct SkuCapabilityCache<S: SizeCatalogSource> {
    source: S,
    /// Per-region catalogs, keyed by lowercased region then lowercased size
    /// name. A region that failed to fetch is present with an empty catalog
    /// so it is not fetched again.
    regions: HashMap<String, HashMap<String, SizeCapability>>,
    fetch_count: usize,
}

impl<S: SizeCatalogSource> SkuCapabilityCache<S> {
    /// Create an empty cache over the given catalog source.
    pub fn new(source: S) -> SkuCapabilityCache<S> {
        SkuCapabilityCache {
            source,
            regions: HashMap::new(),
            fetch_count: 0,
        }
    }

    /// Resolve a size name to its capability data in one region.
    ///
    /// # Returns
    /// * `Ok(Some(..))` - the size is in the region's catalog
    /// * `Ok(None)` - the region's catalog has no such size (deprecated or
    ///   legacy size); not an error
    /// * `Err` - the catalog fetch itself failed. Reported once per region:
    ///   the region is remembered as empty and later lookups return
    ///   `Ok(None)` without refetching.
    pub fn resolve(
        &mut self,
        region: &str,
        size: &str,
    ) -> Result<Option<&SizeCapability>, Box<dyn Error>> {
        let region_key = region.to_lowercase();

        if !self.regions.contains_key(&region_key) {
            self.fetch_count += 1;
            log::info!("Fetching size catalog for region: {region}");
            match self.source.fetch_region(region) {
                Ok(entries) => {
                    let catalog: HashMap<String, SizeCapability> = entries
                        .into_iter()
                        .map(|cap| (cap.name.to_lowercase(), cap))
                        .collect();
                    log::info!(
                        "Indexed {count} sizes for region {region}",
                        count = catalog.len()
                    );
                    self.regions.insert(region_key.clone(), catalog);
                }
                Err(e) => {
                    self.regions.insert(region_key.clone(), HashMap::new());
                    return Err(
                        format!("Size catalog fetch failed for region {region}: {e}").into(),
                    );
                }
            }
        }

        Ok(self.regions[&region_key].get(&size.to_lowercase()))
    }

    /// Number of catalog fetches performed, including failed attempts.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }
}
