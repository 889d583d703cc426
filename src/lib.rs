// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod azure;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use azure::AzCliSizeCatalog;
use models::Subscription;
use processing::{ReportBatch, SizeCatalogSource, SkuCapabilityCache};
use std::collections::HashSet;
use std::error::Error;

/// Enumerate the subscriptions visible to the signed-in principal.
///
/// Failure here is run-level fatal: with no subscription list there is
/// nothing to assess.
pub fn get_subscriptions() -> Result<Vec<Subscription>, Box<dyn Error>> {
    let subscriptions = azure::fetch_subscriptions()?;
    log::info!("Found {} subscriptions", subscriptions.len());
    Ok(subscriptions)
}

/// Assess one subscription: snapshot its collections, enrich every VM,
/// assemble the batch.
///
/// The SKU cache is shared across subscriptions within a run, since
/// capability catalogs are keyed by region.
pub fn assess_subscription<S: SizeCatalogSource>(
    subscription: &Subscription,
    sku_cache: &mut SkuCapabilityCache<S>,
    cache_file: Option<&str>,
) -> Result<ReportBatch, Box<dyn Error>> {
    let snapshot = azure::read_inventory_cache(&subscription.id, cache_file)?;
    let (records, diagnostics) = processing::enrich_vms(
        &snapshot.vms,
        &snapshot.disks,
        &snapshot.nics,
        &snapshot.public_ips,
        sku_cache,
    );
    Ok(processing::assemble(subscription, records, diagnostics))
}

/// Return an error if any VM appears twice in a batch.
pub fn check_for_duplicate_records(batch: &ReportBatch) -> Result<(), Box<dyn Error>> {
    let mut seen = HashSet::new();

    for record in batch.records.iter() {
        if !seen.insert(record.vm_id.to_lowercase()) {
            return Err(format!("Duplicate record found: {:?}", record.vm_id).into());
        }
    }
    Ok(())
}

/// Run the full assessment: one CSV report per subscription.
///
/// A subscription whose snapshot cannot be fetched is skipped with an error
/// log; the run continues with the next one.
pub async fn run_inventory() -> Result<(), Box<dyn Error>> {
    let subscriptions = get_subscriptions()?;
    let mut sku_cache = SkuCapabilityCache::new(AzCliSizeCatalog);

    for subscription in &subscriptions {
        let batch = match assess_subscription(subscription, &mut sku_cache, None) {
            Ok(batch) => batch,
            Err(e) => {
                log::error!(
                    "Skipping subscription '{name}' ({id}): {e}",
                    name = subscription.subscription_name,
                    id = subscription.id
                );
                continue;
            }
        };
        check_for_duplicate_records(&batch)?;
        output::print_report(&batch).await?;
    }

    Ok(())
}
