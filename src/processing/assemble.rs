//! Per-subscription report assembly.
//!
//! Collects enriched records into one batch per subscription for the
//! serialization layer. Record order follows VM enumeration order; batches
//! across subscriptions are independent of each other.

use crate::models::{EnrichedVmRecord, Subscription};
use crate::processing::Diagnostic;

/// One subscription's worth of enriched records.
#[derive(Debug)]
pub struct ReportBatch {
    /// The subscription the records belong to.
    pub subscription: Subscription,
    /// Enriched records, in VM enumeration order.
    pub records: Vec<EnrichedVmRecord>,
    /// Non-fatal problems collected during enrichment.
    pub diagnostics: Vec<Diagnostic>,
}

/// Assemble one subscription's batch.
pub fn assemble(
    subscription: &Subscription,
    records: Vec<EnrichedVmRecord>,
    diagnostics: Vec<Diagnostic>,
) -> ReportBatch {
    log::info!(
        "Assembled report for '{name}': {count} records, {diag} diagnostics",
        name = subscription.subscription_name,
        count = records.len(),
        diag = diagnostics.len()
    );
    ReportBatch {
        subscription: subscription.clone(),
        records,
        diagnostics,
    }
}
