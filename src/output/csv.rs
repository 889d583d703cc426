//! CSV output formatting for enriched VM records.

use crate::models::EnrichedVmRecord;
use crate::processing::ReportBatch;
use colored::Colorize;
use itertools::Itertools;
use std::error::Error;

use super::terminal::{escape_csv_field, format_field};

/// Print one subscription's report batch as CSV to stdout.
///
/// # Arguments
/// * `batch` - The assembled batch to print
pub async fn print_report(batch: &ReportBatch) -> Result<(), Box<dyn Error>> {
    log::info!(
        "#Start print_report() for subscription '{}'",
        batch.subscription.subscription_name
    );
    log::info!("# Got VM record count = {}", batch.records.len());

    // Print CSV header
    println!(
        r#" "cnt",          "vm_name",   "resource_group",       "location",              "size",  "os", "cores", "memory_gb",  "power_state", "disks", "total_gb", "disk_tiers", "vnet", "subnet",     "private_ip",      "public_ip",  "nsg",  "subscription_name",                      "subscription_id",      "vm_id""#
    );

    for (i, record) in batch.records.iter().enumerate() {
        print_csv_row(i, record);
    }

    for diagnostic in &batch.diagnostics {
        log::warn!(
            "diagnostic vm={vm}: {message}",
            vm = diagnostic.vm_id.as_deref().unwrap_or("-"),
            message = diagnostic.message
        );
    }

    println!(
        "#{}# End report '{name}': {count} VMs, {diag} diagnostics",
        "NOTE".on_red(),
        name = batch.subscription.subscription_name,
        count = batch.records.len(),
        diag = batch.diagnostics.len()
    );

    Ok(())
}

/// Print a single CSV row.
fn print_csv_row(i: usize, record: &EnrichedVmRecord) {
    println!(
        r#"{j},{vm_name},{resource_group},{location},{size},{os},{cores},{memory_gb},{power_state},{disks},{total_gb},{disk_tiers},{vnet},{subnet},{private_ip},{public_ip},{nsg},{subscription_name},{subscription_id},{vm_id}"#,
        j = format_field(i + 1, 6),
        vm_name = format_field(&record.vm_name, 18),
        resource_group = format_field(&record.resource_group, 18),
        location = format_field(&record.location, 16),
        size = format_field(&record.vm_size, 20),
        os = format_field(&record.os_type, 5),
        cores = format_field(&record.cores, 7),
        memory_gb = format_field(&record.memory_gb, 11),
        power_state = format_field(&record.power_state, 14),
        disks = format_field(record.disk_count, 7),
        total_gb = format_field(record.total_disk_gb, 10),
        // Annotations contain commas, so this field is escaped rather than
        // width-aligned.
        disk_tiers = escape_csv_field(&record.disk_tiers.iter().join("; ")),
        vnet = format_field(&record.virtual_network, 6),
        subnet = format_field(&record.subnet, 8),
        private_ip = format_field(&record.private_ip, 16),
        public_ip = format_field(&record.public_ip, 16),
        nsg = format_field(&record.nsg, 6),
        subscription_name = format_field(&record.subscription_name, 21),
        subscription_id = format_field(&record.subscription_id, 39),
        vm_id = format_field(&record.vm_id, 12),
    );
}
