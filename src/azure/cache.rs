//! Snapshot cache for fetched inventory data.
//!
//! Caching a subscription's raw collections to a dated JSON file avoids
//! repeated Resource Graph queries while iterating on a report.

use super::graph;
use crate::models::{Disk, NetworkInterface, PublicAddress, VirtualMachine};
use chrono;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// All raw collections fetched for one subscription, as one unit.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct InventorySnapshot {
    /// Virtual machines, in enumeration order.
    pub vms: Vec<VirtualMachine>,
    /// Managed disks.
    pub disks: Vec<Disk>,
    /// VM-attached network interfaces.
    pub nics: Vec<NetworkInterface>,
    /// Public IP addresses.
    pub public_ips: Vec<PublicAddress>,
}

/// Read a subscription's inventory snapshot from a cache file, or fetch it
/// from Azure if the cache doesn't exist.
///
/// # Arguments
/// * `subscription_id` - The subscription to snapshot
/// * `cache_file` - Optional path to a specific cache file. If None, uses
///   default dated naming.
///
/// # Returns
/// * `Ok(InventorySnapshot)` - The snapshot from cache or Azure
/// * `Err` - If a cache file was specified but doesn't exist, or a fetch fails
pub fn read_inventory_cache(
    subscription_id: &str,
    cache_file: Option<&str>,
) -> Result<InventorySnapshot, Box<dyn Error>> {
    let now = chrono::Utc::now().with_timezone(&chrono_tz::Pacific::Auckland);

    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => format!(
            "inventory_cache_{subscription_id}_{}.json",
            now.format("%Y-%m-%d")
        ),
    };

    let snapshot = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            serde_json::from_str(&json).map_err(|e| format!("Error parsing cache JSON: {e}"))?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let snapshot = fetch_snapshot(subscription_id)?;
            log::info!("Fetched inventory snapshot from Azure");

            let json = serde_json::to_string(&snapshot)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing snapshot to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            snapshot
        }
    };

    Ok(snapshot)
}

/// Fetch all four resource collections for one subscription.
fn fetch_snapshot(subscription_id: &str) -> Result<InventorySnapshot, Box<dyn Error>> {
    Ok(InventorySnapshot {
        vms: graph::fetch_vms(subscription_id)?,
        disks: graph::fetch_disks(subscription_id)?,
        nics: graph::fetch_nics(subscription_id)?,
        public_ips: graph::fetch_public_ips(subscription_id)?,
    })
}
