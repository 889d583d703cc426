//! Azure CLI interaction and data fetching.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - command execution for the Azure CLI
//! - [`graph`] - paginated Azure Resource Graph queries
//! - [`sizes`] - per-region VM size capability catalog
//! - [`cache`] - snapshot caching of fetched inventory data

mod cache;
mod cli;
mod graph;
mod sizes;

// Re-export public types and functions
pub use cache::{read_inventory_cache, InventorySnapshot};
pub use cli::run;
pub use graph::{
    fetch_disks, fetch_nics, fetch_public_ips, fetch_subscriptions, fetch_vms, GraphData,
};
pub use sizes::AzCliSizeCatalog;
