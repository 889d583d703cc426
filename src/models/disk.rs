//! Azure managed disk data model.

use serde::{Deserialize, Serialize};

/// A managed disk from the subscription's disk enumeration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Disk {
    /// Full ARM resource ID.
    pub id: String,
    /// Disk name.
    pub disk_name: String,
    /// Capability tier name from the disk SKU, e.g. "Premium_LRS".
    pub tier: Option<String>,
    /// Declared size in GiB.
    pub size_gb: Option<u64>,
}
