//! VM size capability data model.

use serde::{Deserialize, Serialize};

/// Hardware profile of a VM size as reported by one region's catalog.
///
/// The same size name may report different or absent capability data in
/// different regions, so these are only meaningful together with the region
/// they were fetched for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SizeCapability {
    /// Size name, e.g. "Standard_D2s_v3".
    pub name: String,
    /// Number of virtual CPU cores.
    pub cores: u32,
    /// Memory in GiB.
    pub memory_gb: f64,
}
