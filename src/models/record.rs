//! The enriched per-VM output row.

use serde::{Deserialize, Serialize};

/// Flat output record, exactly one per virtual machine.
///
/// Every field is always populated: cross-references that fail to resolve
/// take their placeholder value instead of being omitted, so downstream
/// consumers see a uniform schema.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EnrichedVmRecord {
    /// Full ARM resource ID of the VM.
    pub vm_id: String,
    /// VM name.
    pub vm_name: String,
    /// Resource group containing the VM.
    pub resource_group: String,
    /// Azure region location.
    pub location: String,
    /// Size name.
    pub vm_size: String,
    /// OS type, empty when unknown.
    pub os_type: String,
    /// Core count, or "N/A" when the size is absent from the region catalog.
    pub cores: String,
    /// Memory in GiB, or "N/A".
    pub memory_gb: String,
    /// Power state display string, empty when unknown.
    pub power_state: String,
    /// Number of disks counted into `total_disk_gb` (OS disk plus data disks).
    pub disk_count: usize,
    /// Aggregate declared disk capacity in GiB.
    pub total_disk_gb: u64,
    /// One "name, size, tier" annotation per disk, in VM declaration order.
    pub disk_tiers: Vec<String>,
    /// Virtual network name, or "unparseable" when the subnet path is malformed.
    pub virtual_network: String,
    /// Subnet name, or "unparseable".
    pub subnet: String,
    /// Private IP address, empty when none.
    pub private_ip: String,
    /// Public IP address, empty when no address resolves.
    pub public_ip: String,
    /// Network security group name, empty when none.
    pub nsg: String,
    /// Azure subscription display name.
    pub subscription_name: String,
    /// Azure subscription ID.
    pub subscription_id: String,
}
