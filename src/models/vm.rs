//! Azure virtual machine data model.

use serde::{Deserialize, Serialize};

/// A virtual machine as returned by the Resource Graph query, an immutable
/// snapshot for the duration of one assessment run.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VirtualMachine {
    /// Full ARM resource ID.
    pub id: String,
    /// VM name.
    pub vm_name: String,
    /// Resource group containing the VM.
    pub resource_group: String,
    /// Azure region location.
    pub location: String,
    /// Size name, e.g. "Standard_D2s_v3".
    pub vm_size: String,
    /// OS type from the storage profile ("Linux"/"Windows").
    pub os_type: Option<String>,
    /// Managed OS disk resource ID (None for unmanaged OS disks).
    pub os_disk_id: Option<String>,
    /// Declared OS disk size in GiB.
    pub os_disk_size_gb: Option<u64>,
    /// Data disk references, in the order the VM declares them (None when
    /// the storage profile carries no data disk array).
    pub data_disks: Option<Vec<DataDiskRef>>,
    /// Power state display string (None if the status query gave nothing).
    pub power_state: Option<String>,
    /// Azure subscription ID.
    pub subscription_id: String,
    /// Azure subscription display name.
    pub subscription_name: Option<String>,
}

/// One data disk reference from a VM's storage profile.
///
/// Field names follow the raw `properties.storageProfile.dataDisks` shape so
/// the Resource Graph array deserializes without reshaping.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DataDiskRef {
    /// Disk name.
    pub name: Option<String>,
    /// Declared size in GiB.
    #[serde(rename = "diskSizeGB")]
    pub size_gb: Option<u64>,
    /// Managed disk reference (None for unmanaged disks).
    #[serde(rename = "managedDisk")]
    pub managed_disk: Option<ManagedDiskRef>,
    /// Logical unit number.
    pub lun: Option<i64>,
}

/// Managed disk reference inside a data disk entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ManagedDiskRef {
    /// Full ARM resource ID of the managed disk.
    pub id: Option<String>,
}

impl Default for VirtualMachine {
    fn default() -> Self {
        VirtualMachine {
            id: "blank".to_string(),
            vm_name: "blank".to_string(),
            resource_group: "blank".to_string(),
            location: "blank".to_string(),
            vm_size: "blank".to_string(),
            os_type: None,
            os_disk_id: None,
            os_disk_size_gb: None,
            data_disks: None,
            power_state: None,
            subscription_id: "blank".to_string(),
            subscription_name: None,
        }
    }
}
