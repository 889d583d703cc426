//! Network interface and public IP address data models.

use serde::{Deserialize, Serialize};

/// A network interface with an attached VM.
///
/// The fetch query filters out interfaces with no owning VM, so `vm_id` is
/// always populated here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NetworkInterface {
    /// Full ARM resource ID.
    pub id: String,
    /// Resource ID of the VM this interface is attached to.
    pub vm_id: String,
    /// Resource ID of the interface's primary IP configuration.
    pub ip_configuration_id: Option<String>,
    /// Resource ID of the subnet the IP configuration sits in.
    pub subnet_id: Option<String>,
    /// Private IP address.
    pub private_ip: Option<String>,
    /// Network security group attached to the interface.
    pub nsg_id: Option<String>,
    /// Public IP address resource referenced by the IP configuration.
    pub public_ip_id: Option<String>,
}

/// A public IP address resource.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublicAddress {
    /// Full ARM resource ID.
    pub id: String,
    /// IP configuration the address is bound to.
    pub ip_configuration_id: Option<String>,
    /// The literal address (None while unallocated).
    pub ip_address: Option<String>,
}
