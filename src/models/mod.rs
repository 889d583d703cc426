//! Domain models for the VM inventory.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`Subscription`] - Azure subscription identity
//! - [`VirtualMachine`] - virtual machine snapshot with disk references
//! - [`Disk`] - managed disk
//! - [`NetworkInterface`] and [`PublicAddress`] - network entities
//! - [`SizeCapability`] - hardware profile of a VM size in one region
//! - [`EnrichedVmRecord`] - the flat output row, one per VM
//! - [`ResourcePath`] - parsed ARM resource-ID path

mod disk;
mod network;
mod record;
mod resource_path;
mod sku;
mod subscription;
mod vm;

// Re-export public types
pub use disk::Disk;
pub use network::{NetworkInterface, PublicAddress};
pub use record::EnrichedVmRecord;
pub use resource_path::{leaf_name_or, ResourcePath};
pub use sku::SizeCapability;
pub use subscription::Subscription;
pub use vm::{DataDiskRef, ManagedDiskRef, VirtualMachine};
