//! Identifier-keyed disk lookup.

use crate::models::Disk;
use std::collections::HashMap;

/// Lookup over all managed disks in a subscription, built once from the
/// full disk enumeration.
///
/// Keys are lowercased ARM resource IDs; Azure reports inconsistent
/// `resourceGroups` casing between APIs, so lookups are case-insensitive.
pub struct DiskIndex<'a> {
    disks: HashMap<String, &'a Disk>,
}

impl<'a> DiskIndex<'a> {
    /// Build the index from a subscription's disk enumeration.
    pub fn build(disks: &'a [Disk]) -> DiskIndex<'a> {
        let mut index = HashMap::with_capacity(disks.len());
        for disk in disks {
            index.insert(disk.id.to_lowercase(), disk);
        }
        DiskIndex { disks: index }
    }

    /// Look up a disk by resource ID.
    ///
    /// `None` is a normal outcome: a VM's disk reference may point at an
    /// unmanaged or cross-subscription disk that the enumeration never saw.
    pub fn lookup(&self, disk_id: &str) -> Option<&Disk> {
        self.disks.get(&disk_id.to_lowercase()).copied()
    }

    /// Number of indexed disks.
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// True when the subscription had no managed disks.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }
}
