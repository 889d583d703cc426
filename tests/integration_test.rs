//! Integration tests for azure-vm-inventory
//!
//! These tests verify the complete workflow from reading a cached snapshot
//! through enrichment to an assembled report batch.

use azure_vm_inventory::{
    azure::read_inventory_cache,
    check_for_duplicate_records,
    models::{SizeCapability, Subscription},
    processing::{assemble, enrich_vms, SizeCatalogSource, SkuCapabilityCache},
};
use std::error::Error;

/// Catalog source serving two regions; the legacy size of the test data is
/// absent everywhere.
struct TestCatalog;

impl SizeCatalogSource for TestCatalog {
    fn fetch_region(&self, region: &str) -> Result<Vec<SizeCapability>, Box<dyn Error>> {
        let caps = |entries: &[(&str, u32, f64)]| -> Vec<SizeCapability> {
            entries
                .iter()
                .map(|(name, cores, memory_gb)| SizeCapability {
                    name: name.to_string(),
                    cores: *cores,
                    memory_gb: *memory_gb,
                })
                .collect()
        };
        match region {
            "eastus" => Ok(caps(&[
                ("Standard_B2s", 2, 4.0),
                ("Standard_D2s_v3", 2, 8.0),
            ])),
            "westeurope" => Ok(caps(&[("Standard_D4s_v3", 4, 16.0)])),
            other => Err(format!("no catalog fixture for region {other}").into()),
        }
    }
}

fn test_subscription() -> Subscription {
    Subscription {
        id: "0000-2222".to_string(),
        subscription_name: "sub-app".to_string(),
        tenant_id: Some("tenant-1".to_string()),
    }
}

#[test]
fn test_full_workflow_with_cache() {
    let snapshot = read_inventory_cache(
        "0000-2222",
        Some("src/tests/test_data/inventory_test_cache_02.json"),
    )
    .expect("Failed to read inventory cache");

    assert_eq!(snapshot.vms.len(), 3, "Expected 3 VMs in test data");

    let mut sku_cache = SkuCapabilityCache::new(TestCatalog);
    let (records, diagnostics) = enrich_vms(
        &snapshot.vms,
        &snapshot.disks,
        &snapshot.nics,
        &snapshot.public_ips,
        &mut sku_cache,
    );

    // Two regions in the data, so exactly two catalog fetches.
    assert_eq!(sku_cache.fetch_count(), 2, "One catalog fetch per region");

    // Every VM yields exactly one record, in enumeration order.
    assert_eq!(records.len(), 3);
    let names: Vec<&str> = records.iter().map(|r| r.vm_name.as_str()).collect();
    assert_eq!(names, vec!["vm-app-a1", "vm-app-a2", "vm-app-b1"]);
    assert!(diagnostics.is_empty(), "No fetch failures in this scenario");

    let batch = assemble(&test_subscription(), records, diagnostics);
    check_for_duplicate_records(&batch).expect("Found unexpected duplicate records");

    // Both eastus VMs share one cached size lookup.
    assert_eq!(batch.records[0].cores, "2");
    assert_eq!(batch.records[0].memory_gb, "4");
    assert_eq!(batch.records[1].cores, "2");
    assert_eq!(batch.records[1].memory_gb, "4");

    // The westeurope VM runs a size its region's catalog doesn't list.
    assert_eq!(batch.records[2].cores, "N/A");
    assert_eq!(batch.records[2].memory_gb, "N/A");

    // Network identity resolved for a1, unparseable subnet path on b1.
    assert_eq!(batch.records[0].virtual_network, "vnet-app");
    assert_eq!(batch.records[0].subnet, "snet-app");
    assert_eq!(batch.records[0].public_ip, "52.170.20.21");
    assert_eq!(batch.records[2].virtual_network, "unparseable");
    assert_eq!(batch.records[2].public_ip, "");

    // a2 has no NIC at all but still a complete record.
    assert_eq!(batch.records[1].private_ip, "");
    assert_eq!(batch.records[1].public_ip, "");

    // Disk aggregation: a2's OS disk is not in the enumeration, so its tier
    // falls back to the unmanaged sentinel while the size still counts.
    assert_eq!(batch.records[1].disk_count, 1);
    assert_eq!(batch.records[1].total_disk_gb, 30);
    assert_eq!(batch.records[1].disk_tiers[0], "vm-app-a2-os, 30 GiB, unmanaged");

    // b1: managed OS disk (64) plus an unmanaged data disk (512).
    assert_eq!(batch.records[2].disk_count, 2);
    assert_eq!(batch.records[2].total_disk_gb, 576);
    assert_eq!(batch.records[2].disk_tiers[0], "vm-app-b1-os, 64 GiB, StandardSSD_LRS");
    assert_eq!(batch.records[2].disk_tiers[1], "vm-app-b1-data0, 512 GiB, unmanaged");

    // Power state passes through, empty when unknown.
    assert_eq!(batch.records[0].power_state, "VM running");
    assert_eq!(batch.records[1].power_state, "");
}

#[test]
fn test_small_cache_file() {
    let snapshot = read_inventory_cache(
        "0000-1111",
        Some("src/tests/test_data/inventory_test_cache_01.json"),
    )
    .expect("Failed to read inventory cache");

    let mut sku_cache = SkuCapabilityCache::new(TestCatalog);
    let (records, diagnostics) = enrich_vms(
        &snapshot.vms,
        &snapshot.disks,
        &snapshot.nics,
        &snapshot.public_ips,
        &mut sku_cache,
    );

    assert_eq!(records.len(), 1, "Expected 1 record");
    assert!(diagnostics.is_empty());
    let record = &records[0];
    assert_eq!(record.vm_name, "vm-web-01");
    assert_eq!(record.cores, "2");
    assert_eq!(record.memory_gb, "8");
    // OS disk 30 GiB + data disks of 128 GiB and 256 GiB
    assert_eq!(record.total_disk_gb, 414);
    assert_eq!(record.disk_count, 3);
    // The second data disk is absent from the disk enumeration.
    assert_eq!(record.disk_tiers[2], "vm-web-01-data1, 256 GiB, unmanaged");
    assert_eq!(record.public_ip, "52.170.10.11");
    assert_eq!(record.nsg, "nsg-frontend");
}

#[test]
fn test_failing_region_is_non_fatal() {
    // Re-point the only VM at a region the catalog source cannot serve: the
    // record is still produced, with a diagnostic tagged to the VM.
    let snapshot = read_inventory_cache(
        "0000-1111",
        Some("src/tests/test_data/inventory_test_cache_01.json"),
    )
    .expect("Failed to read inventory cache");

    let mut vms = snapshot.vms.clone();
    vms[0].location = "australiaeast".to_string();

    let mut sku_cache = SkuCapabilityCache::new(TestCatalog);
    let (records, diagnostics) = enrich_vms(
        &vms,
        &snapshot.disks,
        &snapshot.nics,
        &snapshot.public_ips,
        &mut sku_cache,
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].cores, "N/A");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].vm_id.as_deref(), Some(vms[0].id.as_str()));
}
