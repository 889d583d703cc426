//! Per-VM enrichment correlation.
//!
//! Joins one virtual machine against the disk index, the size capability
//! cache, the network interface collection and the public address
//! collection, producing exactly one [`EnrichedVmRecord`]. Cross-references
//! that fail to resolve become placeholder values, never errors: every VM in
//! the input collection yields a record.

use crate::config;
use crate::models::{
    Disk, EnrichedVmRecord, NetworkInterface, PublicAddress, ResourcePath, VirtualMachine,
};
use crate::processing::{DiskIndex, SizeCatalogSource, SkuCapabilityCache};

/// Non-fatal problem encountered while enriching, reported to the caller
/// alongside the records.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// VM the problem is tagged with, when it is VM-scoped.
    pub vm_id: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// Enrich every VM of one subscription, in enumeration order.
///
/// # Returns
/// One record per input VM plus the non-fatal diagnostics collected on the
/// way.
pub fn enrich_vms<S: SizeCatalogSource>(
    vms: &[VirtualMachine],
    disks: &[Disk],
    nics: &[NetworkInterface],
    public_ips: &[PublicAddress],
    sku_cache: &mut SkuCapabilityCache<S>,
) -> (Vec<EnrichedVmRecord>, Vec<Diagnostic>) {
    let disk_index = DiskIndex::build(disks);
    log::info!(
        "Enriching {vm_count} VMs against {disk_count} indexed disks",
        vm_count = vms.len(),
        disk_count = disk_index.len()
    );

    let mut records = Vec::with_capacity(vms.len());
    let mut diagnostics = Vec::new();
    for vm in vms {
        records.push(enrich_vm(
            vm,
            &disk_index,
            sku_cache,
            nics,
            public_ips,
            &mut diagnostics,
        ));
    }
    (records, diagnostics)
}

/// Join one VM's cross-references into a flat output record.
pub fn enrich_vm<S: SizeCatalogSource>(
    vm: &VirtualMachine,
    disk_index: &DiskIndex,
    sku_cache: &mut SkuCapabilityCache<S>,
    nics: &[NetworkInterface],
    public_ips: &[PublicAddress],
    diagnostics: &mut Vec<Diagnostic>,
) -> EnrichedVmRecord {
    // 1. Size capability via the per-region cache.
    let capability = match sku_cache.resolve(&vm.location, &vm.vm_size) {
        Ok(found) => found.cloned(),
        Err(e) => {
            log::warn!("Capability lookup failed for VM {}: {e}", vm.vm_name);
            diagnostics.push(Diagnostic {
                vm_id: Some(vm.id.clone()),
                message: format!("size capability unavailable: {e}"),
            });
            None
        }
    };
    let (cores, memory_gb) = match &capability {
        Some(cap) => (cap.cores.to_string(), format_memory_gb(cap.memory_gb)),
        None => (
            config::NOT_AVAILABLE.to_string(),
            config::NOT_AVAILABLE.to_string(),
        ),
    };

    // 2. OS disk: tier from the index, declared size into the total.
    let mut disk_count = 0;
    let mut total_disk_gb = 0;
    let mut disk_tiers = Vec::new();
    if vm.os_disk_id.is_some() || vm.os_disk_size_gb.is_some() {
        let size_gb = vm.os_disk_size_gb.unwrap_or(0);
        let resolved = vm.os_disk_id.as_deref().and_then(|id| disk_index.lookup(id));
        let name = match resolved {
            Some(disk) => disk.disk_name.clone(),
            None => vm
                .os_disk_id
                .as_deref()
                .map(|id| crate::models::leaf_name_or(id, "osdisk"))
                .unwrap_or_else(|| "osdisk".to_string()),
        };
        disk_count += 1;
        total_disk_gb += size_gb;
        disk_tiers.push(format!("{name}, {size_gb} GiB, {tier}", tier = tier_of(resolved)));
    }

    // 3. Data disks, in the VM's own declaration order.
    for data_disk in vm.data_disks.as_deref().unwrap_or_default() {
        let size_gb = data_disk.size_gb.unwrap_or(0);
        let disk_id = data_disk
            .managed_disk
            .as_ref()
            .and_then(|managed| managed.id.as_deref());
        let resolved = disk_id.and_then(|id| disk_index.lookup(id));
        let name = data_disk.name.as_deref().unwrap_or("disk");
        disk_count += 1;
        total_disk_gb += size_gb;
        disk_tiers.push(format!("{name}, {size_gb} GiB, {tier}", tier = tier_of(resolved)));
    }

    // 4. First interface owned by this VM supplies the network identity.
    let nic = nics
        .iter()
        .find(|nic| nic.vm_id.eq_ignore_ascii_case(&vm.id));

    let (virtual_network, subnet) = match nic.and_then(|nic| nic.subnet_id.as_deref()) {
        Some(subnet_id) => match ResourcePath::parse(subnet_id) {
            Some(path) => (
                path.name_of("virtualNetworks")
                    .unwrap_or(config::UNPARSEABLE_PATH)
                    .to_string(),
                path.name_of("subnets")
                    .unwrap_or(config::UNPARSEABLE_PATH)
                    .to_string(),
            ),
            None => {
                log::info!("Unparseable subnet path on VM {}: {subnet_id}", vm.vm_name);
                (
                    config::UNPARSEABLE_PATH.to_string(),
                    config::UNPARSEABLE_PATH.to_string(),
                )
            }
        },
        None => (String::new(), String::new()),
    };

    // 5. Public address whose IP configuration matches the interface's.
    // First match in fetch order wins.
    let public_ip = nic
        .and_then(|nic| nic.ip_configuration_id.as_deref())
        .and_then(|ip_config| {
            public_ips.iter().find(|public_ip| {
                public_ip
                    .ip_configuration_id
                    .as_deref()
                    .is_some_and(|id| id.eq_ignore_ascii_case(ip_config))
            })
        })
        .and_then(|public_ip| public_ip.ip_address.clone())
        .unwrap_or_default();

    let nsg = nic
        .and_then(|nic| nic.nsg_id.as_deref())
        .map(|id| crate::models::leaf_name_or(id, config::UNPARSEABLE_PATH))
        .unwrap_or_default();

    // 6. One complete record, placeholders for everything unresolved.
    EnrichedVmRecord {
        vm_id: vm.id.clone(),
        vm_name: vm.vm_name.clone(),
        resource_group: vm.resource_group.clone(),
        location: vm.location.clone(),
        vm_size: vm.vm_size.clone(),
        os_type: vm.os_type.clone().unwrap_or_default(),
        cores,
        memory_gb,
        power_state: vm.power_state.clone().unwrap_or_default(),
        disk_count,
        total_disk_gb,
        disk_tiers,
        virtual_network,
        subnet,
        private_ip: nic
            .and_then(|nic| nic.private_ip.clone())
            .unwrap_or_default(),
        public_ip,
        nsg,
        subscription_name: vm.subscription_name.clone().unwrap_or_default(),
        subscription_id: vm.subscription_id.clone(),
    }
}

/// Tier name of a resolved disk, or the unmanaged sentinel.
fn tier_of(resolved: Option<&Disk>) -> String {
    resolved
        .and_then(|disk| disk.tier.clone())
        .unwrap_or_else(|| config::UNMANAGED_TIER.to_string())
}

/// Render memory as "8" rather than "8.0", keeping fractional sizes like
/// "3.5" intact.
fn format_memory_gb(memory_gb: f64) -> String {
    if memory_gb.fract() == 0.0 {
        format!("{}", memory_gb as u64)
    } else {
        format!("{memory_gb}")
    }
}
