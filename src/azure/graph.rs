//! Azure Resource Graph query execution.
//!
//! One KQL query per resource collection (subscriptions, virtual machines,
//! disks, network interfaces, public IP addresses), each paginated with
//! skip tokens.

use super::cli;
use crate::config;
use crate::models::{Disk, NetworkInterface, PublicAddress, Subscription, VirtualMachine};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Azure Graph query for subscription enumeration.
const SUBSCRIPTION_QUERY: &str = r#"resourcecontainers
        | where type == "microsoft.resources/subscriptions"
        | project id=subscriptionId, subscription_name=name, tenant_id=tenantId
        | sort by subscription_name asc"#;

/// Azure Graph query for virtual machines, with subscription display names
/// joined in.
const VM_QUERY: &str = r#"resources
        | where type == "microsoft.compute/virtualmachines"
        | project id
                ,vm_name=name
                ,resource_group=resourceGroup
                ,location=location
                ,vm_size=properties.hardwareProfile.vmSize
                ,os_type=properties.storageProfile.osDisk.osType
                ,os_disk_id=properties.storageProfile.osDisk.managedDisk.id
                ,os_disk_size_gb=properties.storageProfile.osDisk.diskSizeGB
                ,data_disks=properties.storageProfile.dataDisks
                ,power_state=properties.extended.instanceView.powerState.displayStatus
                ,subscription_id=subscriptionId
        | join kind=leftouter (
            resourcecontainers
                | where type == "microsoft.resources/subscriptions"
                | project subscription_id=subscriptionId, subscription_name=name
            ) on subscription_id
        | project id, vm_name, resource_group, location, vm_size, os_type, os_disk_id, os_disk_size_gb, data_disks, power_state, subscription_id, subscription_name
        | sort by vm_name asc"#;

/// Azure Graph query for managed disks.
const DISK_QUERY: &str = r#"resources
        | where type == "microsoft.compute/disks"
        | project id
                ,disk_name=name
                ,tier=sku.name
                ,size_gb=properties.diskSizeGB
        | sort by disk_name asc"#;

/// Azure Graph query for network interfaces. Interfaces with no attached VM
/// are filtered out here, so downstream correlation never sees them.
const NIC_QUERY: &str = r#"resources
        | where type == "microsoft.network/networkinterfaces"
        | where isnotempty(properties.virtualMachine.id)
        | mv-expand ipconfig=properties.ipConfigurations
        | project id
                ,vm_id=properties.virtualMachine.id
                ,ip_configuration_id=ipconfig.id
                ,subnet_id=ipconfig.properties.subnet.id
                ,private_ip=ipconfig.properties.privateIPAddress
                ,nsg_id=properties.networkSecurityGroup.id
                ,public_ip_id=ipconfig.properties.publicIPAddress.id
        | sort by id asc"#;

/// Azure Graph query for public IP addresses.
const PUBLIC_IP_QUERY: &str = r#"resources
        | where type == "microsoft.network/publicipaddresses"
        | project id
                ,ip_configuration_id=properties.ipConfiguration.id
                ,ip_address=properties.ipAddress
        | sort by id asc"#;

/// Response envelope from an Azure Graph query.
#[derive(Serialize, Deserialize, Debug)]
pub struct GraphData<T> {
    /// Rows returned.
    pub data: Vec<T>,
    /// Token for pagination (if more results available).
    pub skip_token: Option<String>,
    /// Total number of records matching the query.
    pub total_records: Option<u32>,
    /// Count of records in this response.
    pub count: i64,
}

impl<T> Default for GraphData<T> {
    fn default() -> Self {
        GraphData {
            data: Vec::new(),
            skip_token: None,
            total_records: None,
            count: 0,
        }
    }
}

/// Enumerate all subscriptions visible to the signed-in principal.
pub fn fetch_subscriptions() -> Result<Vec<Subscription>, Box<dyn Error>> {
    Ok(run_graph_query(SUBSCRIPTION_QUERY, None, "subscriptions")?.data)
}

/// Enumerate virtual machines in one subscription.
pub fn fetch_vms(subscription_id: &str) -> Result<Vec<VirtualMachine>, Box<dyn Error>> {
    Ok(run_graph_query(VM_QUERY, Some(subscription_id), "virtual machines")?.data)
}

/// Enumerate managed disks in one subscription.
pub fn fetch_disks(subscription_id: &str) -> Result<Vec<Disk>, Box<dyn Error>> {
    Ok(run_graph_query(DISK_QUERY, Some(subscription_id), "disks")?.data)
}

/// Enumerate VM-attached network interfaces in one subscription.
pub fn fetch_nics(subscription_id: &str) -> Result<Vec<NetworkInterface>, Box<dyn Error>> {
    Ok(run_graph_query(NIC_QUERY, Some(subscription_id), "network interfaces")?.data)
}

/// Enumerate public IP addresses in one subscription.
pub fn fetch_public_ips(subscription_id: &str) -> Result<Vec<PublicAddress>, Box<dyn Error>> {
    Ok(run_graph_query(PUBLIC_IP_QUERY, Some(subscription_id), "public addresses")?.data)
}

/// Execute an Azure Resource Graph query, following skip tokens until the
/// collection is exhausted.
fn run_graph_query<T: DeserializeOwned>(
    query: &str,
    subscription_id: Option<&str>,
    what: &str,
) -> Result<GraphData<T>, Box<dyn Error>> {
    let mut data: GraphData<T> = Default::default();
    let mut skip_token_param: String = String::new();
    let mut count_blocks_returned = 0;

    let subscription_param = match subscription_id {
        Some(id) => format!("--subscriptions {id}"),
        None => String::new(),
    };

    while skip_token_param != "--skip-token null" {
        let cmd = format!(
            "az graph query --first {page} {subscription_param} {skip_token_param} -q '{query}' --output json",
            page = config::GRAPH_PAGE_SIZE,
        );
        let output = cli::run(&cmd)?;

        let json_parsed: GraphData<T> = cli::parse_json(
            &output,
            &format!("{what} block {count_blocks_returned}"),
        )?;

        let skip_token_new = json_parsed
            .skip_token
            .clone()
            .unwrap_or_else(|| "null".to_string());
        let skip_token_new = format!("--skip-token {skip_token_new}");

        if skip_token_new == skip_token_param {
            return Err("Skip token not unique - possible infinite loop".into());
        }
        skip_token_param = skip_token_new;

        data.data.extend(json_parsed.data);

        let count = json_parsed.count;
        data.count += count;

        if let Some(block_records) = json_parsed.total_records {
            data.total_records = Some(block_records);
        }

        log::info!(
            "{what}: got block#{count_blocks_returned:2} record_count=+{count:3} => {total:3} skip_token='{skip_token_param}'",
            total = data.count,
        );

        // Rate limiting pause
        std::thread::sleep(std::time::Duration::from_millis(config::SLEEP_MSEC * 5));
        count_blocks_returned += 1;
    }

    log::info!(
        "Got {what} #{} == {} records from az graph query",
        data.count,
        data.data.len()
    );

    if data.count != data.data.len() as i64 {
        return Err(format!(
            "Count mismatch for {what}: count={} != data.len()={}",
            data.count,
            data.data.len()
        )
        .into());
    }

    Ok(data)
}
