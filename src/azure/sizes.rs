//! Per-region VM size capability catalog fetch.
//!
//! `az vm list-sizes` reports the hardware profile of every size offered in
//! one region. The raw listing is reduced to [`SizeCapability`] entries;
//! entries with missing name or core data are dropped rather than failing
//! the whole catalog.

use super::cli;
use crate::processing::SizeCatalogSource;
use crate::models::SizeCapability;
use serde::Deserialize;
use std::error::Error;

/// One raw row from `az vm list-sizes`. Every field is optional so a
/// malformed entry degrades to a skipped row instead of a parse failure.
#[derive(Deserialize, Debug)]
struct VmSizeEntry {
    name: Option<String>,
    #[serde(rename = "numberOfCores")]
    number_of_cores: Option<u32>,
    #[serde(rename = "memoryInMb")]
    memory_in_mb: Option<f64>,
}

/// Size catalog backed by the Azure CLI.
pub struct AzCliSizeCatalog;

impl SizeCatalogSource for AzCliSizeCatalog {
    fn fetch_region(&self, region: &str) -> Result<Vec<SizeCapability>, Box<dyn Error>> {
        let cmd = format!("az vm list-sizes --location {region} --output json");
        let output = cli::run(&cmd)?;
        let entries: Vec<VmSizeEntry> =
            cli::parse_json(&output, &format!("size catalog for region {region}"))?;

        let total = entries.len();
        let catalog: Vec<SizeCapability> = entries
            .into_iter()
            .filter_map(|entry| match (entry.name, entry.number_of_cores) {
                (Some(name), Some(cores)) => Some(SizeCapability {
                    name,
                    cores,
                    memory_gb: entry.memory_in_mb.unwrap_or(0.0) / 1024.0,
                }),
                (name, _) => {
                    log::debug!("Skipping incomplete size entry {name:?} in region {region}");
                    None
                }
            })
            .collect();

        log::info!(
            "Size catalog for region {region}: {kept} of {total} entries usable",
            kept = catalog.len(),
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_entry_parse() {
        let raw = r#"[
            {"maxDataDiskCount": 4, "memoryInMb": 8192, "name": "Standard_D2s_v3", "numberOfCores": 2, "osDiskSizeInMb": 1047552, "resourceDiskSizeInMb": 16384},
            {"maxDataDiskCount": 2, "memoryInMb": 3584, "name": "Standard_DS1_v2", "numberOfCores": 1, "osDiskSizeInMb": 1047552, "resourceDiskSizeInMb": 7168}
        ]"#;
        let entries: Vec<VmSizeEntry> = cli::parse_json(raw, "test sizes").expect("should parse");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name.as_deref(), Some("Standard_D2s_v3"));
        assert_eq!(entries[0].number_of_cores, Some(2));
        assert_eq!(entries[1].memory_in_mb, Some(3584.0));
    }

    #[test]
    fn test_size_entry_tolerates_gaps() {
        let raw = r#"[
            {"name": "Standard_B2s", "numberOfCores": 2, "memoryInMb": 4096},
            {"name": null, "numberOfCores": 8, "memoryInMb": 32768},
            {"name": "Standard_Broken", "numberOfCores": null, "memoryInMb": null}
        ]"#;
        let entries: Vec<VmSizeEntry> = cli::parse_json(raw, "test sizes").expect("should parse");
        assert_eq!(entries.len(), 3);
        assert!(entries[1].name.is_none());
        assert!(entries[2].number_of_cores.is_none());
    }
}
