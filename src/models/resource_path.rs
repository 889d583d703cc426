//! Structured parsing of ARM resource-ID paths.
//!
//! Hierarchical resource IDs like
//! `/subscriptions/<id>/resourceGroups/<rg>/providers/Microsoft.Network/virtualNetworks/<vnet>/subnets/<snet>`
//! are alternating collection/name pairs. Parsing them once into a
//! [`ResourcePath`] replaces scattered string splitting and gives malformed
//! paths a defined outcome: [`ResourcePath::parse`] returns `None` and the
//! caller substitutes a placeholder.

/// A parsed ARM resource-ID path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePath {
    /// (collection, name) pairs in path order, e.g.
    /// `("subscriptions", "<id>")`, `("virtualNetworks", "<vnet>")`.
    segments: Vec<(String, String)>,
}

impl ResourcePath {
    /// Parse a resource ID into collection/name pairs.
    ///
    /// Returns `None` when the path is empty or has an odd number of
    /// segments (a collection with no name), rather than propagating an
    /// error.
    pub fn parse(path: &str) -> Option<ResourcePath> {
        let parts: Vec<&str> = path
            .split('/')
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() || parts.len() % 2 != 0 {
            return None;
        }

        let segments = parts
            .chunks(2)
            .map(|pair| (pair[0].to_string(), pair[1].to_string()))
            .collect();

        Some(ResourcePath { segments })
    }

    /// Name under the given collection segment, compared case-insensitively
    /// (Azure mixes e.g. `resourceGroups`/`resourcegroups` between APIs).
    pub fn name_of(&self, collection: &str) -> Option<&str> {
        self.segments
            .iter()
            .find(|(coll, _)| coll.eq_ignore_ascii_case(collection))
            .map(|(_, name)| name.as_str())
    }

    /// Name of the last segment, i.e. the resource itself.
    pub fn resource_name(&self) -> Option<&str> {
        self.segments.last().map(|(_, name)| name.as_str())
    }
}

/// Extract the trailing resource name from a path, with a fallback for
/// paths that do not parse.
pub fn leaf_name_or<'a>(path: &'a str, fallback: &'a str) -> String {
    match ResourcePath::parse(path) {
        Some(parsed) => parsed
            .resource_name()
            .unwrap_or(fallback)
            .to_string(),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBNET_ID: &str = "/subscriptions/0000-1111/resourceGroups/rg-prod/providers/Microsoft.Network/virtualNetworks/vnet-hub/subnets/snet-app";

    #[test]
    fn test_parse_subnet_path() {
        let path = ResourcePath::parse(SUBNET_ID).expect("subnet path should parse");
        assert_eq!(path.name_of("virtualNetworks"), Some("vnet-hub"));
        assert_eq!(path.name_of("subnets"), Some("snet-app"));
        assert_eq!(path.name_of("resourceGroups"), Some("rg-prod"));
        assert_eq!(path.resource_name(), Some("snet-app"));
    }

    #[test]
    fn test_parse_case_insensitive_collections() {
        let id = "/subscriptions/0000/resourcegroups/rg-x/providers/Microsoft.Compute/disks/disk-1";
        let path = ResourcePath::parse(id).expect("disk path should parse");
        assert_eq!(path.name_of("resourceGroups"), Some("rg-x"));
        assert_eq!(path.name_of("disks"), Some("disk-1"));
    }

    #[test]
    fn test_parse_malformed_paths() {
        assert_eq!(ResourcePath::parse(""), None);
        assert_eq!(ResourcePath::parse("/"), None);
        // odd segment count: a collection with no name
        assert_eq!(ResourcePath::parse("/subscriptions/0000/resourceGroups"), None);
    }

    #[test]
    fn test_name_of_missing_collection() {
        let path = ResourcePath::parse(SUBNET_ID).unwrap();
        assert_eq!(path.name_of("networkSecurityGroups"), None);
    }

    #[test]
    fn test_leaf_name_or() {
        assert_eq!(leaf_name_or(SUBNET_ID, "none"), "snet-app");
        assert_eq!(leaf_name_or("not-a-path", "none"), "none");
    }
}
