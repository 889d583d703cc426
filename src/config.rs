//! Tunable constants and fixed output placeholders.

/// Base unit for rate-limit pauses between Azure calls, in milliseconds.
pub const SLEEP_MSEC: u64 = 200;

/// Page size for Azure Resource Graph queries.
pub const GRAPH_PAGE_SIZE: u32 = 50;

/// Placeholder for capability fields when a size is absent from its
/// region's catalog.
pub const NOT_AVAILABLE: &str = "N/A";

/// Tier placeholder for a disk reference that does not resolve in the
/// disk index (unmanaged or cross-subscription disk).
pub const UNMANAGED_TIER: &str = "unmanaged";

/// Placeholder for a hierarchical resource path that does not parse.
pub const UNPARSEABLE_PATH: &str = "unparseable";
