//! Azure subscription identity.

use serde::{Deserialize, Serialize};

/// An Azure subscription, the root scope for all other entities.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subscription {
    /// Subscription ID (GUID).
    pub id: String,
    /// Subscription display name.
    pub subscription_name: String,
    /// Tenant the subscription belongs to.
    pub tenant_id: Option<String>,
}
