//! Status models shared across resources

use serde::{Deserialize, Serialize};

/// Acknowledgment of a create, update or regenerate request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusGeneration {
    /// Identifier of the affected resource
    pub id: String,

    /// Where to follow up on the generation
    pub resource_url: String,
}

/// Result of a delete request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusDeletion {
    pub id: String,
    pub deleted: bool,
}
