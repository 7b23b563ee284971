//! Discovery (catalog) models

use serde::{Deserialize, Serialize};

/// A catalog entry: component, service, runtime or OS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub versions: Vec<ComponentVersion>,
    pub prebuilt: bool,
    pub release_series: Vec<ReleaseSeries>,
    pub dependencies_url: String,
}

/// A published version of a catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentVersion {
    pub version: String,
    pub revision: u32,
    pub branch: String,
    pub checksum: String,
    #[serde(alias = "publised_at")]
    pub published_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseSeries {
    pub version: String,
    pub payload: String,
}

/// A flavor (packaging variant) of a component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flavor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub default: bool,
    pub component_url: String,
}

/// One release in a component changelog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogEntry {
    pub version: String,
    pub revision: u32,
    pub branch: String,
    pub checksum: String,
    pub published_at: String,
    pub release_notes: String,
    pub release_notes_url: String,
}
