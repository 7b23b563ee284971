//! Stack models

use serde::{Deserialize, Serialize};

/// A generated stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stack {
    pub id: String,
    pub name: String,

    /// Generation status reported by the API
    pub status: String,

    pub generated_at: String,
    pub regenerated_at: String,
    pub can_regenerate: bool,

    /// Whether any component has a newer revision available
    pub outdated: bool,

    pub notifications_enabled: bool,

    /// Flavor/kind of the generated output
    pub kind: String,

    /// Components as requested when the stack was defined
    pub requirements: Vec<Requirement>,

    pub vulnerabilities: Vec<VulnerabilityReport>,

    /// Components as resolved by the generator
    pub components: Vec<Component>,

    pub os: Component,
    pub output: StackOutput,
    pub shared: bool,
    pub shareable_url: String,
}

/// A requested component version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirement {
    pub id: String,
    pub version: String,
}

/// A resolved component inside a stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub branch: String,
    pub version: String,
    pub revision: u32,
    pub category: String,
    pub latest: LatestVersion,
    pub outdated: bool,
    pub vulnerabilities: Vec<VulnerabilityReport>,
}

/// Latest published version of a component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatestVersion {
    pub version: String,
    pub revision: u32,
}

/// Generated artifacts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackOutput {
    pub dockerfile: String,
}

/// Vulnerability summary for a stack or component.
///
/// Also the response of `stacks/{id}/vulnerabilities`, which carries the
/// list envelope fields alongside the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityReport {
    pub vulnerable: bool,
    pub severity: String,
    pub url: String,
    pub total_entries: u32,
    pub total_pages: u32,
    pub items: Vec<Vulnerability>,
}

/// A single known vulnerability
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vulnerability {
    pub name: String,
    pub severity: String,
    pub ranges: Vec<AffectedRange>,
}

/// Version range of a component affected by a vulnerability
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffectedRange {
    pub component: String,
    pub from: String,
    pub to: String,
}

/// Request body for creating a stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackDefinition {
    pub name: String,
    pub components: Vec<ComponentRef>,
    pub os: ComponentRef,
    pub kind: String,
}

/// Reference to a component at a given version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentRef {
    pub id: String,
    pub version: String,
}

impl ComponentRef {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }

    /// Parse `id` or `id@version`.
    pub fn parse(value: &str) -> Self {
        match value.split_once('@') {
            Some((id, version)) => Self::new(id, version),
            None => Self::new(value, ""),
        }
    }
}

/// Request body for updating a stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackParams {
    pub name: String,
    pub notifications_enabled: bool,
    pub shared: bool,
}
