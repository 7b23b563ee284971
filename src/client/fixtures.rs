//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

use super::models::{
    Component, DiscoveryItem, LatestVersion, Stack, StackOutput, VulnerabilityReport,
};

// ============================================================================
// StackBuilder
// ============================================================================

/// Builder for creating test Stack instances.
///
/// # Example
/// ```ignore
/// let stack = StackBuilder::new("stack-1")
///     .name("my-app")
///     .component("node", "6.10.0")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct StackBuilder {
    stack: Stack,
}

impl StackBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            stack: Stack {
                name: format!("Stack {}", &id),
                id,
                status: "ready".to_string(),
                kind: "docker".to_string(),
                generated_at: "2017-03-01T10:00:00Z".to_string(),
                os: Component {
                    id: "debian".to_string(),
                    name: "Debian".to_string(),
                    version: "8".to_string(),
                    ..Default::default()
                },
                output: StackOutput {
                    dockerfile: "FROM bitnami/minideb:jessie".to_string(),
                },
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.stack.name = name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.stack.status = status.into();
        self
    }

    /// Mark the stack as outdated.
    pub fn outdated(mut self) -> Self {
        self.stack.outdated = true;
        self
    }

    /// Add a resolved component at the given version.
    pub fn component(mut self, id: impl Into<String>, version: impl Into<String>) -> Self {
        let id = id.into();
        let version = version.into();
        self.stack.components.push(Component {
            name: id.clone(),
            id,
            latest: LatestVersion {
                version: version.clone(),
                revision: 0,
            },
            version,
            ..Default::default()
        });
        self
    }

    /// Add a vulnerability summary with the given severity.
    pub fn vulnerability(mut self, severity: impl Into<String>) -> Self {
        self.stack.vulnerabilities.push(VulnerabilityReport {
            vulnerable: true,
            severity: severity.into(),
            ..Default::default()
        });
        self
    }

    pub fn build(self) -> Stack {
        self.stack
    }
}

// ============================================================================
// DiscoveryItemBuilder
// ============================================================================

/// Builder for creating test DiscoveryItem instances.
#[derive(Debug, Clone)]
pub struct DiscoveryItemBuilder {
    item: DiscoveryItem,
}

impl DiscoveryItemBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            item: DiscoveryItem {
                name: id.clone(),
                id,
                category: "runtime".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.item.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.item.category = category.into();
        self
    }

    /// Add a published version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.item.versions.push(super::models::ComponentVersion {
            version: version.into(),
            ..Default::default()
        });
        self
    }

    pub fn build(self) -> DiscoveryItem {
        self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_builder_defaults() {
        let stack = StackBuilder::new("stack-1").build();
        assert_eq!(stack.id, "stack-1");
        assert_eq!(stack.name, "Stack stack-1");
        assert_eq!(stack.os.id, "debian");
        assert!(stack.components.is_empty());
    }

    #[test]
    fn test_stack_builder_components() {
        let stack = StackBuilder::new("stack-1")
            .component("node", "6.10.0")
            .component("mysql", "5.7")
            .vulnerability("high")
            .outdated()
            .build();

        assert_eq!(stack.components.len(), 2);
        assert_eq!(stack.components[1].version, "5.7");
        assert!(stack.vulnerabilities[0].vulnerable);
        assert!(stack.outdated);
    }

    #[test]
    fn test_discovery_item_builder() {
        let item = DiscoveryItemBuilder::new("node")
            .name("Node.js")
            .version("6.10.0")
            .version("7.7.1")
            .build();

        assert_eq!(item.name, "Node.js");
        assert_eq!(item.category, "runtime");
        assert_eq!(item.versions.len(), 2);
    }
}
