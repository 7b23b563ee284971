//! Catalog display models

use tabled::Tabled;

use super::common::{format_timestamp, or_dash, truncate_string, yes_no};
use crate::client::models::{ChangelogEntry, DiscoveryItem, Flavor};

/// Maximum width of free-text columns
const TEXT_WIDTH: usize = 60;

/// Catalog entry row for table output.
#[derive(Debug, Clone, Tabled)]
pub struct DiscoveryItemDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    /// First version listed by the API
    #[tabled(rename = "LATEST")]
    pub latest: String,

    #[tabled(rename = "VERSIONS")]
    pub versions: usize,
}

impl From<&DiscoveryItem> for DiscoveryItemDisplay {
    fn from(item: &DiscoveryItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: or_dash(&item.category),
            latest: or_dash(
                item.versions
                    .first()
                    .map(|v| v.version.as_str())
                    .unwrap_or_default(),
            ),
            versions: item.versions.len(),
        }
    }
}

/// Field/value rows for `discover component`
pub fn component_detail(item: &DiscoveryItem) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("ID", item.id.clone()),
        ("Name", item.name.clone()),
        ("Category", or_dash(&item.category)),
        ("Prebuilt", yes_no(item.prebuilt)),
    ];
    for version in &item.versions {
        rows.push((
            "Version",
            format!("{} (revision {})", version.version, version.revision),
        ));
    }
    for series in &item.release_series {
        rows.push(("Release series", series.version.clone()));
    }
    if !item.dependencies_url.is_empty() {
        rows.push(("Dependencies", item.dependencies_url.clone()));
    }
    rows
}

#[derive(Debug, Clone, Tabled)]
pub struct FlavorDisplay {
    #[tabled(rename = "FLAVOR ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DEFAULT")]
    pub default: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<&Flavor> for FlavorDisplay {
    fn from(flavor: &Flavor) -> Self {
        Self {
            id: flavor.id.clone(),
            name: flavor.name.clone(),
            default: yes_no(flavor.default),
            description: or_dash(&truncate_string(&flavor.description, TEXT_WIDTH)),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct ChangelogDisplay {
    #[tabled(rename = "VERSION")]
    pub version: String,

    #[tabled(rename = "REVISION")]
    pub revision: u32,

    #[tabled(rename = "PUBLISHED")]
    pub published_at: String,

    #[tabled(rename = "NOTES")]
    pub notes: String,
}

impl From<&ChangelogEntry> for ChangelogDisplay {
    fn from(entry: &ChangelogEntry) -> Self {
        let first_line = entry.release_notes.lines().next().unwrap_or_default();
        Self {
            version: entry.version.clone(),
            revision: entry.revision,
            published_at: or_dash(&format_timestamp(&entry.published_at)),
            notes: or_dash(&truncate_string(first_line, TEXT_WIDTH)),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct DependencyDisplay {
    #[tabled(rename = "DEPENDENCY")]
    pub name: String,
}

impl From<&String> for DependencyDisplay {
    fn from(name: &String) -> Self {
        Self { name: name.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::DiscoveryItemBuilder;

    #[test]
    fn test_discovery_item_display() {
        let item = DiscoveryItemBuilder::new("node")
            .name("Node.js")
            .category("runtime")
            .version("7.7.1")
            .version("6.10.0")
            .build();

        let display = DiscoveryItemDisplay::from(&item);
        assert_eq!(display.name, "Node.js");
        assert_eq!(display.latest, "7.7.1");
        assert_eq!(display.versions, 2);
    }

    #[test]
    fn test_discovery_item_display_without_versions() {
        let item = DiscoveryItemBuilder::new("debian").category("os").build();
        let display = DiscoveryItemDisplay::from(&item);
        assert_eq!(display.latest, "-");
        assert_eq!(display.category, "os");
    }

    #[test]
    fn test_component_detail() {
        let item = DiscoveryItemBuilder::new("node").version("6.10.0").build();
        let rows = component_detail(&item);
        assert!(rows.contains(&("Version", "6.10.0 (revision 0)".to_string())));
        assert!(rows.contains(&("Prebuilt", "no".to_string())));
    }

    #[test]
    fn test_changelog_display_uses_first_line() {
        let entry = ChangelogEntry {
            version: "6.10.0".to_string(),
            revision: 1,
            release_notes: "Security fixes\nMore details".to_string(),
            published_at: "2017-02-22T00:00:00Z".to_string(),
            ..Default::default()
        };

        let display = ChangelogDisplay::from(&entry);
        assert_eq!(display.notes, "Security fixes");
        assert_eq!(display.published_at, "2017-02-22 00:00");
    }

    #[test]
    fn test_flavor_display() {
        let flavor = Flavor {
            id: "docker".to_string(),
            name: "Docker".to_string(),
            default: true,
            ..Default::default()
        };
        let display = FlavorDisplay::from(&flavor);
        assert_eq!(display.default, "yes");
        assert_eq!(display.description, "-");
    }
}
