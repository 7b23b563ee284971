//! Stack display models

use tabled::Tabled;

use super::common::{format_timestamp, or_dash, truncate_string, yes_no};
use crate::client::models::{Stack, Vulnerability, VulnerabilityReport};

/// Maximum width of the components column
const COMPONENTS_WIDTH: usize = 40;

/// Stack row for table output.
#[derive(Debug, Clone, Tabled)]
pub struct StackDisplay {
    #[tabled(rename = "STACK ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "KIND")]
    pub kind: String,

    /// Components as `id@version`, comma separated
    #[tabled(rename = "COMPONENTS")]
    pub components: String,

    #[tabled(rename = "OUTDATED")]
    pub outdated: String,

    #[tabled(rename = "GENERATED")]
    pub generated_at: String,
}

impl From<&Stack> for StackDisplay {
    fn from(stack: &Stack) -> Self {
        let components = stack
            .components
            .iter()
            .map(|c| format!("{}@{}", c.id, c.version))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: stack.id.clone(),
            name: stack.name.clone(),
            status: or_dash(&stack.status),
            kind: or_dash(&stack.kind),
            components: or_dash(&truncate_string(&components, COMPONENTS_WIDTH)),
            outdated: yes_no(stack.outdated),
            generated_at: or_dash(&format_timestamp(&stack.generated_at)),
        }
    }
}

/// Field/value rows for `stack get`
pub fn stack_detail(stack: &Stack) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("ID", stack.id.clone()),
        ("Name", stack.name.clone()),
        ("Status", or_dash(&stack.status)),
        ("Kind", or_dash(&stack.kind)),
        ("OS", or_dash(&format!("{} {}", stack.os.name, stack.os.version).trim().to_string())),
        ("Generated", or_dash(&format_timestamp(&stack.generated_at))),
        ("Regenerated", or_dash(&format_timestamp(&stack.regenerated_at))),
        ("Outdated", yes_no(stack.outdated)),
        ("Can regenerate", yes_no(stack.can_regenerate)),
        ("Notifications", yes_no(stack.notifications_enabled)),
        ("Shared", yes_no(stack.shared)),
    ];

    if !stack.shareable_url.is_empty() {
        rows.push(("Share URL", stack.shareable_url.clone()));
    }

    for component in &stack.components {
        let mut value = format!("{} {}", component.id, component.version);
        if component.outdated && !component.latest.version.is_empty() {
            value.push_str(&format!(" (latest {})", component.latest.version));
        }
        rows.push(("Component", value));
    }

    rows.push(("Vulnerabilities", vulnerability_summary(&stack.vulnerabilities)));
    rows
}

/// One-line summary of a list of vulnerability reports
pub fn vulnerability_summary(reports: &[VulnerabilityReport]) -> String {
    let vulnerable: Vec<&str> = reports
        .iter()
        .filter(|r| r.vulnerable)
        .map(|r| r.severity.as_str())
        .collect();

    if vulnerable.is_empty() {
        "none".to_string()
    } else {
        format!("{} ({})", vulnerable.len(), vulnerable.join(", "))
    }
}

/// Vulnerability row for `stack vulns`
#[derive(Debug, Clone, Tabled)]
pub struct VulnerabilityDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    /// Affected ranges as `component from..to`
    #[tabled(rename = "AFFECTED")]
    pub affected: String,
}

impl From<&Vulnerability> for VulnerabilityDisplay {
    fn from(vulnerability: &Vulnerability) -> Self {
        let affected = vulnerability
            .ranges
            .iter()
            .map(|r| format!("{} {}..{}", r.component, r.from, r.to))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            name: vulnerability.name.clone(),
            severity: or_dash(&vulnerability.severity),
            affected: or_dash(&affected),
        }
    }
}
