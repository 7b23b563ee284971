//! Display models for CLI output
//!
//! Converts API response types into CLI-friendly table rows.

pub mod display;

pub use display::{
    ChangelogDisplay, DependencyDisplay, DiscoveryItemDisplay, FlavorDisplay, HookDisplay,
    SlackChannelDisplay, StackDisplay, VulnerabilityDisplay,
};
