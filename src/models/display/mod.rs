//! Display model implementations for table output
//!
//! Display models transform API response types into rows with CLI column
//! names. JSON output serializes the API models directly.

mod common;
mod discovery;
mod hook;
mod stack;
mod user;

pub use discovery::{
    ChangelogDisplay, DependencyDisplay, DiscoveryItemDisplay, FlavorDisplay, component_detail,
};
pub use hook::{HookDisplay, hook_test_detail};
pub use stack::{StackDisplay, VulnerabilityDisplay, stack_detail, vulnerability_summary};
pub use user::SlackChannelDisplay;
