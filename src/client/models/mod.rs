//! Stacksmith API data models
//!
//! Request bodies and response shapes, organized by resource. Every response
//! type tolerates missing fields (they default to zero values) but a field of
//! the wrong type is a decode error.

mod common;
mod discovery;
mod hook;
mod stack;
mod user;

pub use common::{StatusDeletion, StatusGeneration};
pub use discovery::{
    ChangelogEntry, ComponentVersion, DiscoveryItem, Flavor, ReleaseSeries,
};
pub use hook::{Hook, HookParams, HookTest, HookTestRequest, HookTestResponse, HookTestResult};
pub use stack::{
    AffectedRange, Component, ComponentRef, LatestVersion, Requirement, Stack, StackDefinition,
    StackOutput, StackParams, Vulnerability, VulnerabilityReport,
};
pub use user::{EmailNotifications, SlackChannel};
