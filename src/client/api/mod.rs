//! Resource services
//!
//! One service per API resource family. Each holds a [`Requester`] scoped to
//! its path prefix and maps every operation onto a single request:
//! - [`StacksService`] - `stacks/`
//! - [`HooksService`] - `stacks/{id}/hooks`
//! - [`DiscoveryService`] - the component catalog
//! - [`UserService`] - `user/`
//!
//! [`Requester`]: super::request::Requester

mod discovery;
mod hooks;
mod stacks;
mod user;

pub use discovery::{Catalog, DiscoveryService};
pub use hooks::HooksService;
pub use stacks::StacksService;
pub use user::UserService;
