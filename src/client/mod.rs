//! Stacksmith API client
//!
//! [`StacksmithClient`] owns the base configuration (base URL, API key,
//! transport) and one instance of every resource service. It is immutable
//! after construction and cheap to clone.
//!
//! ```no_run
//! use stacksmith::client::{PaginationParams, StacksmithClient};
//!
//! # async fn run() -> stacksmith::error::Result<()> {
//! let client = StacksmithClient::new("my-api-key")?;
//! let stacks = client.stacks().list(&PaginationParams::new().page(1).per_page(100)).await?;
//! println!("You have {} stacks.", stacks.data.items.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod request;
pub mod transport;

pub use api::{Catalog, DiscoveryService, HooksService, StacksService, UserService};
pub use pagination::{Page, PaginationParams, QueryParams, RangeParams, SearchQuery};
pub use request::{Requester, Response};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

use crate::error::{ApiError, Result};

/// Stacksmith API base URL
pub const API_BASE_URL: &str = "https://stacksmith.bitnami.com/api/v1/";

/// Stacksmith API client
#[derive(Debug, Clone)]
pub struct StacksmithClient {
    requester: Requester,
    stacks: StacksService,
    hooks: HooksService,
    discovery: DiscoveryService,
    user: UserService,
}

impl StacksmithClient {
    /// Create a client for the production API using the default transport
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_host(api_key, None)
    }

    /// Create a client with an optional custom API host
    pub fn with_host(api_key: impl Into<String>, api_host: Option<&str>) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Self::with_transport(api_key, api_host, transport)
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(
        api_key: impl Into<String>,
        api_host: Option<&str>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey.into());
        }

        let requester = Requester::new(api_host.unwrap_or(API_BASE_URL), api_key, transport)?;

        Ok(Self {
            stacks: StacksService::new(&requester),
            hooks: HooksService::new(&requester),
            discovery: DiscoveryService::new(&requester),
            user: UserService::new(&requester),
            requester,
        })
    }

    pub fn stacks(&self) -> &StacksService {
        &self.stacks
    }

    pub fn hooks(&self) -> &HooksService {
        &self.hooks
    }

    pub fn discovery(&self) -> &DiscoveryService {
        &self.discovery
    }

    pub fn user(&self) -> &UserService {
        &self.user
    }

    /// The base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }
}
