//! Discovery service: the component catalog

use crate::client::models::{ChangelogEntry, DiscoveryItem, Flavor};
use crate::client::pagination::{Page, PaginationParams, RangeParams, SearchQuery};
use crate::client::request::{Requester, Response, segment};
use crate::error::Result;

/// Catalog collections that share the same listing shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Components,
    Services,
    Runtimes,
    Oses,
}

impl Catalog {
    pub fn path(&self) -> &'static str {
        match self {
            Catalog::Components => "components",
            Catalog::Services => "services",
            Catalog::Runtimes => "runtimes",
            Catalog::Oses => "oses",
        }
    }
}

/// Browse the components, services, runtimes and OSes stacks are built from
#[derive(Debug, Clone)]
pub struct DiscoveryService {
    requester: Requester,
}

impl DiscoveryService {
    pub(crate) fn new(requester: &Requester) -> Self {
        Self {
            requester: requester.clone(),
        }
    }

    /// List one catalog collection, optionally filtered by free text
    pub async fn list(&self, catalog: Catalog, query: &str) -> Result<Response<Page<DiscoveryItem>>> {
        let query = SearchQuery::new(query);
        self.requester.get(catalog.path(), &[&query]).await
    }

    pub async fn components(&self, query: &str) -> Result<Response<Page<DiscoveryItem>>> {
        self.list(Catalog::Components, query).await
    }

    pub async fn services(&self, query: &str) -> Result<Response<Page<DiscoveryItem>>> {
        self.list(Catalog::Services, query).await
    }

    pub async fn runtimes(&self, query: &str) -> Result<Response<Page<DiscoveryItem>>> {
        self.list(Catalog::Runtimes, query).await
    }

    pub async fn oses(&self, query: &str) -> Result<Response<Page<DiscoveryItem>>> {
        self.list(Catalog::Oses, query).await
    }

    /// Get a single component by name
    pub async fn component(&self, name: &str) -> Result<Response<DiscoveryItem>> {
        let path = format!("components/{}", segment(name)?);
        self.requester.get(&path, &[]).await
    }

    /// Releases of a component, optionally limited to a range
    pub async fn changelog(
        &self,
        name: &str,
        range: &RangeParams,
        pagination: &PaginationParams,
    ) -> Result<Response<Page<ChangelogEntry>>> {
        let path = format!("components/{}/changelog", segment(name)?);
        self.requester.get(&path, &[range, pagination]).await
    }

    /// Names of the components a component depends on
    pub async fn dependencies(&self, name: &str) -> Result<Response<Page<String>>> {
        let path = format!("components/{}/dependencies", segment(name)?);
        self.requester.get(&path, &[]).await
    }

    /// All flavors known to the service
    pub async fn flavors(&self, pagination: &PaginationParams) -> Result<Response<Page<Flavor>>> {
        self.requester.get("flavors", &[pagination]).await
    }

    /// Flavors available for one component
    pub async fn component_flavors(
        &self,
        name: &str,
        pagination: &PaginationParams,
    ) -> Result<Response<Page<Flavor>>> {
        let path = format!("components/{}/flavors", segment(name)?);
        self.requester.get(&path, &[pagination]).await
    }
}
