//! Query parameter types for API requests
//!
//! Pagination and filter parameters are per-call values. Each knows how to
//! render itself as query string pairs, leaving out anything at its zero
//! value.

use serde::{Deserialize, Serialize};

/// Values that contribute key/value pairs to a request's query string.
pub trait QueryParams {
    /// Render as (key, value) pairs. Zero or empty fields are omitted.
    fn to_query_params(&self) -> Vec<(&'static str, String)>;
}

/// Pagination parameters for list endpoints.
///
/// # Example
/// ```
/// use stacksmith::client::{PaginationParams, QueryParams};
///
/// let params = PaginationParams::new().page(2).per_page(50);
/// assert_eq!(
///     params.to_query_params(),
///     vec![("page", "2".to_string()), ("per_page", "50".to_string())]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Page number, omitted when 0
    pub page: u32,
    /// Items per page, omitted when 0
    pub per_page: u32,
}

impl PaginationParams {
    /// Create new pagination params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Check if any pagination parameters are set.
    pub fn is_empty(&self) -> bool {
        self.page == 0 && self.per_page == 0
    }
}

impl QueryParams for PaginationParams {
    fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if self.page != 0 {
            params.push(("page", self.page.to_string()));
        }
        if self.per_page != 0 {
            params.push(("per_page", self.per_page.to_string()));
        }

        params
    }
}

/// Free-text filter used by the discovery listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl QueryParams for SearchQuery {
    fn to_query_params(&self) -> Vec<(&'static str, String)> {
        if self.query.is_empty() {
            Vec::new()
        } else {
            vec![("query", self.query.clone())]
        }
    }
}

/// Range bounds for changelog queries (`from` / `to`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeParams {
    pub from: String,
    pub to: String,
}

impl RangeParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Set the upper bound.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }
}

impl QueryParams for RangeParams {
    fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if !self.from.is_empty() {
            params.push(("from", self.from.clone()));
        }
        if !self.to.is_empty() {
            params.push(("to", self.to.clone()));
        }

        params
    }
}

/// The list envelope shared by every collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub total_entries: u32,

    /// Total number of pages
    pub total_pages: u32,

    /// The items for this page
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total_entries: 0,
            total_pages: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
