//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Create command context
//! 2. Resolve pagination against the configured page size
//! 3. Fetch one page
//! 4. Convert to display type and print

use std::future::Future;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::{Page, PaginationParams, Response, StacksmithClient};
use crate::error::Result;
use crate::output;

/// Run a standard list command with the common fetch → display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Stack`, `Hook`)
/// * `D` - The display row built from `&T`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Stack, StackDisplay, _, _>(
///     opts,
///     pagination,
///     "stacks",
///     |client, params| async move { client.stacks().list(&params).await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    pagination: &PaginationArgs,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    T: Serialize,
    D: for<'a> From<&'a T> + Tabled,
    Fut: Future<Output = Result<Response<Page<T>>>>,
    F: FnOnce(StacksmithClient, PaginationParams) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    let params = ctx.pagination(pagination);

    debug!("Fetching {} ({:?})", resource_name, params);
    let page = fetcher(ctx.client.clone(), params).await?.into_inner();
    debug!(
        "Fetched {} of {} {}",
        page.len(),
        page.total_entries,
        resource_name
    );

    output::print_page::<T, D>(page, ctx.format)
}
