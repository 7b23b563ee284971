//! Catalog discovery command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::models::{ChangelogEntry, DiscoveryItem, Flavor};
use crate::client::{Catalog, RangeParams};
use crate::error::Result;
use crate::models::display::{
    ChangelogDisplay, DependencyDisplay, DiscoveryItemDisplay, FlavorDisplay, component_detail,
};
use crate::output;

/// Run one of the catalog listings (components, services, runtimes, oses)
///
/// The catalog endpoints take a search query but no pagination.
pub async fn list(opts: &GlobalOptions, catalog: Catalog, query: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let page = ctx
        .client
        .discovery()
        .list(catalog, query.unwrap_or_default())
        .await?
        .into_inner();
    output::print_page::<DiscoveryItem, DiscoveryItemDisplay>(page, ctx.format)
}

/// Run the discover component command
pub async fn component(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let item = ctx.client.discovery().component(name).await?.into_inner();
    output::print_detail(&item, component_detail(&item), ctx.format)
}

/// Run the discover changelog command
pub async fn changelog(
    opts: &GlobalOptions,
    name: &str,
    from: Option<&str>,
    to: Option<&str>,
    pagination: &PaginationArgs,
) -> Result<()> {
    let range = RangeParams::new()
        .from(from.unwrap_or_default())
        .to(to.unwrap_or_default());
    let name = name.to_string();

    run_list_command::<ChangelogEntry, ChangelogDisplay, _, _>(
        opts,
        pagination,
        "changelog entries",
        |client, params| async move { client.discovery().changelog(&name, &range, &params).await },
    )
    .await
}

/// Run the discover deps command
pub async fn dependencies(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let page = ctx.client.discovery().dependencies(name).await?.into_inner();
    output::print_page::<String, DependencyDisplay>(page, ctx.format)
}

/// Run the discover flavors command, for one component or the whole catalog
pub async fn flavors(
    opts: &GlobalOptions,
    component: Option<&str>,
    pagination: &PaginationArgs,
) -> Result<()> {
    let component = component.map(str::to_string);

    run_list_command::<Flavor, FlavorDisplay, _, _>(
        opts,
        pagination,
        "flavors",
        |client, params| async move {
            match component {
                Some(name) => client.discovery().component_flavors(&name, &params).await,
                None => client.discovery().flavors(&params).await,
            }
        },
    )
    .await
}
