//! Stack command implementations

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{print_deletion, print_generation, run_list_command};
use crate::cli::{CommandContext, OutputFormat, PaginationArgs};
use crate::client::Page;
use crate::client::models::{ComponentRef, Stack, StackDefinition, StackParams, Vulnerability};
use crate::error::Result;
use crate::models::display::{StackDisplay, VulnerabilityDisplay, stack_detail};
use crate::output;
use crate::output::json;

/// Run the stack list command
pub async fn list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<Stack, StackDisplay, _, _>(
        opts,
        pagination,
        "stacks",
        |client, params| async move { client.stacks().list(&params).await },
    )
    .await
}

/// Run the stack get command
pub async fn get(opts: &GlobalOptions, stack_id: &str, dockerfile: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let stack = ctx.client.stacks().get(stack_id).await?.into_inner();

    if dockerfile {
        match ctx.format {
            OutputFormat::Table => println!("{}", stack.output.dockerfile),
            OutputFormat::Json => println!("{}", json::format_json(&stack.output)?),
        }
        return Ok(());
    }

    output::print_detail(&stack, stack_detail(&stack), ctx.format)
}

/// Build the request body for `stack create` from CLI values.
pub fn definition(name: &str, components: &[String], os: Option<&str>, kind: &str) -> StackDefinition {
    StackDefinition {
        name: name.to_string(),
        components: components.iter().map(|c| ComponentRef::parse(c)).collect(),
        os: os.map(ComponentRef::parse).unwrap_or_default(),
        kind: kind.to_string(),
    }
}

/// Run the stack create command
pub async fn create(
    opts: &GlobalOptions,
    name: &str,
    components: &[String],
    os: Option<&str>,
    kind: &str,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let definition = definition(name, components, os, kind);
    debug!("Creating stack {:?}", definition);

    let status = ctx.client.stacks().create(&definition).await?.into_inner();
    print_generation("Generating stack", &status, ctx.format)
}

/// Run the stack update command
///
/// Unset flags keep the stack's current values.
pub async fn update(
    opts: &GlobalOptions,
    stack_id: &str,
    name: Option<&str>,
    notifications: Option<bool>,
    shared: Option<bool>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let current = ctx.client.stacks().get(stack_id).await?.into_inner();

    let params = StackParams {
        name: name.map(str::to_string).unwrap_or(current.name),
        notifications_enabled: notifications.unwrap_or(current.notifications_enabled),
        shared: shared.unwrap_or(current.shared),
    };

    let status = ctx.client.stacks().update(stack_id, &params).await?.into_inner();
    print_generation("Updated stack", &status, ctx.format)
}

/// Run the stack delete command
pub async fn delete(opts: &GlobalOptions, stack_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx.client.stacks().delete(stack_id).await?.into_inner();
    print_deletion("stack", &status, ctx.format)
}

/// Run the stack regenerate command
pub async fn regenerate(opts: &GlobalOptions, stack_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx.client.stacks().regenerate(stack_id).await?.into_inner();
    print_generation("Regenerating stack", &status, ctx.format)
}

/// Run the stack vulns command
pub async fn vulnerabilities(
    opts: &GlobalOptions,
    stack_id: &str,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let params = ctx.pagination(pagination);
    let report = ctx
        .client
        .stacks()
        .vulnerabilities(stack_id, &params)
        .await?
        .into_inner();

    if ctx.format == OutputFormat::Table {
        let summary = if report.vulnerable {
            format!("vulnerable ({})", report.severity).red().to_string()
        } else {
            "no known vulnerabilities".green().to_string()
        };
        println!("Stack {}: {}\n", stack_id.bold(), summary);
    }

    let page = Page {
        total_entries: report.total_entries,
        total_pages: report.total_pages,
        items: report.items,
    };
    output::print_page::<Vulnerability, VulnerabilityDisplay>(page, ctx.format)
}
