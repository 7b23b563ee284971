//! Hook command implementations

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{print_deletion, print_generation, run_list_command};
use crate::cli::{CommandContext, PaginationArgs};
use crate::client::models::{Hook, HookParams};
use crate::error::Result;
use crate::models::display::{HookDisplay, hook_test_detail};
use crate::output;

/// Run the hook list command
pub async fn list(opts: &GlobalOptions, stack_id: &str, pagination: &PaginationArgs) -> Result<()> {
    let stack_id = stack_id.to_string();
    run_list_command::<Hook, HookDisplay, _, _>(
        opts,
        pagination,
        "hooks",
        |client, params| async move { client.hooks().list(&stack_id, &params).await },
    )
    .await
}

/// Run the hook add command
pub async fn add(opts: &GlobalOptions, stack_id: &str, url: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx
        .client
        .hooks()
        .register(stack_id, &HookParams::new(url))
        .await?
        .into_inner();
    print_generation("Registered hook", &status, ctx.format)
}

/// Run the hook update command
pub async fn update(opts: &GlobalOptions, stack_id: &str, hook_id: &str, url: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx
        .client
        .hooks()
        .update(stack_id, hook_id, &HookParams::new(url))
        .await?
        .into_inner();
    print_generation("Updated hook", &status, ctx.format)
}

/// Run the hook delete command
pub async fn delete(opts: &GlobalOptions, stack_id: &str, hook_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx.client.hooks().delete(stack_id, hook_id).await?.into_inner();
    print_deletion("hook", &status, ctx.format)
}

/// Run the hook test command
pub async fn test(opts: &GlobalOptions, stack_id: &str, hook_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let result = ctx.client.hooks().test(stack_id, hook_id).await?.into_inner();
    output::print_detail(&result, hook_test_detail(&result), ctx.format)
}
