//! User settings command implementations

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::{print_deletion, run_list_command};
use crate::cli::{CommandContext, OutputFormat, PaginationArgs};
use crate::client::models::{EmailNotifications, SlackChannel};
use crate::error::Result;
use crate::models::display::SlackChannelDisplay;
use crate::output::json;

/// Run the user notifications command
pub async fn notifications(opts: &GlobalOptions, enabled: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let settings = EmailNotifications {
        email_notifications_enabled: enabled,
    };
    let updated = ctx
        .client
        .user()
        .update_notifications(&settings)
        .await?
        .into_inner();

    match ctx.format {
        OutputFormat::Table => {
            let state = if updated.email_notifications_enabled {
                "enabled".green()
            } else {
                "disabled".yellow()
            };
            println!("{} E-mail notifications {}", "✓".green(), state);
        }
        OutputFormat::Json => println!("{}", json::format_json(&updated)?),
    }
    Ok(())
}

/// Run the user slack list command
pub async fn slack_list(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    run_list_command::<SlackChannel, SlackChannelDisplay, _, _>(
        opts,
        pagination,
        "slack channels",
        |client, params| async move { client.user().slack_channels(&params).await },
    )
    .await
}

/// Run the user slack remove command
pub async fn slack_remove(opts: &GlobalOptions, channel_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let status = ctx
        .client
        .user()
        .remove_slack_channel(channel_id)
        .await?
        .into_inner();
    print_deletion("slack channel", &status, ctx.format)
}

/// Run the user slack test command
pub async fn slack_test(opts: &GlobalOptions, channel_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let channel = ctx
        .client
        .user()
        .test_slack_channel(channel_id)
        .await?
        .into_inner();

    match ctx.format {
        OutputFormat::Table => println!(
            "{} Test message sent to {}",
            "✓".green(),
            channel.slack_channel.bold()
        ),
        OutputFormat::Json => println!("{}", json::format_json(&channel)?),
    }
    Ok(())
}
