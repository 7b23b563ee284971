//! Output for mutating commands

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::client::models::{StatusDeletion, StatusGeneration};
use crate::error::Result;
use crate::output::json;

/// Report an accepted create/update/regenerate request.
pub fn print_generation(action: &str, status: &StatusGeneration, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{} {} {}", "✓".green(), action, status.id.bold());
            if !status.resource_url.is_empty() {
                println!("  {}", status.resource_url.dimmed());
            }
        }
        OutputFormat::Json => println!("{}", json::format_json(status)?),
    }
    Ok(())
}

/// Report the outcome of a delete request.
pub fn print_deletion(kind: &str, status: &StatusDeletion, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table if status.deleted => {
            println!("{} Deleted {} {}", "✓".green(), kind, status.id.bold());
        }
        OutputFormat::Table => {
            println!("{} {} {} was not deleted", "⚠".yellow(), kind, status.id);
        }
        OutputFormat::Json => println!("{}", json::format_json(status)?),
    }
    Ok(())
}
