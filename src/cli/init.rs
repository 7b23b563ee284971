//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};
use log::warn;

use crate::cli::args::GlobalOptions;
use crate::client::{PaginationParams, StacksmithClient};
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the init command
///
/// Prompts for the API key (unless `--api-key` was given), verifies it with
/// a one-item stack listing, and writes the config file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Stacksmith!".bold().green());
    println!("Let's set up your Stacksmith configuration.\n");

    let api_key = match &opts.api_key {
        Some(key) => key.clone(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your Stacksmith API key")
            .interact()?,
    };

    println!("\n{}", "Verifying API key...".cyan());
    let client = StacksmithClient::with_host(api_key.clone(), opts.api_host_ref())?;
    let stacks = client
        .stacks()
        .list(&PaginationParams::new().per_page(1))
        .await?
        .into_inner();

    println!("{}", "✓ API key accepted!".green());
    println!("Found {} stacks.", stacks.total_entries);

    let mut config = existing_config(opts.config_ref());
    config.api_key = Some(api_key);
    if opts.api_host.is_some() {
        config.api_host = opts.api_host.clone();
    }
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "stacksmith status".cyan());
    println!("  {} - List your stacks", "stacksmith stack list".cyan());

    Ok(())
}

/// The config to update: the existing file if readable, else a fresh one.
///
/// A file that exists but fails to parse is replaced; that is logged so the
/// lost preferences are not a surprise.
fn existing_config(path: Option<&str>) -> Config {
    match Config::load_at(path) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => Config::default(),
        Err(err) => {
            warn!("Existing configuration will be replaced: {}", err);
            Config::default()
        }
    }
}
