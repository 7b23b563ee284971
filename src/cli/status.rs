//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::API_BASE_URL;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Stacksmith Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match Config::load_from(&config_path) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            if opts.api_key.is_some() {
                println!("{} API key set via --api-key", "✓".green());
            } else if config.validate_auth().is_ok() {
                println!("{} API key configured", "✓".green());
            } else {
                println!("{} API key not configured", "✗".red());
                println!("  → Run 'stacksmith init' to configure");
            }

            let host = opts
                .api_host_ref()
                .or(config.api_host.as_deref())
                .unwrap_or(API_BASE_URL);
            println!("{} API host: {}", "○".dimmed(), host.cyan());

            if let Some(ref format) = config.preferences.format {
                println!("{} Default format: {}", "○".dimmed(), format);
            }
            println!(
                "{} Page size: {}",
                "○".dimmed(),
                config.preferences.per_page
            );

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "stacksmith init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
