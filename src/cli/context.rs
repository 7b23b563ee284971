//! Command execution context
//!
//! Provides a unified context for command execution, covering config
//! loading, flag overrides, and client initialization.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::{GlobalOptions, PaginationArgs};
use crate::client::{PaginationParams, StacksmithClient};
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Context for command execution containing config, client, and output format.
pub struct CommandContext {
    /// Loaded configuration with flag overrides applied
    pub config: Config,
    /// API client for the resolved host and key
    pub client: StacksmithClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Loads the config file (optional when `--api-key` is given), applies
    /// the `--api-key` and `--api-host` overrides, validates that a key is
    /// present and builds the client.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or no API key is available.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Self::resolve_config(opts)?;
        config.validate_auth()?;

        let api_key = config.api_key.clone().unwrap_or_default();
        let client = StacksmithClient::with_host(api_key, config.api_host.as_deref())?;
        debug!("Using API at {}", client.base_url());

        let format = Self::resolve_format(opts, &config);

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Merge the config file with command-line overrides.
    pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
        let mut config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) if opts.api_key.is_some() => {
                debug!("No config file; using --api-key");
                Config::default()
            }
            Err(e) => return Err(e),
        };

        if let Some(key) = &opts.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(host) = &opts.api_host {
            config.api_host = Some(host.clone());
        }

        Ok(config)
    }

    /// `--format` wins, then the config preference, then table.
    pub fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
        opts.format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_name)
            })
            .unwrap_or_default()
    }

    /// Pagination params with the configured page size as default.
    pub fn pagination(&self, args: &PaginationArgs) -> PaginationParams {
        args.to_params(self.config.preferences.per_page)
    }
}
