//! Pagination argument types for CLI commands

use clap::Args;

use crate::client::PaginationParams;

/// Shared pagination arguments for list commands.
///
/// Flatten this into any command that supports pagination:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long, short = 'n')]
    pub per_page: Option<u32>,
}

impl PaginationArgs {
    /// Convert CLI args to API pagination params.
    ///
    /// `default_per_page` comes from the config preferences and applies
    /// when `--per-page` is absent.
    pub fn to_params(&self, default_per_page: u32) -> PaginationParams {
        PaginationParams::new()
            .page(self.page.unwrap_or(0))
            .per_page(self.per_page.unwrap_or(default_per_page))
    }
}
