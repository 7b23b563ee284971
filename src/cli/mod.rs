//! CLI command definitions and dispatch

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod discover;
pub mod handlers;
pub mod hook;
pub mod init;
pub mod stack;
pub mod status;
pub mod user;

pub use args::{GlobalOptions, OutputFormat, PaginationArgs};
pub use context::CommandContext;

use crate::client::Catalog;
use crate::error::Result;

/// Stacksmith CLI - manage Bitnami Stacksmith stacks from the terminal
#[derive(Parser, Debug)]
#[command(name = "stacksmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "STACKSMITH_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "STACKSMITH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// API key (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "STACKSMITH_API_KEY",
        hide_env = true,
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Custom API base URL
    #[arg(long, global = true, env = "STACKSMITH_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "STACKSMITH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Stacksmith configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Manage stacks
    #[command(subcommand)]
    Stack(StackCommands),

    /// Manage stack webhooks
    #[command(subcommand)]
    Hook(HookCommands),

    /// Browse the component catalog
    #[command(subcommand)]
    Discover(DiscoverCommands),

    /// Manage account notification settings
    #[command(subcommand)]
    User(UserCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   stacksmith completion bash > /etc/bash_completion.d/stacksmith
  zsh:    stacksmith completion zsh > \"${fpath[1]}/_stacksmith\"
  fish:   stacksmith completion fish > ~/.config/fish/completions/stacksmith.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Stack subcommands
#[derive(Subcommand, Debug)]
pub enum StackCommands {
    /// List your stacks
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show one stack
    Get {
        /// Stack ID
        stack_id: String,

        /// Print only the generated Dockerfile (as `{"dockerfile": ...}` with --format json)
        #[arg(long)]
        dockerfile: bool,
    },

    /// Define a new stack
    #[command(after_help = "EXAMPLES:\n  \
        stacksmith stack create --name my-app --component node@6.10.0 --component mysql@5.7")]
    Create {
        /// Stack name
        #[arg(long)]
        name: String,

        /// Component as ID or ID@VERSION (repeatable)
        #[arg(long = "component", short = 'c', value_delimiter = ',')]
        components: Vec<String>,

        /// Base OS as ID or ID@VERSION
        #[arg(long)]
        os: Option<String>,

        /// Stack kind (e.g. docker)
        #[arg(long, default_value = "")]
        kind: String,
    },

    /// Change a stack's name, sharing or notification settings
    Update {
        /// Stack ID
        stack_id: String,

        /// New stack name
        #[arg(long)]
        name: Option<String>,

        /// Enable or disable notifications (true, false)
        #[arg(long)]
        notifications: Option<bool>,

        /// Share or unshare the stack (true, false)
        #[arg(long)]
        shared: Option<bool>,
    },

    /// Delete a stack
    Delete {
        /// Stack ID
        stack_id: String,
    },

    /// Regenerate a stack with the latest component revisions
    Regenerate {
        /// Stack ID
        stack_id: String,
    },

    /// Show the vulnerability report for a stack
    Vulns {
        /// Stack ID
        stack_id: String,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Hook subcommands
#[derive(Subcommand, Debug)]
pub enum HookCommands {
    /// List the hooks of a stack
    #[command(visible_alias = "ls")]
    List {
        /// Stack ID
        stack_id: String,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Register a hook on a stack
    Add {
        /// Stack ID
        stack_id: String,

        /// URL to notify
        url: String,
    },

    /// Change the URL of a hook
    Update {
        /// Stack ID
        stack_id: String,

        /// Hook ID
        hook_id: String,

        /// New URL
        url: String,
    },

    /// Remove a hook
    Delete {
        /// Stack ID
        stack_id: String,

        /// Hook ID
        hook_id: String,
    },

    /// Send a test delivery to a hook
    Test {
        /// Stack ID
        stack_id: String,

        /// Hook ID
        hook_id: String,
    },
}

/// Discovery subcommands
#[derive(Subcommand, Debug)]
pub enum DiscoverCommands {
    /// Search application components
    Components {
        /// Free-text search
        #[arg(long, short = 'q')]
        query: Option<String>,
    },

    /// Search services
    Services {
        /// Free-text search
        #[arg(long, short = 'q')]
        query: Option<String>,
    },

    /// Search runtimes
    Runtimes {
        /// Free-text search
        #[arg(long, short = 'q')]
        query: Option<String>,
    },

    /// Search base operating systems
    Oses {
        /// Free-text search
        #[arg(long, short = 'q')]
        query: Option<String>,
    },

    /// Show one component
    Component {
        /// Component name
        name: String,
    },

    /// Show the changelog of a component
    Changelog {
        /// Component name
        name: String,

        /// Lower version bound
        #[arg(long)]
        from: Option<String>,

        /// Upper version bound
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// List the dependencies of a component
    Deps {
        /// Component name
        name: String,
    },

    /// List flavors, optionally for one component
    Flavors {
        /// Component name
        #[arg(long)]
        component: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Turn e-mail notifications on or off
    Notifications {
        /// Enable e-mail notifications
        #[arg(long, conflicts_with = "disable", required_unless_present = "disable")]
        enable: bool,

        /// Disable e-mail notifications
        #[arg(long)]
        disable: bool,
    },

    /// Manage linked Slack channels
    #[command(subcommand)]
    Slack(SlackCommands),
}

/// Slack channel subcommands
#[derive(Subcommand, Debug)]
pub enum SlackCommands {
    /// List linked Slack channels
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Unlink a Slack channel
    Remove {
        /// Channel ID
        channel_id: String,
    },

    /// Send a test message to a Slack channel
    Test {
        /// Channel ID
        channel_id: String,
    },
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => init::run(&opts).await,
        Commands::Status => status::run(&opts),
        Commands::Version => {
            println!("stacksmith version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            completions::run(shell);
            Ok(())
        }
        Commands::Stack(cmd) => match cmd {
            StackCommands::List { pagination } => stack::list(&opts, &pagination).await,
            StackCommands::Get {
                stack_id,
                dockerfile,
            } => stack::get(&opts, &stack_id, dockerfile).await,
            StackCommands::Create {
                name,
                components,
                os,
                kind,
            } => stack::create(&opts, &name, &components, os.as_deref(), &kind).await,
            StackCommands::Update {
                stack_id,
                name,
                notifications,
                shared,
            } => stack::update(&opts, &stack_id, name.as_deref(), notifications, shared).await,
            StackCommands::Delete { stack_id } => stack::delete(&opts, &stack_id).await,
            StackCommands::Regenerate { stack_id } => stack::regenerate(&opts, &stack_id).await,
            StackCommands::Vulns {
                stack_id,
                pagination,
            } => stack::vulnerabilities(&opts, &stack_id, &pagination).await,
        },
        Commands::Hook(cmd) => match cmd {
            HookCommands::List {
                stack_id,
                pagination,
            } => hook::list(&opts, &stack_id, &pagination).await,
            HookCommands::Add { stack_id, url } => hook::add(&opts, &stack_id, &url).await,
            HookCommands::Update {
                stack_id,
                hook_id,
                url,
            } => hook::update(&opts, &stack_id, &hook_id, &url).await,
            HookCommands::Delete { stack_id, hook_id } => {
                hook::delete(&opts, &stack_id, &hook_id).await
            }
            HookCommands::Test { stack_id, hook_id } => {
                hook::test(&opts, &stack_id, &hook_id).await
            }
        },
        Commands::Discover(cmd) => match cmd {
            DiscoverCommands::Components { query } => {
                discover::list(&opts, Catalog::Components, query.as_deref()).await
            }
            DiscoverCommands::Services { query } => {
                discover::list(&opts, Catalog::Services, query.as_deref()).await
            }
            DiscoverCommands::Runtimes { query } => {
                discover::list(&opts, Catalog::Runtimes, query.as_deref()).await
            }
            DiscoverCommands::Oses { query } => {
                discover::list(&opts, Catalog::Oses, query.as_deref()).await
            }
            DiscoverCommands::Component { name } => discover::component(&opts, &name).await,
            DiscoverCommands::Changelog {
                name,
                from,
                to,
                pagination,
            } => {
                discover::changelog(&opts, &name, from.as_deref(), to.as_deref(), &pagination)
                    .await
            }
            DiscoverCommands::Deps { name } => discover::dependencies(&opts, &name).await,
            DiscoverCommands::Flavors {
                component,
                pagination,
            } => discover::flavors(&opts, component.as_deref(), &pagination).await,
        },
        Commands::User(cmd) => match cmd {
            UserCommands::Notifications { enable, .. } => user::notifications(&opts, enable).await,
            UserCommands::Slack(slack) => match slack {
                SlackCommands::List { pagination } => user::slack_list(&opts, &pagination).await,
                SlackCommands::Remove { channel_id } => {
                    user::slack_remove(&opts, &channel_id).await
                }
                SlackCommands::Test { channel_id } => user::slack_test(&opts, &channel_id).await,
            },
        },
    }
}
