//! Command-line arguments

use clap::{ArgAction, Args, Parser, Subcommand};
use plugindesk_client::{ENV_API_URL, ENV_TIMEOUT_SECS, ENV_TOKEN};
use plugindesk_model::DEFAULT_PAGE_SIZE;
use std::path::PathBuf;

/// Manage platform plugins and apps from the command line
#[derive(Parser, Debug)]
#[command(name = "plugindesk", version, about, long_about = None)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = ENV_API_URL)]
    pub base_url: Option<String>,

    /// Token sent as a bearer credential
    #[arg(long, global = true, env = ENV_TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS)]
    pub timeout: Option<u64>,

    /// TOML file with `base_url`, `token` and `timeout_secs`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the decoded payload as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log request details to stderr
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage apps
    #[command(subcommand)]
    Apps(AppsCommand),

    /// Manage plugins
    #[command(subcommand)]
    Plugins(PluginsCommand),
}

/// Name, avatar and intro of a new record
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    /// Avatar URL or data URI
    #[arg(long)]
    pub avatar: Option<String>,

    #[arg(long)]
    pub intro: Option<String>,
}

/// Fields to change on an existing record
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub avatar: Option<String>,

    #[arg(long)]
    pub intro: Option<String>,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

#[derive(Subcommand, Debug)]
pub enum AppsCommand {
    /// List your apps
    List,

    /// Show one app
    Show { id: String },

    /// Create an app
    Create(CreateArgs),

    /// Change an app's name, avatar or intro
    Update(UpdateArgs),

    /// Delete an app
    Delete { id: String },

    /// Browse apps shared by other users
    Shared {
        /// Filter by name
        #[arg(long)]
        search: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Toggle your collection mark on a shared app
    Collect { id: String },

    /// Token usage of the last 14 days
    Usage { id: String },

    /// Chat logs of an app
    Logs {
        id: String,

        /// How many days back to look
        #[arg(long, default_value_t = 7)]
        days: i64,

        #[command(flatten)]
        paging: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum PluginsCommand {
    /// List your plugins
    List,

    /// Show one plugin
    Show { id: String },

    /// Create a plugin
    Create(CreateArgs),

    /// Change a plugin's name, avatar or intro
    Update(UpdateArgs),

    /// Delete a plugin
    Delete {
        id: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
