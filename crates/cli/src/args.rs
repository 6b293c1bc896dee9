//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Convert CLI-level choices into client option types.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `main()`).

use clap::{Args, Parser, Subcommand, ValueEnum};
use mode_client::{ListOptions, Order, OrderBy, SpaceFilter};
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "mode-cli")]
#[command(about = "Mode CLI - Inspect and manage a Mode workspace from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  mode-cli spaces list --all\n  mode-cli reports list --space 0a1b2c3d\n  mode-cli runs create a1b2c3d4e5f6 --param region=apac\n  mode-cli batch queries --all-pages\n"
)]
pub struct Cli {
    /// Mode host (e.g., https://app.mode.com)
    #[arg(long, global = true, env = "MODE_HOST")]
    pub host: Option<String>,

    /// Workspace (organization username) requests are scoped to
    #[arg(short, long, global = true, env = "MODE_WORKSPACE")]
    pub workspace: Option<String>,

    /// API token
    #[arg(short, long, global = true, env = "MODE_TOKEN")]
    pub token: Option<String>,

    /// API password
    #[arg(short, long, global = true, env = "MODE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "MODE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of requests in flight at once
    #[arg(long, global = true, env = "MODE_MAX_CONNECTIONS")]
    pub max_connections: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the command talks to the batch surface and needs a signature token.
    pub fn needs_batch_session(&self) -> bool {
        matches!(self.command, Commands::Batch { .. })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read accounts
    Account {
        #[command(subcommand)]
        command: AccountCommand,
    },

    /// List and inspect spaces
    Spaces {
        #[command(subcommand)]
        command: SpacesCommand,
    },

    /// List, inspect, archive and unarchive reports
    Reports {
        #[command(subcommand)]
        command: ReportsCommand,
    },

    /// List and inspect the queries of a report
    Queries {
        #[command(subcommand)]
        command: QueriesCommand,
    },

    /// List, inspect, start and clone report runs
    Runs {
        #[command(subcommand)]
        command: RunsCommand,
    },

    /// List and inspect the query runs of a report run
    QueryRuns {
        #[command(subcommand)]
        command: QueryRunsCommand,
    },

    /// List and inspect definitions
    Definitions {
        #[command(subcommand)]
        command: DefinitionsCommand,
    },

    /// Account-wide listings over the batch API
    Batch {
        #[command(subcommand)]
        command: BatchCommand,
    },
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Show an account; defaults to the configured workspace
    Get {
        /// Account username
        account: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum SpacesCommand {
    /// List spaces
    List {
        /// Include private spaces, not only custom ones
        #[arg(long)]
        all: bool,
    },
    /// Show one space
    Get { space: String },
}

#[derive(Subcommand)]
pub enum ReportsCommand {
    /// Show one report
    Get { report: String },
    /// List the reports of a space or the reports using a data source
    List(ReportListArgs),
    /// Archive a report
    Archive { report: String },
    /// Unarchive a report
    Unarchive { report: String },
}

#[derive(Args)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["space", "data_source"])))]
pub struct ReportListArgs {
    /// Space token
    #[arg(long)]
    pub space: Option<String>,

    /// Data source token
    #[arg(long)]
    pub data_source: Option<String>,

    #[command(flatten)]
    pub listing: ListingArgs,
}

/// Filtering and ordering shared by report and run listings.
#[derive(Args, Clone)]
pub struct ListingArgs {
    /// Server-side filter expression, e.g. `created_at.gt.2024-01-01`
    #[arg(long)]
    pub filter: Option<String>,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    pub order: OrderArg,

    /// Sort field
    #[arg(long, value_enum, default_value_t = OrderByArg::UpdatedAt)]
    pub order_by: OrderByArg,
}

impl ListingArgs {
    pub fn to_options(&self) -> ListOptions {
        let options = ListOptions::default()
            .order(self.order.into())
            .order_by(self.order_by.into());
        match &self.filter {
            Some(filter) => options.filter(filter.clone()),
            None => options,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for Order {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Asc => Order::Asc,
            OrderArg::Desc => Order::Desc,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderByArg {
    CreatedAt,
    UpdatedAt,
}

impl From<OrderByArg> for OrderBy {
    fn from(value: OrderByArg) -> Self {
        match value {
            OrderByArg::CreatedAt => OrderBy::CreatedAt,
            OrderByArg::UpdatedAt => OrderBy::UpdatedAt,
        }
    }
}

#[derive(Subcommand)]
pub enum QueriesCommand {
    /// List the queries of a report
    List { report: String },
    /// Show one query
    Get { report: String, query: String },
}

#[derive(Subcommand)]
pub enum RunsCommand {
    /// List one page of runs of a report
    List {
        report: String,
        #[command(flatten)]
        listing: ListingArgs,
    },
    /// Show one run
    Get { report: String, run: String },
    /// Start a new run
    Create {
        report: String,
        /// Run parameter as NAME=VALUE; VALUE is read as JSON when it parses, else as text
        #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<(String, Value)>,
    },
    /// Start a new run with the parameters of an existing one
    Clone { report: String, run: String },
}

impl RunsCommand {
    pub fn parameters(params: Vec<(String, Value)>) -> Map<String, Value> {
        params.into_iter().collect()
    }
}

fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))?;
    if name.trim().is_empty() {
        return Err(format!("parameter name is empty in {raw:?}"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((name.trim().to_string(), value))
}

#[derive(Subcommand)]
pub enum QueryRunsCommand {
    /// List the query runs of a report run
    List { report: String, run: String },
    /// Show one query run
    Get {
        report: String,
        run: String,
        query_run: String,
    },
}

#[derive(Subcommand)]
pub enum DefinitionsCommand {
    /// List definitions
    List {
        /// Server-side filter expression
        #[arg(long)]
        filter: Option<String>,
        /// Only these definition tokens (repeatable)
        #[arg(long = "definition-token", value_name = "TOKEN")]
        tokens: Vec<String>,
    },
    /// Show one definition
    Get { definition: String },
}

#[derive(Subcommand)]
pub enum BatchCommand {
    /// List queries across the account
    Queries {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Queries per page (1..=1000)
        #[arg(long, default_value_t = 1000)]
        per_page: u32,
        /// Cover all spaces instead of the server's default selection
        #[arg(long)]
        all_spaces: bool,
        /// Follow pagination and print every query
        #[arg(long)]
        all_pages: bool,
    },
}

pub fn space_filter(all: bool) -> SpaceFilter {
    if all {
        SpaceFilter::All
    } else {
        SpaceFilter::Custom
    }
}
