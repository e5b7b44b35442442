//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "budget-console")]
#[command(about = "Budget-transfer admin console list screens", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available screens
    Screens,

    /// Render a screen from a data file
    Show(ShowArgs),

    /// Dispatch a row action and print what the page would do
    Act(ActArgs),
}

#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// Screen name, e.g. transfers
    #[arg(value_name = "SCREEN")]
    pub screen: String,

    /// JSON data file: an array of rows or a fetch envelope
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the config value)
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,

    /// Show every row on one page
    #[arg(long, conflicts_with = "per_page")]
    pub all: bool,

    /// Hide a column (repeatable)
    #[arg(long = "hide", value_name = "COLUMN")]
    pub hide: Vec<String>,

    /// Request a sort on a column; prefix with '-' for descending
    #[arg(long, value_name = "COLUMN", allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Body rows shown before scrolling (0 for no limit)
    #[arg(long, value_name = "N")]
    pub max_height: Option<u16>,

    /// Skip rows at the top of the body
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub scroll: usize,

    /// Hide the totals footer
    #[arg(long)]
    pub no_footer: bool,
}

#[derive(Debug, clap::Args)]
pub struct ActArgs {
    /// Screen name, e.g. pending-transfers
    #[arg(value_name = "SCREEN")]
    pub screen: String,

    /// JSON data file: an array of rows or a fetch envelope
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Row index within the page (0-based)
    #[arg(long, value_name = "N")]
    pub row: usize,

    /// view, edit, delete, approve or reject; or open a column's link with link:COLUMN
    #[arg(long, value_name = "ACTION")]
    pub action: String,

    /// Page the row is on (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the config value)
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,
}
