//! Command-line surface.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use sentinel_core::export::ExportFormat;
use sentinel_core::{AlertStatus, Severity};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sentinel", about = "Sentinel — triage workflow failure alerts from the terminal")]
pub struct Cli {
    /// Write debug logs to /tmp/sentinel-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file to use instead of ~/.config/sentinel/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List alerts, newest first.
    List {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Overrides `listing.page_size`.
        #[arg(long)]
        page_size: Option<usize>,
        /// Print the page as JSON instead of one line per alert.
        #[arg(long)]
        json: bool,
    },
    /// Show every resolved field of one alert.
    Show {
        #[command(flatten)]
        input: InputArgs,
        id: String,
    },
    /// Group alerts by workflow, node and error.
    Groups {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Triage health figures.
    Stats {
        #[command(flatten)]
        input: InputArgs,
        /// Last day of the timeline (defaults to today, UTC).
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Run the message parser on raw text and print the fields found.
    Parse {
        /// File holding the message; reads stdin when omitted or `-`.
        file: Option<PathBuf>,
    },
    /// Mark alerts resolved in the input file.
    Resolve {
        #[command(flatten)]
        input: InputArgs,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Delete alerts from the input file.
    Delete {
        #[command(flatten)]
        input: InputArgs,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Export the (filtered) alerts as CSV or JSON.
    Export {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        /// Output file. Defaults to `alerts_<today>.<ext>` in the current directory.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Read JSON lines from stdin and print each alert as it arrives.
    Watch,
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Alert document: a JSON array or JSON lines. `-` reads stdin.
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,
}

impl InputArgs {
    pub fn is_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// Case-insensitive match on message and workflow name.
    #[arg(long, short)]
    pub search: Option<String>,
    #[arg(long)]
    pub status: Option<AlertStatus>,
    #[arg(long)]
    pub priority: Option<Severity>,
    /// First day, inclusive (YYYY-MM-DD).
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,
    /// Last day, inclusive (YYYY-MM-DD).
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,
}
