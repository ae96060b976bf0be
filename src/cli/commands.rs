use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::RecordId;

#[derive(Parser)]
#[command(name = "celeb", about = concat!("celeb v", env!("CARGO_PKG_VERSION"), " - browse and tidy a list of celebrities"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Load records from this JSON file instead of the bundled list
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file (default: ./celeb.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file (required for logging from the TUI)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List records, optionally filtered by name
    List(ListArgs),
    /// Show one record in full
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the full name
    #[arg(short, long)]
    pub query: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Record ID
    pub id: RecordId,
}
