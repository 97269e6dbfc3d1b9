//! CLI commands and argument parsing

use crate::config::{HOST_ENV, TOKEN_ENV};
use crate::models::{CreatedAtSortMode, FileExportFormat, FileImportFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Zoo API command-line client
#[derive(Parser, Debug)]
#[command(name = "zoo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API host
    #[arg(long, global = true, env = HOST_ENV)]
    pub host: Option<String>,

    /// API token
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the user the token belongs to
    Whoami,

    /// List your API calls
    ApiCalls {
        /// Items per page
        #[arg(long)]
        limit: Option<u32>,

        /// Sort order (created_at_ascending, created_at_descending)
        #[arg(long)]
        sort_by: Option<CreatedAtSortMode>,

        /// Stop after this many items
        #[arg(long)]
        max_items: Option<usize>,
    },

    /// List your API tokens
    ApiTokens {
        /// Items per page
        #[arg(long)]
        limit: Option<u32>,
    },

    /// List users
    Users {
        /// Items per page
        #[arg(long)]
        limit: Option<u32>,

        /// Stop after this many items
        #[arg(long)]
        max_items: Option<usize>,
    },

    /// Convert a CAD file to another format
    Convert {
        /// Input file
        input: PathBuf,

        /// Input format (defaults to the file extension)
        #[arg(long)]
        from: Option<FileImportFormat>,

        /// Output format
        #[arg(long)]
        to: FileExportFormat,

        /// Directory for the converted files
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Indented JSON
    Pretty,
}
