//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeeper")]
#[command(about = "Personal note keeper with JSON and CSV stores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $NOTEKEEPER_CONFIG or ./notekeeper.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Record-oriented store, overrides json_path from config
    #[arg(long, global = true, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Tabular store, overrides csv_path from config
    #[arg(long, global = true, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Without a command, starts the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all notes
    List {
        /// Store format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Add a note
    Add {
        title: String,
        body: String,

        /// Store format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Replace title and body of a note
    Edit {
        id: u64,
        title: String,
        body: String,

        /// Store format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Delete a note
    Delete {
        id: u64,

        /// Store format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Show a single note
    Show {
        id: u64,

        /// Store format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// List notes created on a date (DD-MM-YYYY, today, yesterday)
    ByDate {
        date: String,

        /// Store format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}
