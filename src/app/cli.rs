//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sketch Judge - stroke shape classifier with an anti-automation gate
#[derive(Parser, Debug)]
#[command(name = "sketch-judge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit one uniformly-chosen exercise prompt
    Prompt,

    /// Evaluate a recorded stroke file against an expected shape
    Evaluate {
        /// Input stroke file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Expected shape (circle, rectangle, triangle, line)
        #[arg(short, long)]
        shape: String,

        /// Elapsed drawing time in seconds (overrides the file's value)
        #[arg(short, long)]
        elapsed: Option<f64>,
    },

    /// Write a default configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show the active configuration
    Config,
}
