//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Generic container toolkit for puzzle input: sequences, stacks, grids and sibling trees
#[derive(Parser, Debug)]
#[command(name = "aockit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log level (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Directory with a local .aockit.toml (default: cwd)
    #[arg(short = 'c', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print all lines of a file
    Lines {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print the first line of a file
    Line {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Read a file as a grid and print it
    Grid {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Cell delimiter (overrides config; "" splits into characters)
        #[arg(long)]
        delim: Option<String>,
        /// Parse cells as integers
        #[arg(long)]
        numbers: bool,
    },

    /// Check whether a coordinate lies inside a file's grid
    Bounds {
        /// Input file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Column
        #[arg(allow_negative_numbers = true)]
        x: i64,
        /// Row
        #[arg(allow_negative_numbers = true)]
        y: i64,
        /// Cell delimiter (overrides config)
        #[arg(long)]
        delim: Option<String>,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
