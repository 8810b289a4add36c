//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Depth-aware ordered trees with a structural mapping to and from XML documents
#[derive(Parser, Debug)]
#[command(name = "treemark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug logging (repeat for more: -d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Log the decoded tree for every document read or written
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding a local .treemark.toml (default: cwd)
    #[arg(short = 'c', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a document as a tree
    Show {
        /// Markup file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List nodes in document order with their depth
    List {
        /// Markup file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Read a document and write it back through the tree mapping
    Convert {
        /// Source markup file
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// Destination (extension appended if missing); stdout when omitted
        #[arg(value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
