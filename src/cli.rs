/// CLI argument definitions for the `rigcheck` command.
///
/// Defines all subcommands and their arguments using the `clap` derive
/// macros; long help text lives in `cli_help`.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use rigcheck::component::Category;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "rigcheck",
    version,
    about = "Performance and compatibility scoring for PC builds"
)]
pub struct Cli {
    /// Log scoring decisions (debug level; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Build file plus the optional catalog its ids resolve against.
#[derive(Args)]
pub struct BuildArgs {
    /// Build file (.toml or .json)
    pub build: PathBuf,

    /// Component catalog (.toml or .json) for slots given by id
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a complete build
    #[command(long_about = cli_help::ANALYZE)]
    Analyze {
        #[command(flatten)]
        build: BuildArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a single component file
    #[command(long_about = cli_help::COMPONENT)]
    Component {
        /// Component category: cpu, gpu, memory, storage or psu
        #[arg(value_parser = parse_category)]
        category: Category,

        /// Component file (.toml or .json)
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze a build and get an AI review of it
    #[command(long_about = cli_help::ADVISE)]
    Advise {
        #[command(flatten)]
        build: BuildArgs,

        /// AI provider to use
        #[arg(long, default_value = "claude")]
        provider: String,

        /// Model to use (default: claude-sonnet-4-5-20250929)
        #[arg(long)]
        model: Option<String>,

        /// Save the review to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_arg(s)
        .ok_or_else(|| format!("unknown category '{s}' (expected cpu, gpu, memory, storage or psu)"))
}
