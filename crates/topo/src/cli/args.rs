//! Clap argument definitions for the `topo` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use topo_match::Profile;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "topo", version)]
#[command(about = "Topic finder - fuzzy and breadcrumb search over topic trees")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read topics from, overriding `[source]` in configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// JSON topic file
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    pub topics: Option<PathBuf>,

    /// Topic API base URL (topics are fetched from URL/topics)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

/// Matching overrides, applied on top of `[search]` in configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Search profile: simple (fuzzy only) or breadcrumb (fuzzy plus path prefix) [default: breadcrumb]
    #[arg(long)]
    pub profile: Option<Profile>,

    /// Maximum fuzzy score, 0.0 (exact) to 1.0 (anything) [default: 0.3]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Results revealed per step [default: 20]
    #[arg(short = 'n', long)]
    pub window: Option<usize>,
}

/// Arguments for `topo search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words, joined with spaces
    #[arg(required = true)]
    pub query: Vec<String>,

    #[command(flatten)]
    /// Topic source override.
    pub source: SourceArgs,

    #[command(flatten)]
    /// Matching overrides.
    pub params: MatchArgs,

    /// Show every match instead of the first window
    #[arg(long)]
    pub all: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `topo ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    #[command(flatten)]
    /// Topic source override.
    pub source: SourceArgs,

    /// Show topic metadata
    #[arg(short = 'l', long)]
    pub long: bool,
}

/// Arguments for `topo interactive`.
#[derive(Args, Debug, Clone)]
pub struct InteractiveCommand {
    #[command(flatten)]
    /// Topic source override.
    pub source: SourceArgs,

    #[command(flatten)]
    /// Matching overrides.
    pub params: MatchArgs,

    /// Quiet period before a search runs, in milliseconds [default: 250]
    #[arg(long)]
    pub debounce_ms: Option<u64>,
}

/// Arguments for `topo init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.topo.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `topo` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search topics once and print the first window of results
    #[command(after_help = "\
QUERY SYNTAX:
  physics           Fuzzy match, tolerant of typos (phsyics)
  science/phy       Breadcrumb mode: topics below science, deepest first
  science/          Every topic below science

EXAMPLES:
  topo search quantum
  topo search science/ --all
  topo search --profile simple 'film noir'")]
    Search(SearchCommand),

    /// List every topic in tree order
    Ls(LsCommand),

    /// Search as you type on the terminal
    #[command(after_help = "\
INPUT:
  <text>            Replace the query (searches after a short pause)
  :more             Reveal the next window of results
  :enter            Choose the best match
  :pick N           Choose result N
  :blur             Hide results
  :focus            Show results again
  :quit             Exit (also Ctrl-D)")]
    Interactive(InteractiveCommand),

    /// Initialize topo configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}
