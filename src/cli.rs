use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Count LDAP search filter shapes in directory server access logs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Access log files, read in the order given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// TOML file overriding placeholder, patterns, capacity and column widths
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only report full filters, skip the per-component table
    #[arg(long)]
    pub full_only: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// When to colorize diagnostics
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width two-column layout
    Text,
    /// Box-drawn tables with share of total
    Table,
    /// JSON document
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
