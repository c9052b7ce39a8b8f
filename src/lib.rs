pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod frequency;
pub mod logging;
pub mod normalize;
pub mod report;

pub use analyzer::{Analyzer, FilterReport, InputStats};
pub use cli::{Cli, ColorMode, OutputFormat, cli_parse};
pub use config::{AnalyzerConfig, ConfigError, load_config};
pub use error::AnalyzeError;
pub use filter::{FilterNormalizer, NormalizedFilter};
pub use frequency::{FrequencyEntry, FrequencyTable, Insertion};
pub use normalize::{ValueNormalizer, normalize_value};
pub use report::{ReportScope, render_report};

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Reads every file in order and returns the sorted report.
///
/// Any unreadable file aborts the whole run; nothing is reported for the
/// files read before it.
pub fn analyze_files(
    files: &[PathBuf],
    config: &AnalyzerConfig,
) -> Result<FilterReport, AnalyzeError> {
    if files.is_empty() {
        return Err(AnalyzeError::MissingInput);
    }

    let mut analyzer = Analyzer::new(config)?;
    for file in files {
        analyzer.process_file(file)?;
    }

    let report = analyzer.finish();
    tracing::debug!(
        files = report.stats.files,
        lines = report.stats.lines,
        filters = report.stats.filters,
        full_filters = report.full_filters.len(),
        components = report.components.len(),
        "analysis complete"
    );
    Ok(report)
}

fn write_output_file(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content).map_err(|e| {
        anyhow::anyhow!("Failed to write output file '{}': {}", path.display(), e)
    })
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();

    let ansi = match cli.color {
        ColorMode::Always => {
            colored::control::set_override(true);
            true
        }
        ColorMode::Never => {
            colored::control::set_override(false);
            false
        }
        ColorMode::Auto => std::io::stderr().is_terminal(),
    };
    logging::init_logging(cli.verbose, cli.quiet, ansi);

    if cli.files.is_empty() {
        return Err(AnalyzeError::MissingInput.into());
    }

    let config = load_config(cli.config.as_deref())?;
    if let Some(config_path) = &cli.config {
        tracing::info!(config = %config_path.display(), "loaded configuration");
    }

    let report = analyze_files(&cli.files, &config)?;

    let scope = if cli.full_only {
        ReportScope::FullFiltersOnly
    } else {
        ReportScope::All
    };
    let rendered = render_report(&report, cli.format, &config.report, scope);

    print!("{rendered}");
    if let Some(path) = &cli.output {
        write_output_file(path, &rendered)?;
    }

    Ok(())
}
