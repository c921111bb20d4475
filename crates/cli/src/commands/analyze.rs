use std::path::{Path, PathBuf};

use anyhow::Result;

use tutorlint::cache::CacheManager;
use tutorlint::config::{self, Config};
use tutorlint::report::AnalysisReport;
use tutorlint::scan;

use crate::output;
use crate::{LevelFilter, OutputFormat, SeverityFilter};

const CACHE_DIR: &str = ".tutorlint-cache";

#[allow(clippy::too_many_arguments)]
pub fn run(
    path: &Path,
    format: OutputFormat,
    severity: Option<SeverityFilter>,
    level: Option<LevelFilter>,
    language: Option<String>,
    config_path: Option<PathBuf>,
    no_cache: bool,
    quiet: bool,
    no_color: bool,
) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(".tutorlint.toml"));
    let config = Config::load(&config_path)?;

    let registry = tutorlint_detectors::default_registry();

    // Cache failures are non-fatal; scanning just proceeds uncached
    let mut cache = if no_cache {
        None
    } else {
        CacheManager::open(PathBuf::from(CACHE_DIR)).ok()
    };

    let scanned = scan::scan_path(&registry, path, language.as_deref(), cache.as_mut())?;

    if !quiet {
        eprintln!("Analyzing {} files...", scanned.files.len());
        for skipped in &scanned.skipped {
            eprintln!("Skipping {} (no detector)", skipped.display());
        }
    }

    // Config + inline suppressions
    let inline = config::parse_inline_suppressions(&scanned.source_map);
    let mut problems = config::apply_suppressions(scanned.problems, &config, &inline);

    // Severity threshold: CLI flag wins over config
    let min_severity = severity
        .map(|s| s.as_severity())
        .unwrap_or_else(|| config.severity_threshold());
    problems.retain(|p| p.severity <= min_severity);

    let explanation_level = level
        .map(|l| l.as_level())
        .unwrap_or_else(|| config.explanation_level());

    let report = AnalysisReport::from_problems(scanned.files, problems);

    match format {
        OutputFormat::Json => output::json::print(&report)?,
        OutputFormat::Sarif => output::sarif::print(&report)?,
        OutputFormat::Text => output::text::print(&report, explanation_level, quiet, no_color)?,
    }

    if report.total_problems > 0 {
        std::process::exit(1);
    }

    Ok(())
}
