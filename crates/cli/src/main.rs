mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use tutorlint::education::ExplanationLevel;
use tutorlint::problem::Severity;

#[derive(Parser)]
#[command(name = "tutorlint")]
#[command(about = "Heuristic code-problem detection for student projects")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan source file(s) for problems
    Analyze {
        /// Path to a source file or directory of student code
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Minimum severity to report (default: config value, else info)
        #[arg(short, long)]
        severity: Option<SeverityFilter>,

        /// Explanation tier to show the learner (default: config value, else beginner)
        #[arg(short, long)]
        level: Option<LevelFilter>,

        /// Treat every file as this language instead of going by extension
        #[arg(long)]
        language: Option<String>,

        /// Path to config file (default: .tutorlint.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable the findings cache
        #[arg(long)]
        no_cache: bool,

        /// Suppress banner and summary
        #[arg(short, long)]
        quiet: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// List all available detectors
    List,
    /// Show the educational content registered for a problem code
    Explain {
        /// Problem code (e.g. E501, NameError, REACT_KEY_PROP)
        code: String,

        /// Explanation tier
        #[arg(short, long, default_value = "beginner")]
        level: LevelFilter,
    },
    /// Generate a default .tutorlint.toml config file
    Init,
}

#[derive(ValueEnum, Clone)]
enum OutputFormat {
    Text,
    Json,
    Sarif,
}

#[derive(ValueEnum, Clone)]
enum SeverityFilter {
    Critical,
    Major,
    Minor,
    Info,
}

impl SeverityFilter {
    fn as_severity(&self) -> Severity {
        match self {
            SeverityFilter::Critical => Severity::Critical,
            SeverityFilter::Major => Severity::Major,
            SeverityFilter::Minor => Severity::Minor,
            SeverityFilter::Info => Severity::Info,
        }
    }
}

#[derive(ValueEnum, Clone)]
enum LevelFilter {
    Beginner,
    Intermediate,
    Advanced,
}

impl LevelFilter {
    fn as_level(&self) -> ExplanationLevel {
        match self {
            LevelFilter::Beginner => ExplanationLevel::Beginner,
            LevelFilter::Intermediate => ExplanationLevel::Intermediate,
            LevelFilter::Advanced => ExplanationLevel::Advanced,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            severity,
            level,
            language,
            config,
            no_cache,
            quiet,
            no_color,
        } => commands::analyze::run(
            &path, format, severity, level, language, config, no_cache, quiet, no_color,
        ),
        Commands::List => commands::list::run(),
        Commands::Explain { code, level } => commands::explain::run(&code, level.as_level()),
        Commands::Init => commands::init::run(),
    }
}
