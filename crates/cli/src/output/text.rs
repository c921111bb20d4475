use anyhow::Result;
use colored::Colorize;

use tutorlint::education::{self, ExplanationLevel};
use tutorlint::problem::Severity;
use tutorlint::report::AnalysisReport;

pub fn print(
    report: &AnalysisReport,
    level: ExplanationLevel,
    quiet: bool,
    no_color: bool,
) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }

    if !quiet {
        println!();
        println!("{}", "  tutorlint - Code Problems".bold());
        println!("  Files analyzed: {}", report.files_analyzed.len());
        println!();
    }

    if report.problems.is_empty() {
        if !quiet {
            println!("  {} No problems found.", "✓".green().bold());
            println!();
        }
        return Ok(());
    }

    for problem in &report.problems {
        let severity_label = match problem.severity {
            Severity::Critical => "CRITICAL".red().bold(),
            Severity::Major => "MAJOR".yellow().bold(),
            Severity::Minor => "MINOR".blue(),
            Severity::Info => "INFO".dimmed(),
        };

        println!(
            "  [{}] {} ({}, {})",
            severity_label, problem.message, problem.code, problem.source
        );

        if let Some(file) = &problem.file {
            println!(
                "    {} {}:{}",
                "-->".dimmed(),
                file.display(),
                problem.position
            );
        }
        if let Some(snippet) = &problem.snippet {
            println!("    {} {}", "|".dimmed(), snippet);
        }

        // Re-resolve at the learner's tier; stored explanations are beginner-level
        let explanation = match education::entry_for(&problem.code) {
            Some(_) => education::explanation_for(&problem.code, level),
            None => problem.explanation.as_str(),
        };
        println!("    {}", explanation);

        if let Some(fix) = &problem.fix_suggestion {
            println!("    {} {}", "Fix:".green(), fix);
        }
        if let Some(url) = &problem.learn_more {
            println!("    {} {}", "Learn more:".dimmed(), url);
        }
        println!();
    }

    if !quiet {
        println!("{}", "  Summary".bold().underline());
        println!("    Critical: {}", report.problems_by_severity.critical);
        println!("    Major:    {}", report.problems_by_severity.major);
        println!("    Minor:    {}", report.problems_by_severity.minor);
        println!("    Info:     {}", report.problems_by_severity.info);
        println!("    Total:    {}", report.total_problems);
        println!();
    }

    Ok(())
}
