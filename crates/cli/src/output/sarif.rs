use std::collections::HashSet;

use anyhow::Result;
use serde_json::json;

use tutorlint::education::{self, ExplanationLevel};
use tutorlint::problem::Severity;
use tutorlint::report::AnalysisReport;

/// Print SARIF 2.1.0 output for code-review tooling integration
pub fn print(report: &AnalysisReport) -> Result<()> {
    // One rule per distinct problem code, described from the registry where possible
    let rules: Vec<serde_json::Value> = report
        .problems
        .iter()
        .map(|p| p.code.as_str())
        .collect::<HashSet<_>>()
        .into_iter()
        .map(|code| {
            let problem = report.problems.iter().find(|p| p.code == code);
            let description = match education::entry_for(code) {
                Some(_) => education::explanation_for(code, ExplanationLevel::Intermediate),
                None => problem.map_or("", |p| p.message.as_str()),
            };
            json!({
                "id": code,
                "shortDescription": { "text": description },
                "defaultConfiguration": {
                    "level": problem.map_or("warning", |p| severity_to_sarif_level(p.severity))
                }
            })
        })
        .collect();

    let results: Vec<serde_json::Value> = report
        .problems
        .iter()
        .map(|p| {
            let mut result = json!({
                "ruleId": p.code,
                "level": severity_to_sarif_level(p.severity),
                "message": { "text": p.message }
            });

            if let Some(file) = &p.file {
                // Positions are already 1-based
                result["locations"] = json!([{
                    "physicalLocation": {
                        "artifactLocation": { "uri": file.display().to_string() },
                        "region": {
                            "startLine": p.position.line,
                            "startColumn": p.position.column,
                            "endLine": p.position.end_line.unwrap_or(p.position.line),
                            "endColumn": p.position.end_column.unwrap_or(p.position.column)
                        }
                    }
                }]);
            }

            result
        })
        .collect();

    let sarif = json!({
        "$schema": "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "tutorlint",
                    "informationUri": "https://github.com/codeclass-learning/tutorlint",
                    "rules": rules
                }
            },
            "results": results
        }]
    });

    println!("{}", serde_json::to_string_pretty(&sarif)?);
    Ok(())
}

fn severity_to_sarif_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "error",
        Severity::Major => "warning",
        Severity::Minor | Severity::Info => "note",
    }
}
