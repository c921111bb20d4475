use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Severity levels ordered from most to least severe.
/// IMPORTANT: Variant order matters. Derived Ord puts Critical < Major < Minor < Info,
/// which is used for filtering (retain problems where severity <= threshold).
/// Do NOT reorder these variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Info,
}

impl Severity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "major" => Some(Severity::Major),
            "minor" => Some(Severity::Minor),
            "info" | "informational" => Some(Severity::Info),
            _ => None,
        }
    }
}

/// The nature of a finding, orthogonal to its severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProblemType {
    Error,
    Warning,
    Suggestion,
    Info,
}

impl ProblemType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(ProblemType::Error),
            "warning" => Some(ProblemType::Warning),
            "suggestion" => Some(ProblemType::Suggestion),
            "info" => Some(ProblemType::Info),
            _ => None,
        }
    }
}

/// Taxonomy axis grouping problems by concern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Syntax,
    Logic,
    Style,
    Performance,
    Security,
    Accessibility,
}

/// 1-based source position, optionally spanning a range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub end_line: Option<usize>,
    pub end_column: Option<usize>,
}

impl Position {
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            line: line.max(1),
            column: column.max(1),
            end_line: None,
            end_column: None,
        }
    }
}

/// A single detected finding against one line of source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    pub severity: Severity,
    pub category: Category,
    /// Stable short identifier for the finding kind (e.g. "E501", "REACT_KEY_PROP").
    /// Join key into the educational content registry. Always non-empty.
    pub code: String,
    pub message: String,
    pub explanation: String,
    pub fix_suggestion: Option<String>,
    pub learn_more: Option<String>,
    pub position: Position,
    /// Human-readable language label ("Python", "JavaScript", "React").
    pub source: String,
    pub file: Option<PathBuf>,
    pub snippet: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical < Severity::Major);
        assert!(Severity::Major < Severity::Minor);
        assert!(Severity::Minor < Severity::Info);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("MAJOR"), Some(Severity::Major));
        assert_eq!(Severity::parse("informational"), Some(Severity::Info));
        assert_eq!(Severity::parse("bogus"), None);
    }

    #[test]
    fn test_position_clamps_to_one() {
        let pos = Position::at(0, 0);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
    }
}
