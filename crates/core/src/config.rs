use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::education::ExplanationLevel;
use crate::problem::{Problem, Severity};

/// Project-level configuration loaded from `.tutorlint.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
    #[serde(default)]
    pub languages: HashMap<String, LanguageConfig>,
    #[serde(default)]
    pub suppressions: SuppressionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub severity_threshold: String,
    pub output_format: String,
    /// Which explanation tier learners see in text output.
    pub explanation_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            severity_threshold: "info".to_string(),
            output_format: "text".to_string(),
            explanation_level: "beginner".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub enabled: Option<bool>,
    /// Problem codes to drop for this language (e.g. ["E501"]).
    pub ignored_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuppressionConfig {
    pub files: Vec<String>,
}

impl Config {
    /// Load config from a TOML file path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check whether detection for a language label is enabled.
    pub fn is_language_enabled(&self, language: &str) -> bool {
        self.languages
            .get(&language.to_lowercase())
            .and_then(|l| l.enabled)
            .unwrap_or(true)
    }

    /// Check whether a code is ignored for the given language label.
    pub fn is_code_ignored(&self, language: &str, code: &str) -> bool {
        self.languages
            .get(&language.to_lowercase())
            .is_some_and(|l| l.ignored_codes.iter().any(|c| c == code))
    }

    /// Parse the global severity threshold into a Severity value.
    pub fn severity_threshold(&self) -> Severity {
        Severity::parse(&self.global.severity_threshold).unwrap_or(Severity::Info)
    }

    /// Parse the explanation level, defaulting to beginner.
    pub fn explanation_level(&self) -> ExplanationLevel {
        ExplanationLevel::parse(&self.global.explanation_level)
            .unwrap_or(ExplanationLevel::Beginner)
    }

    /// Check if a file path should be excluded based on suppression glob patterns.
    pub fn is_file_excluded(&self, file_path: &Path) -> bool {
        let path_str = file_path.to_string_lossy();
        self.suppressions
            .files
            .iter()
            .any(|pattern| glob::Pattern::new(pattern).is_ok_and(|p| p.matches(&path_str)))
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# tutorlint configuration
# See: https://github.com/codeclass-learning/tutorlint

[global]
# Minimum severity to report: "critical", "major", "minor", "info"
severity_threshold = "info"
# Output format: "text", "json", "sarif"
output_format = "text"
# Explanation tier shown to the learner: "beginner", "intermediate", "advanced"
explanation_level = "beginner"

# Per-language overrides (keys: python, javascript, react)
# [languages.python]
# enabled = true
# ignored_codes = ["E501"]

[suppressions]
# Glob patterns for files to skip entirely
files = ["**/node_modules/**", "**/__pycache__/**"]
"#
    }
}

/// Inline suppression: parses source files for `tutorlint-ignore` comments.
/// Both `//` and `#` comment syntax are honored, since we scan Python as well
/// as JavaScript. Returns a map of (file, line) -> suppressed problem codes.
/// A bare `tutorlint-ignore` (no colon) suppresses all codes for that line.
pub fn parse_inline_suppressions(
    source_map: &HashMap<PathBuf, String>,
) -> HashMap<(PathBuf, usize), Vec<String>> {
    let mut suppressions: HashMap<(PathBuf, usize), Vec<String>> = HashMap::new();

    for (path, source) in source_map {
        for (idx, line) in source.lines().enumerate() {
            let trimmed = line.trim();
            if let Some(rest) = extract_suppression_comment(trimmed) {
                // Suppression applies to the *next* line (idx is 0-based, lines are 1-based)
                let target_line = idx + 2;
                let codes = if rest.is_empty() {
                    vec!["*".to_string()] // wildcard = suppress all
                } else {
                    rest.split(',').map(|s| s.trim().to_string()).collect()
                };
                suppressions.insert((path.clone(), target_line), codes);
            }
        }
    }

    suppressions
}

/// Extract the code list from a suppression comment.
/// Returns Some("") for bare ignore, Some("E501, E225") for specific, None if not a suppression.
fn extract_suppression_comment(line: &str) -> Option<&str> {
    // Match: // tutorlint-ignore, # tutorlint-ignore, or either followed by ": CODE1, CODE2"
    let comment = line
        .strip_prefix("//")
        .or_else(|| line.strip_prefix('#'))?;
    let comment = comment.trim();
    let rest = comment.strip_prefix("tutorlint-ignore")?;
    let rest = rest.trim();
    if rest.is_empty() {
        Some("")
    } else {
        let rest = rest.strip_prefix(':')?;
        Some(rest.trim())
    }
}

/// Filter problems based on config and inline suppressions.
pub fn apply_suppressions(
    problems: Vec<Problem>,
    config: &Config,
    inline_suppressions: &HashMap<(PathBuf, usize), Vec<String>>,
) -> Vec<Problem> {
    problems
        .into_iter()
        .filter(|p| {
            if !config.is_language_enabled(&p.source) {
                return false;
            }
            if config.is_code_ignored(&p.source, &p.code) {
                return false;
            }
            if let Some(file) = &p.file {
                if config.is_file_excluded(file) {
                    return false;
                }
                let key = (file.clone(), p.position.line);
                if let Some(suppressed) = inline_suppressions.get(&key) {
                    if suppressed.iter().any(|s| s == "*" || *s == p.code) {
                        return false;
                    }
                }
            }
            true
        })
        .collect()
}
