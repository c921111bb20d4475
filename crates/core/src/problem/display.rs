use std::fmt;

use super::types::{Category, Position, Problem, ProblemType, Severity};

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::Major => write!(f, "Major"),
            Severity::Minor => write!(f, "Minor"),
            Severity::Info => write!(f, "Info"),
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemType::Error => write!(f, "error"),
            ProblemType::Warning => write!(f, "warning"),
            ProblemType::Suggestion => write!(f, "suggestion"),
            ProblemType::Info => write!(f, "info"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Syntax => write!(f, "syntax"),
            Category::Logic => write!(f, "logic"),
            Category::Style => write!(f, "style"),
            Category::Performance => write!(f, "performance"),
            Category::Security => write!(f, "security"),
            Category::Accessibility => write!(f, "accessibility"),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({})",
            self.severity, self.message, self.code
        )?;
        if let Some(file) = &self.file {
            write!(f, " at {}:{}", file.display(), self.position)?;
        } else {
            write!(f, " at {}", self.position)?;
        }
        Ok(())
    }
}

impl Severity {
    /// Style-class token used by editor UIs for highlighting. Total over the enum.
    pub fn style_token(&self) -> &'static str {
        match self {
            Severity::Critical => "text-red-500",
            Severity::Major => "text-orange-500",
            Severity::Minor => "text-yellow-500",
            Severity::Info => "text-blue-400",
        }
    }
}

impl ProblemType {
    /// Icon-name token used by editor UIs next to each finding. Total over the enum.
    pub fn icon(&self) -> &'static str {
        match self {
            ProblemType::Error => "x-circle",
            ProblemType::Warning => "alert-triangle",
            ProblemType::Suggestion => "lightbulb",
            ProblemType::Info => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_token_is_total() {
        for severity in [
            Severity::Critical,
            Severity::Major,
            Severity::Minor,
            Severity::Info,
        ] {
            assert!(!severity.style_token().is_empty());
        }
    }

    #[test]
    fn test_icon_is_total() {
        for ty in [
            ProblemType::Error,
            ProblemType::Warning,
            ProblemType::Suggestion,
            ProblemType::Info,
        ] {
            assert!(!ty.icon().is_empty());
        }
    }
}
