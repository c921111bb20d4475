use tutorlint::detector::{run_rules, ProblemDetector, Rule, ScanContext};
use tutorlint::problem::{Category, Problem, ProblemType, Severity};

use crate::support::{emit, Kind};

/// Heuristic line-scanning detector for React code. Serves the `react`, `jsx`,
/// and `tsx` tags identically.
pub struct ReactDetector;

const SOURCE: &str = "React";

const MISSING_KEY: Kind = Kind {
    code: "REACT_KEY_PROP",
    problem_type: ProblemType::Warning,
    severity: Severity::Major,
    category: Category::Logic,
};

const KEBAB_STYLE: Kind = Kind {
    code: "REACT_CAMELCASE",
    problem_type: ProblemType::Warning,
    severity: Severity::Minor,
    category: Category::Style,
};

const CLASS_COMPONENT: Kind = Kind {
    code: "REACT_CLASS_COMPONENT",
    problem_type: ProblemType::Suggestion,
    severity: Severity::Info,
    category: Category::Style,
};

const WARNING_RULES: &[Rule] = &[map_without_key, kebab_case_style];
const SUGGESTION_RULES: &[Rule] = &[class_component];

/// `.map(` with no `key=` on the same line. Only that one line is inspected,
/// so a key prop on the following line still trips this check.
fn map_without_key(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let Some(pos) = line.find(".map(") else {
        return Vec::new();
    };
    if line.contains("key=") {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &MISSING_KEY,
        SOURCE,
        line_no,
        pos + 1,
        "List rendered with .map() is missing a key prop".to_string(),
        None,
        None,
    )]
}

/// Hyphen inside an inline style object means a kebab-case CSS property.
fn kebab_case_style(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let Some(pos) = line.find("style={{") else {
        return Vec::new();
    };
    if !line.contains('-') {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &KEBAB_STYLE,
        SOURCE,
        line_no,
        pos + 1,
        "Inline style uses a kebab-case property; use camelCase".to_string(),
        None,
        None,
    )]
}

fn class_component(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    if !line.contains("class ") || !line.contains("extends React.Component") {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &CLASS_COMPONENT,
        SOURCE,
        line_no,
        line.find("class ").map_or(1, |p| p + 1),
        "Class component; consider a function component with hooks".to_string(),
        Some("Modern React code uses function components with hooks like useState instead of classes. They're shorter and easier to test."),
        Some("Rewrite as a function component and move state into useState/useEffect hooks."),
    )]
}

impl ProblemDetector for ReactDetector {
    fn language(&self) -> &str {
        SOURCE
    }

    fn tags(&self) -> &[&str] {
        &["react", "jsx", "tsx"]
    }

    fn description(&self) -> &str {
        "Line-scanning checks for React/JSX: list keys, inline style casing, class components"
    }

    fn detect_errors(&self, _ctx: &ScanContext) -> Vec<Problem> {
        // React problems that stop a student cold surface as JavaScript
        // errors; this detector only carries warnings and suggestions.
        Vec::new()
    }

    fn detect_warnings(&self, ctx: &ScanContext) -> Vec<Problem> {
        run_rules(WARNING_RULES, ctx)
    }

    fn detect_suggestions(&self, ctx: &ScanContext) -> Vec<Problem> {
        run_rules(SUGGESTION_RULES, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warnings(source: &str) -> Vec<Problem> {
        ReactDetector.detect_warnings(&ScanContext::new(source, None))
    }

    fn suggestions(source: &str) -> Vec<Problem> {
        ReactDetector.detect_suggestions(&ScanContext::new(source, None))
    }

    #[test]
    fn test_map_without_key_flagged() {
        let found = warnings("items.map(item => <div>{item}</div>)\n");
        let keys: Vec<_> = found.iter().filter(|p| p.code == "REACT_KEY_PROP").collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].severity, Severity::Major);
        assert_eq!(keys[0].category, Category::Logic);
    }

    #[test]
    fn test_map_with_key_not_flagged() {
        let found = warnings("items.map(item => <div key={item.id}>{item}</div>)\n");
        assert!(found.iter().all(|p| p.code != "REACT_KEY_PROP"));
    }

    #[test]
    fn test_kebab_case_inline_style() {
        let found = warnings("<div style={{ font-size: '12px' }}>\n");
        assert!(found.iter().any(|p| p.code == "REACT_CAMELCASE"));
        let found = warnings("<div style={{ fontSize: '12px' }}>\n");
        assert!(found.iter().all(|p| p.code != "REACT_CAMELCASE"));
    }

    #[test]
    fn test_class_component_suggestion() {
        let found = suggestions("class Timer extends React.Component {\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "REACT_CLASS_COMPONENT");
        assert_eq!(found[0].problem_type, ProblemType::Suggestion);
    }

    #[test]
    fn test_plain_class_not_flagged() {
        assert!(suggestions("class Point {\n").is_empty());
    }
}
