use once_cell::sync::Lazy;
use regex::Regex;

use tutorlint::detector::{run_rules, ProblemDetector, Rule, ScanContext};
use tutorlint::problem::{Category, Problem, ProblemType, Severity};

use crate::support::{emit, Kind};

/// Heuristic line-scanning detector for JavaScript and TypeScript.
///
/// TypeScript-specific syntax is deliberately not distinguished; both tags
/// share these checks.
pub struct JavaScriptDetector;

const SOURCE: &str = "JavaScript";

/// Statement starters the semicolon rule applies to.
const STATEMENT_STARTERS: &[&str] = &["const ", "let ", "var ", "return ", "throw "];

const MISSING_SEMICOLON: Kind = Kind {
    code: "JS_SEMICOLON",
    problem_type: ProblemType::Warning,
    severity: Severity::Minor,
    category: Category::Style,
};

const CONSOLE_CHECK: Kind = Kind {
    code: "JS_CONSOLE_CHECK",
    problem_type: ProblemType::Info,
    severity: Severity::Info,
    category: Category::Logic,
};

const VAR_USAGE: Kind = Kind {
    code: "JS_VAR",
    problem_type: ProblemType::Suggestion,
    severity: Severity::Minor,
    category: Category::Style,
};

const ANON_FUNCTION: Kind = Kind {
    code: "JS_ANON_FUNCTION",
    problem_type: ProblemType::Suggestion,
    severity: Severity::Info,
    category: Category::Style,
};

const WARNING_RULES: &[Rule] = &[missing_semicolon];
const SUGGESTION_RULES: &[Rule] = &[console_log_check, var_usage, anonymous_function];

/// A statement line with no terminator. Control-flow and function lines are
/// excluded because their braces carry the structure.
fn missing_semicolon(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let trimmed = line.trim();
    if trimmed.is_empty()
        || trimmed.ends_with(';')
        || trimmed.ends_with('{')
        || trimmed.ends_with('}')
    {
        return Vec::new();
    }
    if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
        return Vec::new();
    }
    if line.contains("if ")
        || line.contains("for ")
        || line.contains("while ")
        || line.contains("function")
        || line.contains("=>")
    {
        return Vec::new();
    }
    if !STATEMENT_STARTERS.iter().any(|s| trimmed.starts_with(s)) {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &MISSING_SEMICOLON,
        SOURCE,
        line_no,
        line.len().max(1),
        "Missing semicolon at end of statement".to_string(),
        None,
        None,
    )]
}

static CONSOLE_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"console\.log\((\w+)\)").ok());

/// Informational only: no scope check is performed, the reminder always fires
/// when the pattern matches.
fn console_log_check(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let Some(re) = CONSOLE_RE.as_ref() else {
        return Vec::new();
    };
    let Some(caps) = re.captures(line) else {
        return Vec::new();
    };
    let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
        return Vec::new();
    };
    vec![emit(
        ctx,
        &CONSOLE_CHECK,
        SOURCE,
        line_no,
        whole.start() + 1,
        format!("Logging '{}', make sure it is defined", name.as_str()),
        Some("console.log prints a value so you can see it while the program runs. Double-check the variable you're logging has been created and spelled correctly."),
        None,
    )]
}

fn var_usage(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let Some(pos) = line.find("var ") else {
        return Vec::new();
    };
    vec![emit(
        ctx,
        &VAR_USAGE,
        SOURCE,
        line_no,
        pos + 1,
        "'var' is outdated; use 'let' or 'const'".to_string(),
        None,
        None,
    )]
}

/// `function(` with no name. Named declarations (`function name(`) pass.
fn anonymous_function(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let Some(pos) = line.find("function(") else {
        return Vec::new();
    };
    vec![emit(
        ctx,
        &ANON_FUNCTION,
        SOURCE,
        line_no,
        pos + 1,
        "Anonymous function; consider arrow syntax".to_string(),
        Some("An arrow function like (x) => x + 1 is the modern, shorter way to write a small anonymous function."),
        Some("Rewrite as an arrow function: (args) => { ... }"),
    )]
}

impl ProblemDetector for JavaScriptDetector {
    fn language(&self) -> &str {
        SOURCE
    }

    fn tags(&self) -> &[&str] {
        &["javascript", "typescript", "js", "ts"]
    }

    fn description(&self) -> &str {
        "Line-scanning checks for JavaScript/TypeScript: semicolons, var usage, function style"
    }

    fn detect_errors(&self, _ctx: &ScanContext) -> Vec<Problem> {
        // No error-class heuristics for JavaScript; the browser console
        // surfaces hard syntax failures already.
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
        JavaScriptDetector.detect_warnings(&ScanContext::new(source, None))
    }

    fn suggestions(source: &str) -> Vec<Problem> {
        JavaScriptDetector.detect_suggestions(&ScanContext::new(source, None))
    }

    #[test]
    fn test_missing_semicolon() {
        let found = warnings("const x = 5\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "JS_SEMICOLON");
        assert_eq!(found[0].severity, Severity::Minor);
    }

    #[test]
    fn test_terminated_statement_not_flagged() {
        assert!(warnings("const x = 5;\n").is_empty());
        assert!(warnings("function add() {\n").is_empty());
        assert!(warnings("}\n").is_empty());
    }

    #[test]
    fn test_control_flow_lines_exempt() {
        assert!(warnings("return x map(v => v)\n").is_empty());
        assert!(warnings("for (const v of list) doIt(v)\n").is_empty());
    }

    #[test]
    fn test_var_flagged_without_semicolon_noise() {
        let found = suggestions("var x = 5;\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "JS_VAR");
        assert_eq!(found[0].position.line, 1);
        // already terminated, so no semicolon warning alongside
        assert!(warnings("var x = 5;\n").is_empty());
    }

    #[test]
    fn test_console_log_reminder_always_fires() {
        let found = suggestions("console.log(score)\n");
        assert!(found.iter().any(|p| p.code == "JS_CONSOLE_CHECK"));
        // Expression arguments don't match the identifier pattern
        let found = suggestions("console.log(score + 1)\n");
        assert!(found.iter().all(|p| p.code != "JS_CONSOLE_CHECK"));
    }

    #[test]
    fn test_anonymous_function_vs_named() {
        let found = suggestions("list.forEach(function(item) {\n");
        assert!(found.iter().any(|p| p.code == "JS_ANON_FUNCTION"));
        let found = suggestions("function greet(name) {\n");
        assert!(found.iter().all(|p| p.code != "JS_ANON_FUNCTION"));
    }

    #[test]
    fn test_errors_pass_is_empty() {
        let ctx = ScanContext::new("anything at all", None);
        assert!(JavaScriptDetector.detect_errors(&ctx).is_empty());
    }
}
