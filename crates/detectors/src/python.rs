use once_cell::sync::Lazy;
use regex::Regex;

use tutorlint::detector::{run_rules, ProblemDetector, Rule, ScanContext};
use tutorlint::problem::{Category, Problem, ProblemType, Severity};

use crate::support::{emit, Kind};

/// Heuristic line-scanning detector for student Python code.
///
/// Every rule is a per-line pattern check, not a parse. The documented false
/// positives (multi-line calls, names defined later, `while True:` loops with
/// a break) are part of the contract: robustness over precision.
pub struct PythonDetector;

const SOURCE: &str = "Python";

/// Block statements that need a trailing colon.
const BLOCK_KEYWORDS: &[&str] = &[
    "if ", "for ", "while ", "def ", "class ", "elif ", "else", "except", "finally", "with ",
    "try",
];

/// Builtins and keywords the undefined-name rule never questions.
const KNOWN_NAMES: &[&str] = &[
    // builtins commonly used in lessons
    "print", "len", "range", "str", "int", "float", "list", "dict", "set", "tuple", "bool",
    "input", "open", "type", "sum", "min", "max", "abs", "round", "sorted", "reversed",
    "enumerate", "zip", "map", "filter", "isinstance", "super", "object", "Exception",
    "ValueError", "TypeError", "KeyError", "IndexError",
    // keywords and constants
    "True", "False", "None", "and", "or", "not", "in", "is", "if", "else", "elif", "for",
    "while", "def", "return", "class", "import", "from", "as", "try", "except", "finally",
    "with", "pass", "break", "continue", "lambda", "yield", "global", "nonlocal", "assert",
    "del", "raise", "self",
];

const UNCLOSED_PAREN: Kind = Kind {
    code: "SyntaxError",
    problem_type: ProblemType::Error,
    severity: Severity::Critical,
    category: Category::Syntax,
};

const MISSING_COLON: Kind = Kind {
    code: "SyntaxError",
    problem_type: ProblemType::Error,
    severity: Severity::Critical,
    category: Category::Syntax,
};

const MIXED_INDENT: Kind = Kind {
    code: "IndentationError",
    problem_type: ProblemType::Error,
    severity: Severity::Critical,
    category: Category::Syntax,
};

const UNDEFINED_NAME: Kind = Kind {
    code: "NameError",
    problem_type: ProblemType::Warning,
    severity: Severity::Major,
    category: Category::Logic,
};

const INFINITE_LOOP: Kind = Kind {
    code: "InfiniteLoop",
    problem_type: ProblemType::Warning,
    severity: Severity::Major,
    category: Category::Logic,
};

const LINE_TOO_LONG: Kind = Kind {
    code: "E501",
    problem_type: ProblemType::Warning,
    severity: Severity::Minor,
    category: Category::Style,
};

const BARE_EXCEPT: Kind = Kind {
    code: "E722",
    problem_type: ProblemType::Warning,
    severity: Severity::Minor,
    category: Category::Style,
};

const OPERATOR_SPACING: Kind = Kind {
    code: "E225",
    problem_type: ProblemType::Suggestion,
    severity: Severity::Minor,
    category: Category::Style,
};

const LOOP_CONCAT: Kind = Kind {
    code: "PERF001",
    problem_type: ProblemType::Suggestion,
    severity: Severity::Minor,
    category: Category::Performance,
};

const TODO_NOTE: Kind = Kind {
    code: "TODO",
    problem_type: ProblemType::Info,
    severity: Severity::Info,
    category: Category::Style,
};

const ERROR_RULES: &[Rule] = &[unclosed_paren, missing_colon, mixed_indentation];
const WARNING_RULES: &[Rule] = &[
    possible_undefined_name,
    infinite_loop,
    line_too_long,
    bare_except,
];
const SUGGESTION_RULES: &[Rule] = &[operator_spacing, loop_string_concat, todo_note];

/// A `(` with no `)` on the same line, unless the line continues with `\`.
/// Per-line heuristic: intentional multi-line calls without a backslash will
/// false-positive.
fn unclosed_paren(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let Some(pos) = line.find('(') else {
        return Vec::new();
    };
    if line.contains(')') || line.trim_end().ends_with('\\') {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &UNCLOSED_PAREN,
        SOURCE,
        line_no,
        pos + 1,
        "Missing closing parenthesis".to_string(),
        None,
        Some("Add a ')' to close the parenthesis opened on this line."),
    )]
}

/// Block keyword with no colon anywhere on the line. Bare `else` and bare
/// `finally` are exempt.
fn missing_colon(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    if line.contains(':') {
        return Vec::new();
    }
    let trimmed = line.trim();
    for keyword in BLOCK_KEYWORDS {
        if !trimmed.starts_with(keyword) {
            continue;
        }
        if trimmed == "else" || trimmed == "finally" {
            return Vec::new();
        }
        let word = keyword.trim_end();
        return vec![emit(
            ctx,
            &MISSING_COLON,
            SOURCE,
            line_no,
            line.len().max(1),
            format!("Missing colon after '{word}' statement"),
            None,
            Some("Add a ':' at the end of the line."),
        )];
    }
    Vec::new()
}

/// Leading tab combined with a 4-space run on the same line.
fn mixed_indentation(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    if !line.starts_with('\t') || !line.contains("    ") {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &MIXED_INDENT,
        SOURCE,
        line_no,
        1,
        "Mixed tabs and spaces in indentation".to_string(),
        None,
        None,
    )]
}

static IDENT_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").ok());

/// Flags identifiers with no visible definition on a prior line. No scope
/// resolution: assignment, `def`, and `for` targets on earlier lines count as
/// definitions, nothing else does.
fn possible_undefined_name(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    if line.trim_start().starts_with('#') {
        return Vec::new();
    }
    let Some(re) = IDENT_RE.as_ref() else {
        return Vec::new();
    };

    let mut problems = Vec::new();
    for m in re.find_iter(line) {
        let word = m.as_str();
        if KNOWN_NAMES.contains(&word) {
            continue;
        }
        // Assigned or defined on this very line
        if line.contains(&format!("{word} =")) || line.contains(&format!("def {word}")) {
            continue;
        }
        let defined_before = ctx.lines_before(line_no).iter().any(|prior| {
            prior.contains(&format!("{word} ="))
                || prior.contains(&format!("def {word}"))
                || prior.contains(&format!("for {word}"))
        });
        if defined_before {
            continue;
        }
        problems.push(emit(
            ctx,
            &UNDEFINED_NAME,
            SOURCE,
            line_no,
            m.start() + 1,
            format!("'{word}' may be used before it is defined"),
            None,
            None,
        ));
    }
    problems
}

/// Exactly `while True:`. No break analysis is attempted.
fn infinite_loop(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    if line.trim() != "while True:" {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &INFINITE_LOOP,
        SOURCE,
        line_no,
        line.find('w').map_or(1, |p| p + 1),
        "'while True:' may loop forever".to_string(),
        None,
        None,
    )]
}

fn line_too_long(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let len = line.chars().count();
    if len <= 79 {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &LINE_TOO_LONG,
        SOURCE,
        line_no,
        80,
        format!("Line too long ({len} > 79 characters)"),
        None,
        None,
    )]
}

fn bare_except(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    if line.trim() != "except:" {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &BARE_EXCEPT,
        SOURCE,
        line_no,
        line.find('e').map_or(1, |p| p + 1),
        "Bare 'except:' catches every exception".to_string(),
        None,
        None,
    )]
}

static OPERATOR_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\w([+\-*/=<>])\w").ok());

/// Missing whitespace around a binary operator. Only the first match per line
/// is reported.
fn operator_spacing(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let Some(re) = OPERATOR_RE.as_ref() else {
        return Vec::new();
    };
    let Some(caps) = re.captures(line) else {
        return Vec::new();
    };
    let Some(op) = caps.get(1) else {
        return Vec::new();
    };
    vec![emit(
        ctx,
        &OPERATOR_SPACING,
        SOURCE,
        line_no,
        op.start() + 1,
        format!("Missing spaces around '{}'", op.as_str()),
        None,
        None,
    )]
}

/// `for ` plus ` + ` on one line, whatever the operands actually are.
fn loop_string_concat(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    if !line.contains("for ") || !line.contains(" + ") {
        return Vec::new();
    }
    vec![emit(
        ctx,
        &LOOP_CONCAT,
        SOURCE,
        line_no,
        line.find(" + ").map_or(1, |p| p + 2),
        "String concatenation inside a loop; consider join()".to_string(),
        None,
        None,
    )]
}

fn todo_note(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem> {
    let mut problems = Vec::new();
    for keyword in ["TODO", "FIXME"] {
        if let Some(pos) = line.find(keyword) {
            problems.push(emit(
                ctx,
                &TODO_NOTE,
                SOURCE,
                line_no,
                pos + 1,
                format!("{keyword} note left in code"),
                Some("There's an unfinished note here. It's a reminder from you (or a teammate) about work that still needs doing."),
                Some("Finish the noted work, or remove the note if it's done."),
            ));
        }
    }
    problems
}

impl ProblemDetector for PythonDetector {
    fn language(&self) -> &str {
        SOURCE
    }

    fn tags(&self) -> &[&str] {
        &["python", "py"]
    }

    fn description(&self) -> &str {
        "Line-scanning checks for Python: syntax slips, likely undefined names, style and performance hints"
    }

    fn detect_errors(&self, ctx: &ScanContext) -> Vec<Problem> {
        run_rules(ERROR_RULES, ctx)
    }

    fn detect_warnings(&self, ctx: &ScanContext) -> Vec<Problem> {
        run_rules(WARNING_RULES, ctx)
    }

    fn detect_suggestions(&self, ctx: &ScanContext) -> Vec<Problem> {
        run_rules(SUGGESTION_RULES, ctx)
    }
}
