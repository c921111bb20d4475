use std::path::Path;

use tutorlint::detector::ScanContext;
use tutorlint::education::{self, ExplanationLevel};
use tutorlint::problem::{problem_id, Category, Position, Problem, ProblemType, Severity};

/// Static classification for one rule's findings: the code plus the fixed
/// type/severity/category triple every problem from that rule carries.
pub(crate) struct Kind {
    pub code: &'static str,
    pub problem_type: ProblemType,
    pub severity: Severity,
    pub category: Category,
}

/// Build a problem for a rule hit.
///
/// The explanation comes from the registry's beginner tier when the code is
/// registered; rules for unregistered codes pass a literal instead. The fix
/// falls back to the registry the same way.
pub(crate) fn emit(
    ctx: &ScanContext,
    kind: &Kind,
    source_label: &str,
    line_no: usize,
    column: usize,
    message: String,
    literal_explanation: Option<&str>,
    literal_fix: Option<&str>,
) -> Problem {
    let snippet = ctx.line(line_no).unwrap_or("");
    let explanation = match literal_explanation {
        Some(text) => text.to_string(),
        None => education::explanation_for(kind.code, ExplanationLevel::Beginner).to_string(),
    };
    let fix_suggestion = literal_fix
        .map(str::to_string)
        .or_else(|| education::fix_for(kind.code).map(str::to_string));

    Problem {
        id: problem_id(kind.code, line_no, column, snippet),
        problem_type: kind.problem_type,
        severity: kind.severity,
        category: kind.category,
        code: kind.code.to_string(),
        message,
        explanation,
        fix_suggestion,
        learn_more: education::learn_more_for(kind.code).map(str::to_string),
        position: Position::at(line_no, column),
        source: source_label.to_string(),
        file: ctx.file().map(Path::to_path_buf),
        snippet: None,
    }
}
