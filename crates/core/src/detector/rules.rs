use super::context::ScanContext;
use crate::problem::Problem;

/// One heuristic check over a single line. Pure: the same (line, line_no,
/// context) always yields the same problems, modulo the timestamp in ids.
pub type Rule = fn(line: &str, line_no: usize, ctx: &ScanContext) -> Vec<Problem>;

/// Run an ordered rule list over every line, top to bottom, so the combined
/// output is line-ascending. Rules are independent: one rule finding nothing
/// (or bailing out on a line it cannot evaluate) never affects the others.
pub fn run_rules(rules: &[Rule], ctx: &ScanContext) -> Vec<Problem> {
    let mut problems = Vec::new();
    for (idx, line) in ctx.lines().iter().copied().enumerate() {
        let line_no = idx + 1;
        for rule in rules {
            problems.extend(rule(line, line_no, ctx));
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{problem_id, Category, Position, ProblemType, Severity};

    fn flag_foo(line: &str, line_no: usize, _ctx: &ScanContext) -> Vec<Problem> {
        if !line.contains("foo") {
            return Vec::new();
        }
        vec![Problem {
            id: problem_id("TEST", line_no, 1, line),
            problem_type: ProblemType::Warning,
            severity: Severity::Minor,
            category: Category::Style,
            code: "TEST".to_string(),
            message: "found foo".to_string(),
            explanation: "test".to_string(),
            fix_suggestion: None,
            learn_more: None,
            position: Position::at(line_no, 1),
            source: "Test".to_string(),
            file: None,
            snippet: None,
        }]
    }

    #[test]
    fn test_output_is_line_ascending() {
        let ctx = ScanContext::new("foo\nbar\nfoo baz\nfoo", None);
        let problems = run_rules(&[flag_foo], &ctx);
        let lines: Vec<usize> = problems.iter().map(|p| p.position.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        let ctx = ScanContext::new("", None);
        assert!(run_rules(&[flag_foo], &ctx).is_empty());
    }
}
