use super::context::ScanContext;
use crate::problem::Problem;

/// Core trait for all language detectors.
///
/// Each method is a pure function of the scan context: no I/O, no shared
/// mutable state, and no panics for any input text, including empty or
/// binary-garbage buffers. A rule that cannot evaluate a line contributes
/// nothing rather than failing the scan. Within one call, problems come back
/// in line-ascending order.
pub trait ProblemDetector: Send + Sync {
    /// Human-readable language label stamped on findings (e.g. "Python").
    fn language(&self) -> &str;

    /// Lowercase language identifiers this detector serves (e.g. ["python", "py"]).
    fn tags(&self) -> &[&str];

    /// Human-readable description of what this detector checks.
    fn description(&self) -> &str;

    /// Findings a learner must fix before the code can run.
    fn detect_errors(&self, ctx: &ScanContext) -> Vec<Problem>;

    /// Likely bugs and risky patterns that still run.
    fn detect_warnings(&self, ctx: &ScanContext) -> Vec<Problem>;

    /// Style and improvement hints.
    fn detect_suggestions(&self, ctx: &ScanContext) -> Vec<Problem>;

    /// All three passes, concatenated errors -> warnings -> suggestions.
    fn detect_all(&self, ctx: &ScanContext) -> Vec<Problem> {
        let mut problems = self.detect_errors(ctx);
        problems.extend(self.detect_warnings(ctx));
        problems.extend(self.detect_suggestions(ctx));
        problems
    }
}
