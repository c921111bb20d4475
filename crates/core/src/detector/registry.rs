use super::context::ScanContext;
use super::traits::ProblemDetector;
use crate::problem::{Problem, Severity};

/// Registry that maps language tags to detector instances.
pub struct DetectorRegistry {
    detectors: Vec<Box<dyn ProblemDetector>>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// Register a detector
    pub fn register(&mut self, detector: Box<dyn ProblemDetector>) {
        self.detectors.push(detector);
    }

    /// Register multiple detectors at once
    pub fn register_all(&mut self, detectors: Vec<Box<dyn ProblemDetector>>) {
        self.detectors.extend(detectors);
    }

    /// Look up the detector serving a language tag, case-insensitively.
    /// `None` means "no detection available", not a failure.
    pub fn for_language(&self, tag: &str) -> Option<&dyn ProblemDetector> {
        let tag = tag.to_lowercase();
        self.detectors
            .iter()
            .find(|d| d.tags().iter().any(|t| *t == tag))
            .map(|d| d.as_ref())
    }

    /// Run the matching detector's three passes on a buffer, sorted by
    /// severity then line. `None` when no detector serves the tag.
    pub fn run_for_language(&self, tag: &str, ctx: &ScanContext) -> Option<Vec<Problem>> {
        let detector = self.for_language(tag)?;
        let mut problems = detector.detect_all(ctx);
        problems.sort_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then(a.position.line.cmp(&b.position.line))
        });
        Some(problems)
    }

    /// List all registered detector languages
    pub fn list(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.language()).collect()
    }

    pub fn detectors(&self) -> &[Box<dyn ProblemDetector>] {
        &self.detectors
    }

    /// Filter problems by minimum severity
    pub fn filter_by_severity(problems: Vec<Problem>, min: Severity) -> Vec<Problem> {
        problems
            .into_iter()
            .filter(|p| p.severity <= min)
            .collect()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{problem_id, Category, Position, ProblemType};

    struct MockDetector;

    impl ProblemDetector for MockDetector {
        fn language(&self) -> &str {
            "Mock"
        }
        fn tags(&self) -> &[&str] {
            &["mock", "mk"]
        }
        fn description(&self) -> &str {
            "A mock detector for testing"
        }
        fn detect_errors(&self, _ctx: &ScanContext) -> Vec<Problem> {
            vec![Problem {
                id: problem_id("MOCK", 1, 1, ""),
                problem_type: ProblemType::Error,
                severity: Severity::Critical,
                category: Category::Syntax,
                code: "MOCK".to_string(),
                message: "mock finding".to_string(),
                explanation: "test".to_string(),
                fix_suggestion: None,
                learn_more: None,
                position: Position::at(1, 1),
                source: "Mock".to_string(),
                file: None,
                snippet: None,
            }]
        }
        fn detect_warnings(&self, _ctx: &ScanContext) -> Vec<Problem> {
            Vec::new()
        }
        fn detect_suggestions(&self, _ctx: &ScanContext) -> Vec<Problem> {
            Vec::new()
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut registry = DetectorRegistry::new();
        registry.register(Box::new(MockDetector));

        assert!(registry.for_language("mock").is_some());
        assert!(registry.for_language("MOCK").is_some());
        assert!(registry.for_language("mk").is_some());
    }

    #[test]
    fn test_unknown_tag_is_none_not_error() {
        let mut registry = DetectorRegistry::new();
        registry.register(Box::new(MockDetector));
        assert!(registry.for_language("cobol").is_none());
    }

    #[test]
    fn test_run_for_language() {
        let mut registry = DetectorRegistry::new();
        registry.register(Box::new(MockDetector));

        let ctx = ScanContext::new("anything", None);
        let problems = registry.run_for_language("mock", &ctx).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].code, "MOCK");

        assert!(registry.run_for_language("cobol", &ctx).is_none());
    }

    #[test]
    fn test_filter_by_severity() {
        let mut registry = DetectorRegistry::new();
        registry.register(Box::new(MockDetector));
        let ctx = ScanContext::new("x", None);
        let problems = registry.run_for_language("mock", &ctx).unwrap();

        let kept = DetectorRegistry::filter_by_severity(problems.clone(), Severity::Critical);
        assert_eq!(kept.len(), 1);
        let kept = DetectorRegistry::filter_by_severity(problems, Severity::Info);
        assert_eq!(kept.len(), 1);
    }
}
