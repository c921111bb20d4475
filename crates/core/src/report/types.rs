use std::path::PathBuf;

use serde::Serialize;

use crate::problem::{Category, Problem, ProblemType, Severity};

#[derive(Debug, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub info: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryCounts {
    pub syntax: usize,
    pub logic: usize,
    pub style: usize,
    pub performance: usize,
    pub security: usize,
    pub accessibility: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub files_analyzed: Vec<PathBuf>,
    pub total_problems: usize,
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
    pub problems_by_severity: SeverityCounts,
    pub problems_by_category: CategoryCounts,
    pub problems: Vec<Problem>,
}

impl AnalysisReport {
    pub fn from_problems(files: Vec<PathBuf>, problems: Vec<Problem>) -> Self {
        let count_sev = |s: Severity| problems.iter().filter(|p| p.severity == s).count();
        let count_cat = |c: Category| problems.iter().filter(|p| p.category == c).count();
        let count_type = |t: ProblemType| {
            problems.iter().filter(|p| p.problem_type == t).count()
        };

        let severity = SeverityCounts {
            critical: count_sev(Severity::Critical),
            major: count_sev(Severity::Major),
            minor: count_sev(Severity::Minor),
            info: count_sev(Severity::Info),
        };
        let category = CategoryCounts {
            syntax: count_cat(Category::Syntax),
            logic: count_cat(Category::Logic),
            style: count_cat(Category::Style),
            performance: count_cat(Category::Performance),
            security: count_cat(Category::Security),
            accessibility: count_cat(Category::Accessibility),
        };

        let total = problems.len();
        Self {
            files_analyzed: files,
            total_problems: total,
            errors: count_type(ProblemType::Error),
            warnings: count_type(ProblemType::Warning),
            suggestions: count_type(ProblemType::Suggestion),
            problems_by_severity: severity,
            problems_by_category: category,
            problems,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{problem_id, Position};

    fn problem(sev: Severity, cat: Category, ty: ProblemType) -> Problem {
        Problem {
            id: problem_id("T", 1, 1, ""),
            problem_type: ty,
            severity: sev,
            category: cat,
            code: "T".to_string(),
            message: "t".to_string(),
            explanation: "t".to_string(),
            fix_suggestion: None,
            learn_more: None,
            position: Position::at(1, 1),
            source: "Python".to_string(),
            file: None,
            snippet: None,
        }
    }

    #[test]
    fn test_counts() {
        let report = AnalysisReport::from_problems(
            vec![PathBuf::from("lesson.py")],
            vec![
                problem(Severity::Critical, Category::Syntax, ProblemType::Error),
                problem(Severity::Minor, Category::Style, ProblemType::Warning),
                problem(Severity::Minor, Category::Style, ProblemType::Suggestion),
            ],
        );
        assert_eq!(report.total_problems, 3);
        assert_eq!(report.errors, 1);
        assert_eq!(report.warnings, 1);
        assert_eq!(report.suggestions, 1);
        assert_eq!(report.problems_by_severity.critical, 1);
        assert_eq!(report.problems_by_severity.minor, 2);
        assert_eq!(report.problems_by_category.style, 2);
        assert_eq!(report.problems_by_category.syntax, 1);
    }
}
