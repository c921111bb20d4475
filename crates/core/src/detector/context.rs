use std::path::Path;

/// Read-only view of one source buffer handed to detectors.
///
/// Lines are split once up front; all state is local to the scan, so contexts
/// are safe to use from any number of threads at once.
pub struct ScanContext<'a> {
    source: &'a str,
    lines: Vec<&'a str>,
    file: Option<&'a Path>,
}

impl<'a> ScanContext<'a> {
    pub fn new(source: &'a str, file: Option<&'a Path>) -> Self {
        Self {
            source,
            lines: source.lines().collect(),
            file,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn file(&self) -> Option<&'a Path> {
        self.file
    }

    /// All lines, in order. Line numbers are index + 1.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Get one line by 1-based number.
    pub fn line(&self, line_no: usize) -> Option<&'a str> {
        self.lines.get(line_no.saturating_sub(1)).copied()
    }

    /// Lines strictly before the given 1-based line number. Used by lookback
    /// rules such as the Python possible-undefined-name check.
    pub fn lines_before(&self, line_no: usize) -> &[&'a str] {
        let end = line_no.saturating_sub(1).min(self.lines.len());
        &self.lines[..end]
    }

    /// Extract a snippet (1-based inclusive line range).
    pub fn snippet(&self, start_line: usize, end_line: usize) -> Option<String> {
        let start = start_line.saturating_sub(1);
        let end = end_line.min(self.lines.len());
        if start >= self.lines.len() {
            return None;
        }
        Some(self.lines[start..end].join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_access_is_one_based() {
        let ctx = ScanContext::new("first\nsecond\nthird", None);
        assert_eq!(ctx.line(1), Some("first"));
        assert_eq!(ctx.line(3), Some("third"));
        assert_eq!(ctx.line(4), None);
        assert_eq!(ctx.line(0), Some("first")); // clamped, never panics
    }

    #[test]
    fn test_lines_before_is_strict() {
        let ctx = ScanContext::new("a\nb\nc", None);
        assert_eq!(ctx.lines_before(1), &[] as &[&str]);
        assert_eq!(ctx.lines_before(3), &["a", "b"]);
        assert_eq!(ctx.lines_before(99), &["a", "b", "c"]);
    }

    #[test]
    fn test_snippet_range() {
        let ctx = ScanContext::new("a\nb\nc\nd", None);
        assert_eq!(ctx.snippet(2, 3), Some("b\nc".to_string()));
        assert_eq!(ctx.snippet(10, 12), None);
    }

    #[test]
    fn test_empty_source() {
        let ctx = ScanContext::new("", None);
        assert!(ctx.lines().is_empty());
        assert_eq!(ctx.line(1), None);
    }
}
