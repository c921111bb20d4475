use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// How many snippet characters to fold into the id.
const SNIPPET_PREFIX_LEN: usize = 12;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Build an opaque id for a finding: human-traceable to its location, unique in
/// practice across repeated scans of the same file.
///
/// The snippet prefix is reduced to alphanumerics so the `|` delimiter cannot
/// appear inside any component. A nanosecond timestamp plus a process-local
/// sequence number keeps two identical findings from different passes distinct.
/// Never panics, even for malformed inputs.
pub fn problem_id(kind: &str, line: usize, column: usize, snippet: &str) -> String {
    let prefix: String = snippet
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(SNIPPET_PREFIX_LEN)
        .collect();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{kind}|{line}|{column}|{prefix}|{nanos}-{seq}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_contains_location() {
        let id = problem_id("E501", 12, 80, "some long line of code");
        assert!(id.starts_with("E501|12|80|"));
    }

    #[test]
    fn test_identical_findings_get_distinct_ids() {
        let a = problem_id("SyntaxError", 1, 4, "if x > 5");
        let b = problem_id("SyntaxError", 1, 4, "if x > 5");
        assert_ne!(a, b);
    }

    #[test]
    fn test_snippet_is_sanitized_and_bounded() {
        let id = problem_id("E225", 3, 2, "a|b|c|d|e|f|g|h|i|j|k|l|m|n");
        // Pipes stripped from the snippet component; only the 4 delimiters remain.
        assert_eq!(id.matches('|').count(), 4);
    }

    #[test]
    fn test_never_panics_on_garbage() {
        let _ = problem_id("", 0, 0, "");
        let _ = problem_id("weird kind", usize::MAX, usize::MAX, "\u{0}\u{FFFF}");
    }
}
