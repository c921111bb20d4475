//! Static registry of learner-facing content keyed by problem code.
//!
//! Populated once at startup, never mutated afterwards. Every registered code
//! carries all three explanation tiers; lookups degrade gracefully from the
//! requested tier to the entry's generic explanation to a universal fallback.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Returned when a code is unknown or an entry has no usable explanation.
pub const FALLBACK_EXPLANATION: &str = "This is a problem that needs attention.";

/// Proficiency tier selecting which explanation variant a learner sees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExplanationLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// Static pedagogical content for one problem code.
#[derive(Debug, Clone)]
pub struct EducationalEntry {
    pub beginner: &'static str,
    pub intermediate: &'static str,
    pub advanced: &'static str,
    /// Per-entry fallback when a tier is empty.
    pub generic: &'static str,
    pub fix_suggestion: &'static str,
    pub learn_more: &'static str,
    pub common_mistake: bool,
    pub related_concepts: &'static [&'static str],
    pub practice_exercises: &'static [&'static str],
}

static REGISTRY: Lazy<HashMap<&'static str, EducationalEntry>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(
        "SyntaxError",
        EducationalEntry {
            beginner: "Python couldn't understand this line. Something is missing or out of place, like a colon or a closing parenthesis.",
            intermediate: "A syntax error means the line breaks Python's grammar rules, so the interpreter stops before running anything. Check for unmatched brackets and missing colons after statements like if, for, and def.",
            advanced: "The tokenizer or parser rejected this line. Common causes are unbalanced delimiters and block statements without a trailing colon; the reported column points at where parsing gave up.",
            generic: "The structure of this line doesn't follow the language's rules.",
            fix_suggestion: "Check for missing colons, unmatched parentheses, and typos in keywords.",
            learn_more: "https://docs.python.org/3/tutorial/errors.html#syntax-errors",
            common_mistake: true,
            related_concepts: &["statements", "blocks", "parentheses"],
            practice_exercises: &["fix-the-colon", "bracket-matching"],
        },
    );

    map.insert(
        "IndentationError",
        EducationalEntry {
            beginner: "This line mixes tabs and spaces. Python uses the spaces at the start of a line to know which block it belongs to, so mixing them confuses it.",
            intermediate: "Python treats indentation as structure. Mixing tab characters with runs of spaces produces inconsistent indent widths and raises IndentationError or TabError at runtime.",
            advanced: "The lexer computes indent levels from leading whitespace; a tab followed by spaces yields an ambiguous column that PEP 8 forbids. Configure your editor to insert 4 spaces per tab.",
            generic: "The leading whitespace on this line is inconsistent.",
            fix_suggestion: "Use 4 spaces for every indentation level. Never mix tabs and spaces.",
            learn_more: "https://peps.python.org/pep-0008/#tabs-or-spaces",
            common_mistake: true,
            related_concepts: &["indentation", "blocks", "whitespace"],
            practice_exercises: &["indent-repair"],
        },
    );

    map.insert(
        "NameError",
        EducationalEntry {
            beginner: "You're using a name that hasn't been given a value yet. Make sure you spell it the same way everywhere, and assign it before you use it.",
            intermediate: "A NameError happens when a variable is read before any assignment in the current scope. Check the order of your statements and watch for typos between the definition and the use.",
            advanced: "Name resolution follows the LEGB rule (local, enclosing, global, builtin). A name missing from all four scopes at lookup time raises NameError; assignments later in the function do not help earlier reads.",
            generic: "This name may not be defined before it is used.",
            fix_suggestion: "Assign the variable before using it, or fix the spelling to match an existing name.",
            learn_more: "https://docs.python.org/3/library/exceptions.html#NameError",
            common_mistake: true,
            related_concepts: &["variables", "assignment", "scope"],
            practice_exercises: &["define-before-use", "spot-the-typo"],
        },
    );

    map.insert(
        "InfiniteLoop",
        EducationalEntry {
            beginner: "A `while True:` loop runs forever unless something inside it stops it. Make sure there's a break, or a condition that eventually becomes false.",
            intermediate: "`while True:` is fine when the loop body has a guaranteed exit (a break or return), but it's easy to forget one. Prefer a real condition when you can express one.",
            advanced: "Intentional `while True:` event loops are idiomatic, but every path through the body should reach a break, return, or raise. Consider a bounded loop or an explicit sentinel condition otherwise.",
            generic: "This loop has no visible exit condition.",
            fix_suggestion: "Add a break statement, or rewrite the loop with a condition that becomes false.",
            learn_more: "",
            common_mistake: true,
            related_concepts: &["loops", "break", "conditions"],
            practice_exercises: &["escape-the-loop"],
        },
    );

    map.insert(
        "E501",
        EducationalEntry {
            beginner: "This line is very long, which makes it hard to read. Try breaking it into shorter lines.",
            intermediate: "PEP 8 limits lines to 79 characters so code stays readable side-by-side. Split long expressions across lines inside parentheses, or pull parts into named variables.",
            advanced: "The 79-character limit comes from PEP 8; long lines usually signal an expression doing too much. Use implicit continuation inside brackets rather than backslashes.",
            generic: "This line is longer than the recommended limit.",
            fix_suggestion: "Break the line at a natural point, such as after a comma or operator.",
            learn_more: "https://peps.python.org/pep-0008/#maximum-line-length",
            common_mistake: false,
            related_concepts: &["style", "readability"],
            practice_exercises: &["line-splitting"],
        },
    );

    map.insert(
        "E225",
        EducationalEntry {
            beginner: "Put a space on both sides of symbols like = and +. `x = 5` is easier to read than `x=5`.",
            intermediate: "PEP 8 asks for single spaces around binary operators. Consistent spacing makes the structure of an expression visible at a glance.",
            advanced: "Missing whitespace around an operator (pycodestyle E225). Formatters like black normalize this automatically; enable one in your editor.",
            generic: "An operator on this line is missing surrounding spaces.",
            fix_suggestion: "Add a single space before and after the operator.",
            learn_more: "https://peps.python.org/pep-0008/#other-recommendations",
            common_mistake: false,
            related_concepts: &["style", "operators"],
            practice_exercises: &["spacing-drill"],
        },
    );

    map.insert(
        "E722",
        EducationalEntry {
            beginner: "A bare `except:` catches every error, even ones you didn't expect, which hides bugs. Say which error you want to catch.",
            intermediate: "`except:` swallows SystemExit and KeyboardInterrupt too. Catch the specific exception type you can actually handle, like `except ValueError:`.",
            advanced: "Bare except clauses (pycodestyle E722) intercept BaseException. At minimum use `except Exception:`, and prefer the narrowest type; re-raise what you cannot handle.",
            generic: "This except clause catches every possible error.",
            fix_suggestion: "Name the exception type: `except ValueError:` instead of `except:`.",
            learn_more: "https://docs.python.org/3/tutorial/errors.html#handling-exceptions",
            common_mistake: true,
            related_concepts: &["exceptions", "error-handling"],
            practice_exercises: &["catch-specific"],
        },
    );

    map.insert(
        "PERF001",
        EducationalEntry {
            beginner: "Adding strings together inside a loop is slow. Collect the pieces in a list and use join() at the end instead.",
            intermediate: "Each string concatenation builds a brand-new string, so a loop of `+` does quadratic work. Accumulate parts in a list and call `''.join(parts)` once.",
            advanced: "Repeated `str.__add__` in a loop is O(n^2) in total copied bytes. `str.join` preallocates from the summed lengths and copies once; use it for any loop-built string.",
            generic: "String concatenation inside a loop can be slow.",
            fix_suggestion: "Append pieces to a list and join them once after the loop.",
            learn_more: "",
            common_mistake: false,
            related_concepts: &["strings", "loops", "performance"],
            practice_exercises: &["join-refactor"],
        },
    );

    map.insert(
        "JS_SEMICOLON",
        EducationalEntry {
            beginner: "This statement is missing a semicolon at the end. JavaScript often forgives this, but adding it keeps your code predictable.",
            intermediate: "Automatic semicolon insertion can join lines in surprising ways, especially before lines starting with ( or [. Ending statements explicitly avoids those traps.",
            advanced: "ASI hazards: a return followed by a newline returns undefined, and leading-paren lines get glued to the previous expression. Explicit semicolons (or a formatter) sidestep the grammar's restricted productions.",
            generic: "This statement does not end with a semicolon.",
            fix_suggestion: "Add a semicolon at the end of the statement.",
            learn_more: "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Lexical_grammar#automatic_semicolon_insertion",
            common_mistake: true,
            related_concepts: &["statements", "semicolons"],
            practice_exercises: &["semicolon-sweep"],
        },
    );

    map.insert(
        "JS_VAR",
        EducationalEntry {
            beginner: "`var` is the old way to make a variable. Use `let` if the value changes, or `const` if it doesn't.",
            intermediate: "`var` is function-scoped and hoisted, so it can be read before its declaration. `let` and `const` are block-scoped and fail fast instead.",
            advanced: "`var` hoists to function scope with undefined initialization and allows redeclaration; `let`/`const` create a temporal dead zone and block scoping. Prefer `const` by default.",
            generic: "This declaration uses the legacy `var` keyword.",
            fix_suggestion: "Replace `var` with `const`, or `let` if the variable is reassigned.",
            learn_more: "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements/let",
            common_mistake: true,
            related_concepts: &["variables", "scope", "hoisting"],
            practice_exercises: &["var-to-const"],
        },
    );

    map.insert(
        "REACT_KEY_PROP",
        EducationalEntry {
            beginner: "When you make a list of elements with .map(), each one needs a special `key` prop so React can tell them apart.",
            intermediate: "React uses keys to match list items between renders. Without them React falls back to array indices, which breaks reordering and can lose component state.",
            advanced: "Keys drive the reconciler's diffing of children. Use a stable identity from your data, never the map index, or insertions and removals will remount siblings and discard their state.",
            generic: "A list rendered with .map() is missing key props.",
            fix_suggestion: "Add key={item.id} (or another stable value) to the element returned from .map().",
            learn_more: "https://react.dev/learn/rendering-lists#keeping-list-items-in-order-with-key",
            common_mistake: true,
            related_concepts: &["lists", "keys", "reconciliation"],
            practice_exercises: &["key-the-list"],
        },
    );

    map.insert(
        "REACT_CAMELCASE",
        EducationalEntry {
            beginner: "Inline styles in React use camelCase names: write backgroundColor, not background-color.",
            intermediate: "The style prop takes a JavaScript object, and object keys can't contain hyphens without quoting. React expects the camelCase form of every CSS property.",
            advanced: "React maps camelCase style keys onto CSSStyleDeclaration properties; hyphenated keys are silently ignored rather than applied. Vendor prefixes capitalize the first letter (WebkitTransition).",
            generic: "An inline style uses a hyphenated CSS property name.",
            fix_suggestion: "Convert the property to camelCase, e.g. font-size becomes fontSize.",
            learn_more: "https://react.dev/reference/react-dom/components/common#applying-css-styles",
            common_mistake: true,
            related_concepts: &["inline-styles", "jsx"],
            practice_exercises: &["camelcase-styles"],
        },
    );

    map
});

/// Look up the registry entry for a code. `None` for unregistered codes.
pub fn entry_for(code: &str) -> Option<&'static EducationalEntry> {
    REGISTRY.get(code)
}

/// Resolve the explanation for a code at the requested tier.
///
/// Degradation order is fixed: requested tier, then the entry's generic
/// explanation, then [`FALLBACK_EXPLANATION`]. Never fails, never returns
/// an empty string.
pub fn explanation_for(code: &str, level: ExplanationLevel) -> &'static str {
    let Some(entry) = REGISTRY.get(code) else {
        return FALLBACK_EXPLANATION;
    };
    let tier = match level {
        ExplanationLevel::Beginner => entry.beginner,
        ExplanationLevel::Intermediate => entry.intermediate,
        ExplanationLevel::Advanced => entry.advanced,
    };
    if !tier.is_empty() {
        return tier;
    }
    if !entry.generic.is_empty() {
        return entry.generic;
    }
    FALLBACK_EXPLANATION
}

/// Fix suggestion for a code, when the registry has one.
pub fn fix_for(code: &str) -> Option<&'static str> {
    REGISTRY
        .get(code)
        .map(|e| e.fix_suggestion)
        .filter(|s| !s.is_empty())
}

/// Learn-more URL for a code, when the registry has one.
pub fn learn_more_for(code: &str) -> Option<&'static str> {
    REGISTRY
        .get(code)
        .map(|e| e.learn_more)
        .filter(|s| !s.is_empty())
}

/// All registered codes, for listing and validation.
pub fn registered_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = REGISTRY.keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_returns_registered_beginner_text() {
        let text = explanation_for("NameError", ExplanationLevel::Beginner);
        assert_eq!(
            text,
            "You're using a name that hasn't been given a value yet. Make sure you spell it the same way everywhere, and assign it before you use it."
        );
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let text = explanation_for("NoSuchCode", ExplanationLevel::Beginner);
        assert_eq!(text, FALLBACK_EXPLANATION);
    }

    #[test]
    fn test_every_entry_has_all_tiers_or_generic() {
        for code in registered_codes() {
            for level in [
                ExplanationLevel::Beginner,
                ExplanationLevel::Intermediate,
                ExplanationLevel::Advanced,
            ] {
                let text = explanation_for(code, level);
                assert!(!text.is_empty(), "empty explanation for {code}");
            }
        }
    }

    #[test]
    fn test_empty_learn_more_is_none() {
        assert!(learn_more_for("InfiniteLoop").is_none());
        assert!(learn_more_for("E501").is_some());
    }
}
