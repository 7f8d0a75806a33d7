use similar::TextDiff;

/// Number of unchanged lines shown around each hunk
const CONTEXT_RADIUS: usize = 3;

/// Compute a line-based unified diff between the original and fixed text.
///
/// The two sides are labeled "Original" and "Fixed". Returns `None` when the
/// texts are identical or the fixed text trims to empty, in which case the
/// caller treats the run as a no-op.
pub fn unified_diff(original: &str, fixed: &str) -> Option<String> {
    if fixed.trim().is_empty() || original == fixed {
        return None;
    }

    let text = TextDiff::from_lines(original, fixed)
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header("Original", "Fixed")
        .to_string();

    if text.is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_diff_labels_both_sides() {
        let diff = unified_diff("<?php\necho 1 ;\n", "<?php\necho 1;\n").unwrap();
        assert!(diff.starts_with("--- Original"));
        assert!(diff.contains("+++ Fixed"));
    }

    #[test]
    fn test_diff_shows_changed_lines() {
        let diff = unified_diff("a\nb\nc\n", "a\nB\nc\n").unwrap();
        assert!(diff.contains("-b"));
        assert!(diff.contains("+B"));
        // Context lines around the change survive
        assert!(diff.contains(" a"));
        assert!(diff.contains(" c"));
    }

    #[test]
    fn test_identical_text_has_no_diff() {
        assert!(unified_diff("<?php\necho 1;\n", "<?php\necho 1;\n").is_none());
    }

    #[test]
    fn test_whitespace_only_fixed_text_has_no_diff() {
        assert!(unified_diff("<?php\n", "  \n\t\n").is_none());
        assert!(unified_diff("<?php\n", "").is_none());
    }

    proptest! {
        #[test]
        fn prop_diff_of_text_with_itself_is_absent(text in ".*") {
            prop_assert!(unified_diff(&text, &text).is_none());
        }
    }
}
