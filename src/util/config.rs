//! Configuration file parsing utilities.
//!
//! Helpers shared by `settings.conf` parsing and the key-presence check that
//! appends missing defaults.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character, so values may themselves contain `=`
/// - Trims whitespace from both key and value; an empty key is rejected
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment styles and blank lines are skipped.
    fn skips_comments_and_blanks() {
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# note"));
        assert!(skip_comment_or_empty("// note"));
        assert!(skip_comment_or_empty("; note"));
        assert!(!skip_comment_or_empty("key = value"));
    }

    #[test]
    /// What: Only the first `=` splits the pair.
    ///
    /// Inputs:
    /// - `endpoint = https://x.test/?a=b`, `= orphan`, `no pair`
    ///
    /// Output:
    /// - Query string kept in the value; the other two rejected
    fn splits_on_first_equals() {
        assert_eq!(
            parse_key_value("endpoint = https://x.test/?a=b"),
            Some(("endpoint".to_string(), "https://x.test/?a=b".to_string()))
        );
        assert_eq!(parse_key_value("= orphan"), None);
        assert_eq!(parse_key_value("no pair"), None);
    }
}
