/// What: Remove an inline comment from a configuration value.
///
/// Inputs:
/// - `s`: Raw value text that may end in a comment.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - A comment starts at `#` or `//` preceded by whitespace, so URLs such as
///   `https://host/path#frag` survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    for marker in [" #", "\t#", " //", "\t//"] {
        if let Some(i) = s.find(marker) {
            end = end.min(i);
        }
    }
    s[..end].trim()
}

/// Interpret common truthy spellings (`true`, `1`, `yes`, `on`).
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// Normalize a config key: lowercase, with `.`, `-` and spaces mapped to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}
