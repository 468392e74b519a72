//! Choice-list validation and normalization for the multi-select field.
//!
//! Both entry points work on the raw text of the choices input (one choice per
//! `\n`-separated line) plus the default value. They share the same first
//! step: split the text and append the default unless some line already
//! matches it case-insensitively. Everything here is pure.

use std::collections::HashMap;

use serde::Serialize;

/// Default ceiling on the number of choices that appear exactly once.
pub const DEFAULT_UNIQUE_CHOICE_CEILING: usize = 50;

/// Default maximum length of a single choice, counted in UTF-16 code units.
pub const DEFAULT_MAX_CHOICE_CHARS: usize = 40;

/// What: Thresholds applied by [`validate`].
///
/// Details:
/// - `max_choice_chars = None` switches the length rule off entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceLimits {
    /// Number of exactly-once choices allowed before `too_many_unique` trips.
    pub unique_ceiling: usize,
    /// Longest allowed choice in UTF-16 code units, if the length rule is enabled.
    pub max_choice_chars: Option<usize>,
}

impl Default for ChoiceLimits {
    fn default() -> Self {
        Self {
            unique_ceiling: DEFAULT_UNIQUE_CHOICE_CEILING,
            max_choice_chars: Some(DEFAULT_MAX_CHOICE_CHARS),
        }
    }
}

/// Which structural rules the current choices break.
///
/// The three flags are computed independently on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ViolationReport {
    /// Some non-empty choice occurs more than once (case-sensitive).
    pub duplicate: bool,
    /// More exactly-once choices than the configured ceiling.
    pub too_many_unique: bool,
    /// Some choice is longer than the configured limit.
    pub choice_too_long: bool,
}

impl ViolationReport {
    /// Whether no rule is broken.
    #[must_use]
    pub const fn is_clean(self) -> bool {
        !(self.duplicate || self.too_many_unique || self.choice_too_long)
    }

    /// What: List the broken rules in display order.
    ///
    /// Inputs:
    /// - `self`: Report to expand.
    ///
    /// Output:
    /// - One [`Violation`] per true flag (duplicate, too many, too long).
    #[must_use]
    pub fn violations(self) -> Vec<Violation> {
        let mut out = Vec::with_capacity(3);
        if self.duplicate {
            out.push(Violation::Duplicate);
        }
        if self.too_many_unique {
            out.push(Violation::TooManyUnique);
        }
        if self.choice_too_long {
            out.push(Violation::ChoiceTooLong);
        }
        out
    }
}

/// A single broken rule, used by the UI to pick an alert message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// See [`ViolationReport::duplicate`].
    Duplicate,
    /// See [`ViolationReport::too_many_unique`].
    TooManyUnique,
    /// See [`ViolationReport::choice_too_long`].
    ChoiceTooLong,
}

impl Violation {
    /// What: Human-readable alert text for this violation.
    ///
    /// Inputs:
    /// - `limits`: Limits in effect, interpolated into the message.
    ///
    /// Output:
    /// - Alert sentence shown under the choices input.
    #[must_use]
    pub fn message(self, limits: &ChoiceLimits) -> String {
        match self {
            Self::Duplicate => {
                "Uh oh! Your most recent entry already exists. Please delete and enter another."
                    .to_string()
            }
            Self::TooManyUnique => format!(
                "Uh oh! You have exceeded your limit of {} choices. Please delete the latest choice you entered to stay within the limit.",
                limits.unique_ceiling
            ),
            Self::ChoiceTooLong => {
                let max = limits.max_choice_chars.unwrap_or(DEFAULT_MAX_CHOICE_CHARS);
                format!(
                    "Uh oh! Your latest choice exceeds the {max} character limit. Choices must be within {max} characters in length."
                )
            }
        }
    }
}

/// What: Split the raw choices and reconcile the default value into them.
///
/// Inputs:
/// - `raw`: Choices text, one choice per `\n`-separated line.
/// - `default_value`: The field's default choice.
///
/// Output:
/// - Lines in typed order (case and whitespace untouched, blanks kept), with
///   `default_value` appended when no line equals it case-insensitively.
#[must_use]
pub fn choice_set<'a>(raw: &'a str, default_value: &'a str) -> Vec<&'a str> {
    let mut set: Vec<&str> = raw.split('\n').collect();
    let wanted = default_value.to_lowercase();
    if !set.iter().any(|line| line.to_lowercase() == wanted) {
        set.push(default_value);
    }
    set
}

/// What: Report which structural rules the choices break.
///
/// Inputs:
/// - `raw`: Choices text as typed.
/// - `default_value`: The field's default choice.
/// - `limits`: Unique-choice ceiling and per-choice length limit.
///
/// Output:
/// - A [`ViolationReport`]; never fails.
///
/// Details:
/// - Duplicates are counted with exact, case-sensitive equality while the
///   default is reconciled case-insensitively, so default `Red` with a typed
///   `red` is present but not a duplicate.
/// - Choice length is measured in UTF-16 code units, so a character outside
///   the Basic Multilingual Plane counts twice.
/// - Blank lines never enter the frequency table. They stay in the set for the
///   length check, where their zero length cannot trip it.
#[must_use]
pub fn validate(raw: &str, default_value: &str, limits: &ChoiceLimits) -> ViolationReport {
    let set = choice_set(raw, default_value);

    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for choice in set.iter().copied().filter(|c| !c.is_empty()) {
        *frequency.entry(choice).or_insert(0) += 1;
    }

    let duplicate = frequency.values().any(|&n| n > 1);
    let unique = frequency.values().filter(|&&n| n == 1).count();
    let choice_too_long = limits
        .max_choice_chars
        .is_some_and(|max| set.iter().any(|c| utf16_len(c) > max));

    ViolationReport {
        duplicate,
        too_many_unique: unique > limits.unique_ceiling,
        choice_too_long,
    }
}

/// What: Produce the choice list that goes into the submitted configuration.
///
/// Inputs:
/// - `raw`: Choices text as typed.
/// - `default_value`: The field's default choice.
///
/// Output:
/// - The reconciled set with every `""` entry removed, order preserved.
///
/// Details:
/// - Repeated non-empty entries are kept; callers gate on [`validate`] first.
#[must_use]
pub fn normalize(raw: &str, default_value: &str) -> Vec<String> {
    choice_set(raw, default_value)
        .into_iter()
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Length of a choice in UTF-16 code units.
fn utf16_len(choice: &str) -> usize {
    choice.encode_utf16().count()
}

/// Sort choices in place by code point, for the "display alphabetically" option.
pub fn sort_alphabetically(choices: &mut [String]) {
    choices.sort_unstable();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Join generated choices `x1..=xN` with newlines.
    fn numbered(n: usize) -> String {
        (1..=n)
            .map(|i| format!("x{i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    /// What: Repeated lines set the duplicate flag; distinct lines do not.
    ///
    /// Inputs:
    /// - `"a\na\nb"` with default `c`, and `"a\nb\nc"` with default `c`
    ///
    /// Output:
    /// - `duplicate` is true for the first and false for the second
    fn validate_flags_exact_duplicates() {
        let limits = ChoiceLimits::default();
        assert!(validate("a\na\nb", "c", &limits).duplicate);
        assert!(!validate("a\nb\nc", "c", &limits).duplicate);
    }

    #[test]
    /// What: A default already present is not appended a second time.
    ///
    /// Inputs:
    /// - `"a\nb"` with default `a`
    ///
    /// Output:
    /// - Set stays `[a, b]` and no duplicate is reported
    fn default_present_is_not_counted_twice() {
        assert_eq!(choice_set("a\nb", "a"), vec!["a", "b"]);
        assert!(!validate("a\nb", "a", &ChoiceLimits::default()).duplicate);
    }

    #[test]
    /// What: Default matching differs in case from duplicate matching.
    ///
    /// Inputs:
    /// - Default `Red` against typed `red`; typed `Red` and `red` together
    ///
    /// Output:
    /// - Default counts as present, but `Red`/`red` are not duplicates
    fn case_asymmetry_is_preserved() {
        assert_eq!(choice_set("red\nblue", "Red"), vec!["red", "blue"]);
        let report = validate("Red\nred", "blue", &ChoiceLimits::default());
        assert!(!report.duplicate);
    }

    #[test]
    /// What: Unique ceiling trips only once the exactly-once count exceeds it.
    ///
    /// Inputs:
    /// - 51 and 50 distinct choices with the last as default
    ///
    /// Output:
    /// - `too_many_unique` true for 51, false for 50
    fn unique_ceiling_boundary() {
        let limits = ChoiceLimits::default();
        assert!(validate(&numbered(51), "x51", &limits).too_many_unique);
        assert!(!validate(&numbered(50), "x50", &limits).too_many_unique);
    }

    #[test]
    /// What: Duplicated choices do not count toward the unique ceiling.
    ///
    /// Inputs:
    /// - 50 distinct choices plus two copies of `dup`, ceiling 50
    ///
    /// Output:
    /// - Duplicate flagged, ceiling not exceeded
    fn duplicated_entries_are_not_unique() {
        let raw = format!("{}\ndup\ndup", numbered(50));
        let report = validate(&raw, "x1", &ChoiceLimits::default());
        assert!(report.duplicate);
        assert!(!report.too_many_unique);
    }

    #[test]
    /// What: A smaller configured ceiling is honored.
    ///
    /// Inputs:
    /// - Six distinct choices, ceiling 5
    ///
    /// Output:
    /// - `too_many_unique` is true
    fn custom_ceiling_applies() {
        let limits = ChoiceLimits {
            unique_ceiling: 5,
            ..ChoiceLimits::default()
        };
        assert!(validate("a\nb\nc\nd\ne", "f", &limits).too_many_unique);
        assert!(!validate("a\nb\nc\nd", "e", &limits).too_many_unique);
    }

    #[test]
    /// What: Length rule trips above 40 characters and not at 40.
    ///
    /// Inputs:
    /// - A 41-character and a 40-character choice
    ///
    /// Output:
    /// - `choice_too_long` true only for the 41-character one
    fn length_limit_boundary() {
        let limits = ChoiceLimits::default();
        let long = "y".repeat(41);
        let exact = "y".repeat(40);
        assert!(validate(&long, "d", &limits).choice_too_long);
        assert!(!validate(&exact, "d", &limits).choice_too_long);
    }

    #[test]
    /// What: The appended default is subject to the length rule too.
    ///
    /// Inputs:
    /// - Short choices with a 41-character default
    ///
    /// Output:
    /// - `choice_too_long` is true
    fn appended_default_is_length_checked() {
        let long_default = "z".repeat(41);
        assert!(validate("a\nb", &long_default, &ChoiceLimits::default()).choice_too_long);
    }

    #[test]
    /// What: Length is counted in UTF-16 code units, not bytes or scalar values.
    ///
    /// Inputs:
    /// - 40 two-byte BMP characters
    /// - 21 emoji outside the BMP (42 code units)
    /// - 20 emoji (40 code units)
    ///
    /// Output:
    /// - Only the 21-emoji choice is flagged as too long
    fn length_counts_utf16_code_units() {
        let limits = ChoiceLimits::default();
        assert!(!validate(&"é".repeat(40), "d", &limits).choice_too_long);
        assert!(validate(&"\u{1F600}".repeat(21), "d", &limits).choice_too_long);
        assert!(!validate(&"\u{1F600}".repeat(20), "d", &limits).choice_too_long);
    }

    #[test]
    /// What: Disabling the length rule suppresses the flag.
    ///
    /// Inputs:
    /// - 100-character choice with `max_choice_chars = None`
    ///
    /// Output:
    /// - `choice_too_long` is false
    fn length_rule_can_be_disabled() {
        let limits = ChoiceLimits {
            max_choice_chars: None,
            ..ChoiceLimits::default()
        };
        assert!(!validate(&"q".repeat(100), "d", &limits).choice_too_long);
    }

    #[test]
    /// What: Blank lines never produce duplicates or uniques.
    ///
    /// Inputs:
    /// - Several consecutive newlines around a single choice, ceiling 1
    ///
    /// Output:
    /// - Report is clean
    fn blank_lines_are_ignored_by_counts() {
        let limits = ChoiceLimits {
            unique_ceiling: 1,
            ..ChoiceLimits::default()
        };
        let report = validate("\n\na\n\n", "a", &limits);
        assert!(report.is_clean());
    }

    #[test]
    /// What: Validation is repeatable for identical inputs.
    fn validate_is_pure() {
        let limits = ChoiceLimits::default();
        let first = validate("a\nA\na\n", "b", &limits);
        let second = validate("a\nA\na\n", "b", &limits);
        assert_eq!(first, second);
    }

    #[test]
    /// What: Normalization drops blanks and appends a missing default.
    ///
    /// Inputs:
    /// - `"a\n\nb\n"` with default `c`
    ///
    /// Output:
    /// - `["a", "b", "c"]`
    fn normalize_drops_blanks_and_appends_default() {
        assert_eq!(normalize("a\n\nb\n", "c"), vec!["a", "b", "c"]);
    }

    #[test]
    /// What: A case-insensitive match keeps the typed casing.
    ///
    /// Inputs:
    /// - `"A\nb"` with default `a`
    ///
    /// Output:
    /// - `["A", "b"]`
    fn normalize_keeps_typed_casing() {
        assert_eq!(normalize("A\nb", "a"), vec!["A", "b"]);
    }

    #[test]
    /// What: Normalization does not deduplicate and keeps whitespace.
    ///
    /// Inputs:
    /// - `"a\na\n b "` with default `a`
    ///
    /// Output:
    /// - `["a", "a", " b "]`
    fn normalize_does_not_deduplicate() {
        assert_eq!(normalize("a\na\n b ", "a"), vec!["a", "a", " b "]);
    }

    #[test]
    /// What: Empty input with empty default yields an empty list.
    fn normalize_empty_everything() {
        assert!(normalize("", "").is_empty());
        assert!(validate("", "", &ChoiceLimits::default()).is_clean());
    }

    #[test]
    /// What: Sorting uses code-point order.
    ///
    /// Inputs:
    /// - `["c", "a", "b"]` and a mixed-case list
    ///
    /// Output:
    /// - `["a", "b", "c"]`; uppercase sorts before lowercase
    fn sort_orders_by_code_point() {
        let mut choices = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        sort_alphabetically(&mut choices);
        assert_eq!(choices, vec!["a", "b", "c"]);

        let mut mixed = vec!["banana".to_string(), "Apple".to_string(), "apple".to_string()];
        sort_alphabetically(&mut mixed);
        assert_eq!(mixed, vec!["Apple", "apple", "banana"]);
    }

    #[test]
    /// What: Violations are listed in display order with limits in the text.
    fn violations_and_messages() {
        let report = ViolationReport {
            duplicate: true,
            too_many_unique: true,
            choice_too_long: true,
        };
        let limits = ChoiceLimits {
            unique_ceiling: 5,
            max_choice_chars: Some(12),
        };
        let list = report.violations();
        assert_eq!(
            list,
            vec![
                Violation::Duplicate,
                Violation::TooManyUnique,
                Violation::ChoiceTooLong
            ]
        );
        assert!(list[1].message(&limits).contains("limit of 5 choices"));
        assert!(list[2].message(&limits).contains("12 character limit"));
        assert!(ViolationReport::default().violations().is_empty());
    }
}
