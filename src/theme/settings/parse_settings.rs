use crate::theme::parsing::{normalize_key, parse_bool, strip_inline_comment};
use crate::theme::types::Settings;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys and unparsable values are ignored; the current value is kept.
/// - `max_choice_chars` accepts `0`, `off`, `none` or `false` to disable the rule.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, val_raw)) = parse_key_value(line) else {
            continue;
        };
        let key = normalize_key(&raw_key);
        let val = strip_inline_comment(&val_raw);
        match key.as_str() {
            "submit_endpoint" | "endpoint" => {
                if !val.is_empty() {
                    settings.submit_endpoint = val.to_string();
                }
            }
            "submit_timeout_secs" | "submit_timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.submit_timeout_secs = v;
                }
            }
            "unique_choice_ceiling" | "max_unique_choices" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.unique_choice_ceiling = v;
                }
            }
            "max_choice_chars" | "choice_char_limit" => {
                let lv = val.to_ascii_lowercase();
                if matches!(lv.as_str(), "0" | "off" | "none" | "false") {
                    settings.max_choice_chars = None;
                } else if let Ok(v) = val.parse::<usize>() {
                    settings.max_choice_chars = Some(v);
                }
            }
            "autosave_enabled" | "autosave" => {
                settings.autosave_enabled = parse_bool(val);
            }
            "autosave_debounce_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.autosave_debounce_ms = v;
                }
            }
            "app_dry_run_default" | "dry_run_default" => {
                settings.app_dry_run_default = parse_bool(val);
            }
            _ => {
                tracing::debug!(key = %key, "[Config] Ignoring unknown settings key");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Every supported key is parsed, including aliases and comments.
    ///
    /// Inputs:
    /// - A settings file touching each key
    ///
    /// Output:
    /// - `Settings` reflects each value
    fn parses_all_keys() {
        let content = "\
# comment
submit_endpoint = https://example.test/fields
submit-timeout-secs = 3
Unique.Choice.Ceiling = 5   # the stricter ceiling
max_choice_chars = 12
autosave = off
autosave_debounce_ms = 900
dry_run_default = yes
";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s.submit_endpoint, "https://example.test/fields");
        assert_eq!(s.submit_timeout_secs, 3);
        assert_eq!(s.unique_choice_ceiling, 5);
        assert_eq!(s.max_choice_chars, Some(12));
        assert!(!s.autosave_enabled);
        assert_eq!(s.autosave_debounce_ms, 900);
        assert!(s.app_dry_run_default);
    }

    #[test]
    /// What: Invalid values leave defaults untouched; `off` disables the length rule.
    fn invalid_values_keep_defaults() {
        let mut s = Settings::default();
        parse_settings(
            "unique_choice_ceiling = lots\nsubmit_timeout_secs = 0\nmax_choice_chars = off\nnot a pair\n",
            &mut s,
        );
        assert_eq!(s.unique_choice_ceiling, 50);
        assert_eq!(s.submit_timeout_secs, 10);
        assert_eq!(s.max_choice_chars, None);
    }
}
