//! `--check` handler: validate a choices file without starting the TUI.

use std::path::Path;

use serde::Serialize;

use crate::logic::{ChoiceLimits, ViolationReport, normalize, sort_alphabetically, validate};

/// JSON document printed by `--check`.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Validation flags.
    pub report: ViolationReport,
    /// Human-readable text for each raised flag.
    pub messages: Vec<String>,
    /// Choices as they would be submitted.
    pub choices: Vec<String>,
}

/// What: Validate and normalize raw choices the way a submit would.
///
/// Inputs:
/// - `raw`: Choices text, one per line.
/// - `default_value`: Default reconciled into the choices.
/// - `alpha`: Sort the normalized list.
/// - `limits`: Configured limits.
///
/// Output:
/// - The report, its messages and the normalized list.
#[must_use]
pub fn check_choices(
    raw: &str,
    default_value: &str,
    alpha: bool,
    limits: &ChoiceLimits,
) -> CheckOutput {
    let report = validate(raw, default_value, limits);
    let mut choices = normalize(raw, default_value);
    if alpha {
        sort_alphabetically(&mut choices);
    }
    CheckOutput {
        report,
        messages: report
            .violations()
            .into_iter()
            .map(|v| v.message(limits))
            .collect(),
        choices,
    }
}

/// What: Read a choices file and check it.
///
/// Inputs:
/// - `path`: File with one choice per line.
/// - `default_value`, `alpha`, `limits`: As for [`check_choices`].
///
/// Output:
/// - The check result, or an error message when the file cannot be read.
///
/// Details:
/// - A single trailing newline is dropped so files written by editors do not
///   gain a blank last line. Blank lines never count toward any rule anyway.
pub fn check_file(
    path: &Path,
    default_value: &str,
    alpha: bool,
    limits: &ChoiceLimits,
) -> Result<CheckOutput, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let raw = text.replace("\r\n", "\n");
    let raw = raw.strip_suffix('\n').unwrap_or(&raw);
    Ok(check_choices(raw, default_value, alpha, limits))
}

/// What: Handle `--check`: print the JSON result and exit.
///
/// Details:
/// - Exit code 0 when clean, 1 when any rule is broken, 2 on read errors.
/// - Limits come from `settings.conf`.
pub fn handle_check(path: &str, default_value: &str, alpha: bool) -> ! {
    tracing::info!(file = %path, "Check requested from CLI");
    let limits = crate::theme::settings().choice_limits();
    match check_file(Path::new(path), default_value, alpha, &limits) {
        Ok(output) => {
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to serialize check result: {e}");
                    std::process::exit(2);
                }
            }
            std::process::exit(i32::from(!output.report.is_clean()));
        }
        Err(msg) => {
            tracing::error!(error = %msg, "Check failed");
            eprintln!("{msg}");
            std::process::exit(2);
        }
    }
}
