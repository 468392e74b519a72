//! Success banner and validation alert lines.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::AppState;
use crate::theme::theme;

/// Text of the banner shown after a successful save.
pub const SUCCESS_BANNER: &str = "Success! Your changes have been saved";

/// What: Success banner line, if it should be shown.
///
/// Output:
/// - `Some(line)` after a successful save until Esc dismisses it.
#[must_use]
pub fn success_line(app: &AppState) -> Option<Line<'static>> {
    if !(app.saved_changes && app.banner_visible) {
        return None;
    }
    let th = theme();
    Some(Line::from(vec![
        Span::styled(
            SUCCESS_BANNER,
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (Esc to dismiss)", Style::default().fg(th.overlay1)),
    ]))
}

/// One alert line per rule the current choices break, in report order.
#[must_use]
pub fn violation_lines(app: &AppState) -> Vec<Line<'static>> {
    let th = theme();
    app.report
        .violations()
        .into_iter()
        .map(|v| {
            Line::from(Span::styled(
                v.message(&app.limits),
                Style::default().fg(th.red),
            ))
        })
        .collect()
}
