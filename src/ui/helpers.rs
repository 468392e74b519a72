//! Layout and text measuring helpers shared by the renderers.

use ratatui::prelude::{Position, Rect};
use unicode_width::UnicodeWidthStr;

/// What: Rectangle of at most `width` x `height` centered in `area`.
///
/// Inputs:
/// - `width`, `height`: Desired size; clamped to `area`.
/// - `area`: Containing rectangle.
///
/// Output:
/// - The centered rectangle.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Display width of `s` in terminal cells, saturating at `u16::MAX`.
#[must_use]
pub fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// What: Number of leading lines to skip so the last line of `text` stays visible.
///
/// Inputs:
/// - `text`: Multi-line buffer.
/// - `visible`: Number of rows available.
///
/// Output:
/// - Scroll offset for `Paragraph::scroll`.
#[must_use]
pub fn tail_scroll(text: &str, visible: u16) -> u16 {
    let lines = u16::try_from(text.split('\n').count()).unwrap_or(u16::MAX);
    lines.saturating_sub(visible)
}

/// What: Terminal cursor position at the end of `text` rendered inside `inner`.
///
/// Inputs:
/// - `text`: Buffer being edited (may span lines).
/// - `inner`: Inner rectangle of the input box.
/// - `scroll`: Rows scrolled off the top.
///
/// Output:
/// - Position clamped to `inner`.
#[must_use]
pub fn end_cursor(text: &str, inner: Rect, scroll: u16) -> Position {
    let mut rows = text.split('\n');
    let last = rows.next_back().unwrap_or_default();
    let row = u16::try_from(text.matches('\n').count())
        .unwrap_or(u16::MAX)
        .saturating_sub(scroll);
    let max_x = inner.width.saturating_sub(1);
    let max_y = inner.height.saturating_sub(1);
    Position {
        x: inner.x + display_width(last).min(max_x),
        y: inner.y + row.min(max_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Centering clamps to the containing area.
    fn centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(100, 100, area), area);
    }

    #[test]
    /// What: The cursor follows the last line of a multi-line buffer.
    ///
    /// Inputs:
    /// - `"ab\ncde"` in a 10x3 box at (1,1), no scroll
    ///
    /// Output:
    /// - Cursor at column 1+3, row 1+1
    fn end_cursor_tracks_last_line() {
        let inner = Rect::new(1, 1, 10, 3);
        assert_eq!(end_cursor("ab\ncde", inner, 0), Position { x: 4, y: 2 });
        assert_eq!(end_cursor("", inner, 0), Position { x: 1, y: 1 });
        assert_eq!(tail_scroll("a\nb\nc\nd", 3), 1);
        assert_eq!(end_cursor("a\nb\nc\nd", inner, 1), Position { x: 2, y: 3 });
    }
}
