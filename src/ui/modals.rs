//! Overlay rendering: Alert and Help.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::theme;

use super::helpers::centered_rect;

/// Key bindings listed in the Help overlay.
const HELP_ROWS: [(&str, &str); 10] = [
    ("Tab / Shift+Tab", "Move between controls"),
    ("Up / Down", "Move between controls (outside Choices)"),
    ("Enter", "New choice line, or press the focused button"),
    ("Space", "Toggle the focused checkbox"),
    ("Backspace", "Delete the last character"),
    ("Ctrl+S", "Save changes"),
    ("Ctrl+R", "Reset the form"),
    ("Esc", "Close this overlay or the success banner"),
    ("F1", "Show this help"),
    ("Ctrl+C / Ctrl+Q", "Quit"),
];

/// What: Render the active overlay, if any, on top of `area`.
pub fn render_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => {
            let lines = vec![
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(th.text),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter or Esc to close",
                    Style::default().fg(th.overlay1),
                )),
            ];
            render_box(f, area, "Alert", lines, th.red, 9);
        }
        Modal::Help => {
            let mut lines: Vec<Line<'static>> = HELP_ROWS
                .iter()
                .map(|(keys, what)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{keys:<18}"),
                            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled((*what).to_string(), Style::default().fg(th.text)),
                    ])
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press Enter or Esc to close",
                Style::default().fg(th.overlay1),
            )));
            let h = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
            render_box(f, area, "Help", lines, th.mauve, h);
        }
    }
}

/// Clear a centered rectangle and draw a double-bordered box with `lines`.
fn render_box(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    accent: Color,
    height: u16,
) {
    let th = theme();
    let rect = centered_rect(area.width.saturating_sub(8).min(72), height, area);
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}
