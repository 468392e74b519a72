//! Rendering of the builder card: inputs, checkboxes, alerts and buttons.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::logic::normalize;
use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};

use super::alerts::{success_line, violation_lines};
use super::helpers::{end_cursor, tail_scroll};

/// Hint rendered under empty required inputs.
pub const REQUIRED_HINT: &str = "*This Field is Required";

/// What: Render the whole builder card into `area`.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `area`: Card rectangle.
/// - `app`: Application state (read only).
///
/// Details:
/// - Places the terminal cursor at the end of the focused text input.
pub fn render_form(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let card = Block::default()
        .title(Span::styled(
            " Field Builder ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.mantle));
    let inner = card.inner(area);
    f.render_widget(card, area);

    let banner = success_line(app);
    let alerts = violation_lines(app);
    let banner_h = u16::from(banner.is_some());
    let alerts_h = u16::try_from(alerts.len() * 2).unwrap_or(u16::MAX);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_h),
            Constraint::Length(3), // label
            Constraint::Length(1), // label hint
            Constraint::Length(1), // type + required
            Constraint::Length(3), // default
            Constraint::Length(1), // default hint
            Constraint::Min(4),    // choices
            Constraint::Length(1), // alphabetical
            Constraint::Length(alerts_h),
            Constraint::Length(1), // buttons
            Constraint::Length(1), // key hints
        ])
        .split(inner);

    if let Some(line) = banner {
        f.render_widget(Paragraph::new(line), rows[0]);
    }

    render_text_input(f, rows[1], app, Focus::Label, "Label", &app.values.label, &th);
    render_required_hint(f, rows[2], app.values.label.is_empty(), &th);

    let type_row = Line::from(vec![
        Span::styled("Type: ", Style::default().fg(th.subtext0)),
        Span::styled(
            "Multi-Select",
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        checkbox_span(app, Focus::Required, app.values.required, "A Value is required", &th),
    ]);
    f.render_widget(Paragraph::new(type_row), rows[3]);

    render_text_input(
        f,
        rows[4],
        app,
        Focus::Default,
        "Default Value",
        &app.values.default_choice,
        &th,
    );
    render_required_hint(f, rows[5], app.values.default_choice.is_empty(), &th);

    render_choices(f, rows[6], app, &th);

    let alpha_row = Line::from(checkbox_span(
        app,
        Focus::Alphabetical,
        app.values.display_alpha,
        "Display choices in alphabetical order",
        &th,
    ));
    f.render_widget(Paragraph::new(alpha_row), rows[7]);

    if !alerts.is_empty() {
        f.render_widget(Paragraph::new(alerts).wrap(Wrap { trim: true }), rows[8]);
    }

    f.render_widget(Paragraph::new(buttons_line(app, &th)), rows[9]);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab move  Ctrl+S save  Ctrl+R reset  F1 help  Ctrl+Q quit",
            Style::default().fg(th.overlay1),
        ))),
        rows[10],
    );
}

/// Border color for a control depending on focus.
fn border_color(app: &AppState, control: Focus, th: &Theme) -> Color {
    if app.focus == control {
        th.sapphire
    } else {
        th.surface2
    }
}

/// What: Render a bordered single-line text input.
///
/// Details:
/// - Sets the cursor when the input has focus.
fn render_text_input(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    control: Focus,
    title: &str,
    value: &str,
    th: &Theme,
) {
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), Style::default().fg(th.subtext0)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color(app, control, th)));
    let inner = block.inner(area);
    f.render_widget(
        Paragraph::new(value.to_string())
            .style(Style::default().fg(th.text))
            .block(block),
        area,
    );
    if app.focus == control && !app.modal.is_open() {
        f.set_cursor_position(end_cursor(value, inner, 0));
    }
}

/// Hint under a required input while it is empty.
fn render_required_hint(f: &mut Frame, area: Rect, empty: bool, th: &Theme) {
    if empty {
        f.render_widget(
            Paragraph::new(Span::styled(REQUIRED_HINT, Style::default().fg(th.red))),
            area,
        );
    }
}

/// What: Render the multi-line choices input.
///
/// Details:
/// - The title counts the choices that would be submitted right now.
/// - Scrolls so the line being typed stays visible.
fn render_choices(f: &mut Frame, area: Rect, app: &AppState, th: &Theme) {
    let count = normalize(&app.values.choices, &app.values.default_choice).len();
    let block = Block::default()
        .title(Span::styled(
            format!(" Choices ({count}) "),
            Style::default().fg(th.subtext0),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color(app, Focus::Choices, th)));
    let inner = block.inner(area);
    let scroll = tail_scroll(&app.values.choices, inner.height);
    let lines: Vec<Line> = app
        .values
        .choices
        .split('\n')
        .map(|l| Line::from(l.to_string()))
        .collect();
    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(th.text))
            .scroll((scroll, 0))
            .block(block),
        area,
    );
    if app.focus == Focus::Choices && !app.modal.is_open() {
        f.set_cursor_position(end_cursor(&app.values.choices, inner, scroll));
    }
}

/// Checkbox glyph and label, highlighted when focused.
fn checkbox_span(
    app: &AppState,
    control: Focus,
    checked: bool,
    label: &str,
    th: &Theme,
) -> Span<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if app.focus == control {
        Style::default().fg(th.crust).bg(th.lavender)
    } else {
        Style::default().fg(th.text)
    };
    Span::styled(format!("{mark} {label}"), style)
}

/// Save and Reset buttons; Save reads "Saving..." while a submit is in flight.
fn buttons_line(app: &AppState, th: &Theme) -> Line<'static> {
    let button = |control: Focus, text: &str, accent: Color| {
        let style = if app.focus == control {
            Style::default()
                .fg(th.crust)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };
        Span::styled(format!("[ {text} ]"), style)
    };
    let save_text = if app.submitting {
        "Saving..."
    } else {
        "Save Changes"
    };
    let mut spans = vec![
        button(Focus::Save, save_text, th.green),
        Span::styled("  Or  ", Style::default().fg(th.overlay1)),
        button(Focus::Reset, "Reset Form", th.red),
    ];
    if app.dry_run {
        spans.push(Span::styled("   DRY RUN", Style::default().fg(th.yellow)));
    }
    Line::from(spans)
}
