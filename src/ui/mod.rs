//! TUI rendering for fieldwright.
//!
//! `ui` draws one frame from a read-only [`AppState`]: the builder card
//! centered on the canvas, then the active overlay on top.

use ratatui::{Frame, style::Style, widgets::Block};

use crate::state::AppState;
use crate::theme::theme;

/// Success banner and validation alerts.
pub mod alerts;
/// Builder card.
mod form;
/// Layout helpers.
pub mod helpers;
/// Alert and Help overlays.
mod modals;

pub use alerts::SUCCESS_BANNER;
pub use form::REQUIRED_HINT;

/// Widest the builder card grows on large terminals.
const CARD_WIDTH: u16 = 84;
/// Tallest the builder card grows on large terminals.
const CARD_HEIGHT: u16 = 34;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state.
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let card = helpers::centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
    form::render_form(f, card, app);
    modals::render_modal(f, area, app);
}
