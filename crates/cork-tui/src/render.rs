//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;

use crate::common::TaskKind;
use crate::features::{auth, board};
use crate::overlays::OverlayExt;
use crate::state::{AppState, Screen};

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    match &state.screen {
        Screen::Login(form) => {
            let busy = state.tasks.state(TaskKind::Login).is_running();
            auth::render_login(frame, form, area, busy);
        }
        Screen::Register(form) => {
            let busy = state.tasks.state(TaskKind::Register).is_running();
            auth::render_register(frame, form, area, busy);
        }
        Screen::Board(screen) => {
            board::render_board(frame, screen, area, &state.tasks, state.spinner_frame);
        }
    }

    // Overlay last, so it appears on top.
    app.overlay.render(frame, area);
}
