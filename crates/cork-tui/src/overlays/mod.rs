//! Overlay modules for the TUI.
//!
//! Overlays are modal components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and
//! render function.

pub mod post_detail;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use post_detail::PostDetailState;
use ratatui::Frame;
use ratatui::layout::Rect;

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

#[derive(Debug)]
pub enum Overlay {
    PostDetail(PostDetailState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::PostDetail(detail) => detail.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayTransition {
        match self {
            Overlay::PostDetail(detail) => detail.handle_key(key),
        }
    }
}

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}
