//! Detail overlay for reading a full post.
//!
//! Display only: opening does not mutate the store, and no edit or delete
//! action is reachable from here.

use cork_types::Post;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayTransition;
use super::render_utils::{calculate_overlay_area, render_overlay_container};

/// State for the post detail overlay: exactly one post.
#[derive(Debug)]
pub struct PostDetailState {
    pub post: Post,
}

impl PostDetailState {
    /// Opens the overlay with a snapshot of the selected post.
    pub fn open(post: Post) -> Self {
        Self { post }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_width = area.width.saturating_sub(8).clamp(24, 72);
        let popup_height = area.height.saturating_sub(4).clamp(7, 18);
        let popup = calculate_overlay_area(area, popup_width, popup_height);
        render_overlay_container(frame, popup, "Post", Color::Cyan);

        let inner = Rect::new(
            popup.x + 2,
            popup.y + 1,
            popup.width.saturating_sub(4),
            popup.height.saturating_sub(2),
        );

        let mut lines = vec![
            Line::from(Span::styled(
                self.post.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.post.description.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => OverlayTransition::Close,
            _ => OverlayTransition::Stay,
        }
    }
}
