//! Board feature view.
//!
//! Layout, top to bottom: header (user + sync spinner), notice line, the
//! editor form, the post list, and a key hint footer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{BoardState, NoticeKind};
use crate::common::{TaskKind, Tasks, truncate_with_ellipsis};
use crate::features::editor::EditorField;
use crate::state::{BoardFocus, BoardScreen};

/// Spinner frames for the sync indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

const HEADER_HEIGHT: u16 = 2;
const NOTICE_HEIGHT: u16 = 1;
const EDITOR_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 1;

/// Renders the board screen.
pub fn render_board(
    frame: &mut Frame,
    screen: &BoardScreen,
    area: Rect,
    tasks: &Tasks,
    spinner_frame: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(NOTICE_HEIGHT),
            Constraint::Length(EDITOR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(frame, &screen.board, chunks[0], tasks, spinner_frame);
    render_notice(frame, &screen.board, chunks[1]);
    render_editor(frame, screen, chunks[2]);
    render_posts(frame, screen, chunks[3], tasks);
    render_footer(frame, screen, chunks[4]);
}

fn render_header(
    frame: &mut Frame,
    board: &BoardState,
    area: Rect,
    tasks: &Tasks,
    spinner_frame: usize,
) {
    let identity = match &board.user {
        Some(user) => vec![
            Span::styled(
                format!("Hi, {}", user.name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", user.email),
                Style::default().fg(Color::DarkGray),
            ),
        ],
        None => vec![Span::styled(
            "Loading profile...",
            Style::default().fg(Color::DarkGray),
        )],
    };

    let mut spans = identity;
    if tasks.is_any_running() {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("  {spinner} Syncing..."),
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

fn render_notice(frame: &mut Frame, board: &BoardState, area: Rect) {
    let Some(notice) = &board.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        notice.text.clone(),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_editor(frame: &mut Frame, screen: &BoardScreen, area: Rect) {
    let editing = screen.editor.is_editing();
    let focused = screen.focus == BoardFocus::Editor;

    let title = if editing { " Edit Post " } else { " Create Post " };
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(border_color)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        editor_field_line(
            "Title",
            &screen.editor.title,
            focused && screen.editor.focus == EditorField::Title,
        ),
        editor_field_line(
            "Description",
            &screen.editor.description,
            focused && screen.editor.focus == EditorField::Description,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn editor_field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let pointer = if focused { "> " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(pointer.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{label:<13}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value.to_string(), value_style),
        Span::styled(if focused { "▏" } else { "" }, value_style),
    ])
}

fn render_posts(frame: &mut Frame, screen: &BoardScreen, area: Rect, tasks: &Tasks) {
    let width = area.width.saturating_sub(2) as usize;
    let list_focused = screen.focus == BoardFocus::List;

    if screen.board.posts.is_empty() {
        let text = if tasks.state(TaskKind::FetchPosts).is_running() {
            "Loading posts..."
        } else {
            "No posts yet. Tab to the editor to create one."
        };
        let line = Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let lines: Vec<Line<'static>> = screen
        .board
        .posts
        .iter()
        .enumerate()
        .map(|(idx, post)| {
            let selected = idx == screen.board.selected;
            let marker = if selected { "▌ " } else { "  " };
            let marker_color = if selected && list_focused {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            let title_style = if selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let title_width = width.min(30);
            let title = truncate_with_ellipsis(&post.title, title_width);
            let rest = width.saturating_sub(title.chars().count() + 5);
            let description = truncate_with_ellipsis(&post.description, rest);

            Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(marker_color)),
                Span::styled(title, title_style),
                Span::styled(
                    format!("  {description}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_footer(frame: &mut Frame, screen: &BoardScreen, area: Rect) {
    let hints = match screen.focus {
        BoardFocus::List => {
            "↑/↓ select · Enter details · e edit · d delete · r refresh · Tab editor · Ctrl+L logout · Ctrl+C quit"
        }
        BoardFocus::Editor => {
            if screen.editor.is_editing() {
                "Enter update · Esc cancel edit · Tab next field · Ctrl+L logout"
            } else {
                "Enter create · Tab next field · Ctrl+L logout · Ctrl+C quit"
            }
        }
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(line), area);
}
