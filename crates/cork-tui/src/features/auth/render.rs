//! Auth feature view.
//!
//! Rendering for the login and register screens: a centered form with
//! labeled fields, an inline notice line, and a key hint footer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{LoginField, LoginForm, RegisterField, RegisterForm};
use crate::overlays::render_utils::{calculate_overlay_area, render_overlay_container};

const FORM_WIDTH: u16 = 52;

/// Renders the login screen.
pub fn render_login(frame: &mut Frame, form: &LoginForm, area: Rect, busy: bool) {
    let popup = calculate_overlay_area(area, FORM_WIDTH, 11);
    render_overlay_container(frame, popup, "Log In", Color::Cyan);
    let inner = inner_area(popup);

    let mut lines = vec![
        field_line("Email", &form.email, form.focus == LoginField::Email, false),
        Line::from(""),
        field_line(
            "Password",
            &form.password,
            form.focus == LoginField::Password,
            true,
        ),
        Line::from(""),
    ];
    lines.push(status_line(form.error.as_deref(), form.notice.as_deref(), busy, "Signing in..."));
    lines.push(Line::from(""));
    lines.push(hint_line(
        "Enter submit · Tab next field · Ctrl+R register · Ctrl+C quit",
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the register screen.
pub fn render_register(frame: &mut Frame, form: &RegisterForm, area: Rect, busy: bool) {
    let popup = calculate_overlay_area(area, FORM_WIDTH, 14);
    render_overlay_container(frame, popup, "Register", Color::Cyan);
    let inner = inner_area(popup);

    let mut lines = vec![
        field_line("Name", &form.name, form.focus == RegisterField::Name, false),
        field_line(
            "Email",
            &form.email,
            form.focus == RegisterField::Email,
            false,
        ),
        field_line(
            "Password",
            &form.password,
            form.focus == RegisterField::Password,
            true,
        ),
        field_line(
            "Confirm",
            &form.confirm,
            form.focus == RegisterField::Confirm,
            true,
        ),
        Line::from(""),
    ];
    lines.push(status_line(form.error.as_deref(), None, busy, "Registering..."));
    lines.push(Line::from(""));
    lines.push(hint_line(
        "Enter submit · Tab next field · Esc back to login",
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn inner_area(popup: Rect) -> Rect {
    Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    )
}

fn field_line(label: &str, value: &str, focused: bool, mask: bool) -> Line<'static> {
    let pointer = if focused { "> " } else { "  " };
    let shown = if mask {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(pointer.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{label:<9}"), Style::default().fg(Color::DarkGray)),
        Span::styled(shown, value_style),
        Span::styled(if focused { "▏" } else { "" }, value_style),
    ])
}

fn status_line(
    error: Option<&str>,
    notice: Option<&str>,
    busy: bool,
    busy_text: &str,
) -> Line<'static> {
    if busy {
        return Line::from(Span::styled(
            busy_text.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(error) = error {
        return Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ));
    }
    if let Some(notice) = notice {
        return Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Green),
        ));
    }
    Line::from("")
}

fn hint_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}
