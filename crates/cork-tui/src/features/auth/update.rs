//! Auth feature reducer.
//!
//! Handles form key input and async result processing. Navigation is
//! returned as a `Nav` value for the main reducer's dispatcher; nothing
//! here switches screens or performs I/O.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{LoginForm, RegisterForm};
use crate::effects::{Nav, UiEffect};

/// Handles a key on the login screen.
pub fn handle_login_key(form: &mut LoginForm, key: KeyEvent) -> (Vec<UiEffect>, Option<Nav>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('r') {
        return (vec![], Some(Nav::Register));
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            (vec![], None)
        }
        KeyCode::Up => {
            // Two fields, so previous == next.
            form.focus_next();
            (vec![], None)
        }
        KeyCode::Enter => {
            form.error = None;
            form.notice = None;
            (
                vec![UiEffect::SubmitLogin {
                    email: form.email.clone(),
                    password: form.password.clone(),
                }],
                None,
            )
        }
        KeyCode::Backspace => {
            form.field_mut().pop();
            (vec![], None)
        }
        KeyCode::Char(c) if !ctrl => {
            form.error = None;
            form.field_mut().push(c);
            (vec![], None)
        }
        _ => (vec![], None),
    }
}

/// Handles the async login result.
///
/// On success the caller issues the session, persists the token, and
/// navigates to the board. On failure the form stays populated with the
/// message shown inline.
pub fn handle_login_result(
    form: &mut LoginForm,
    result: Result<String, String>,
) -> (Option<String>, Option<Nav>) {
    match result {
        Ok(token) => (Some(token), Some(Nav::Board)),
        Err(message) => {
            form.error = Some(message);
            (None, None)
        }
    }
}

/// Handles a key on the register screen.
pub fn handle_register_key(form: &mut RegisterForm, key: KeyEvent) -> (Vec<UiEffect>, Option<Nav>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => (vec![], Some(Nav::Login)),
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            (vec![], None)
        }
        KeyCode::Enter => {
            // Confirmation mismatch fails fast: no network call is made.
            if let Err(message) = form.validate() {
                form.error = Some(message);
                return (vec![], None);
            }
            form.error = None;
            (
                vec![UiEffect::SubmitRegister {
                    name: form.name.clone(),
                    email: form.email.clone(),
                    password: form.password.clone(),
                }],
                None,
            )
        }
        KeyCode::Backspace => {
            form.field_mut().pop();
            (vec![], None)
        }
        KeyCode::Char(c) if !ctrl => {
            form.error = None;
            form.field_mut().push(c);
            (vec![], None)
        }
        _ => (vec![], None),
    }
}

/// Handles the async registration result.
///
/// Success routes back to login; failure surfaces the server message.
pub fn handle_register_result(
    form: &mut RegisterForm,
    result: Result<(), String>,
) -> Option<Nav> {
    match result {
        Ok(()) => Some(Nav::Login),
        Err(message) => {
            form.error = Some(message);
            None
        }
    }
}
