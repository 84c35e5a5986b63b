//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use cork_client::Session;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::effects::{Nav, UiEffect};
use crate::events::{AuthUiEvent, BoardUiEvent, UiEvent};
use crate::features::auth::{self, LoginForm, RegisterForm};
use crate::features::board::{self, BoardAction};
use crate::overlays::{Overlay, OverlayTransition, PostDetailState};
use crate::state::{AppState, BoardScreen, Screen, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Auth(auth_event) => handle_auth_event(app, auth_event),
        UiEvent::Board(board_event) => {
            // Results landing after a logout or screen change are dropped.
            let Screen::Board(screen) = &mut app.tui.screen else {
                return vec![];
            };
            board::handle_board_event(screen, board_event)
        }
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            // The ledger only drives the spinner; results are always applied
            // so overlapping requests of the same kind all land.
            app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            update(app, *completed.result)
        }
    }
}

// ============================================================================
// Navigation Dispatcher
// ============================================================================

/// Applies a navigation command and returns the new screen's entry effects.
///
/// This is the only place screens are switched.
fn navigate(tui: &mut TuiState, nav: Nav) -> Vec<UiEffect> {
    match nav {
        Nav::Login => {
            tui.screen = Screen::Login(LoginForm::default());
            vec![]
        }
        Nav::Register => {
            tui.screen = Screen::Register(RegisterForm::default());
            vec![]
        }
        Nav::Board => {
            tui.screen = Screen::Board(BoardScreen::default());
            vec![UiEffect::FetchUser, UiEffect::FetchPosts]
        }
    }
}

// ============================================================================
// Async Result Handlers
// ============================================================================

fn handle_auth_event(app: &mut AppState, event: AuthUiEvent) -> Vec<UiEffect> {
    match event {
        AuthUiEvent::LoginResult { result } => {
            let Screen::Login(form) = &mut app.tui.screen else {
                return vec![];
            };
            let (token, nav) = auth::handle_login_result(form, result);

            let mut effects = Vec::new();
            if let Some(token) = token {
                app.tui.session = Some(Session::issue(token.clone()));
                effects.push(UiEffect::SaveCredentials { token });
            }
            if let Some(nav) = nav {
                effects.extend(navigate(&mut app.tui, nav));
            }
            effects
        }
        AuthUiEvent::RegisterResult { result } => {
            let Screen::Register(form) = &mut app.tui.screen else {
                return vec![];
            };
            let nav = auth::handle_register_result(form, result);

            let Some(nav) = nav else {
                return vec![];
            };
            let effects = navigate(&mut app.tui, nav);
            if let Screen::Login(login) = &mut app.tui.screen {
                login.notice = Some("Registration successful. Log in below.".to_string());
            }
            effects
        }
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from any screen, modal open or not.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.tui.should_quit = true;
        return vec![];
    }

    // The overlay takes keyboard input while open.
    if let Some(overlay) = app.overlay.as_mut() {
        if let OverlayTransition::Close = overlay.handle_key(key) {
            app.overlay = None;
        }
        return vec![];
    }

    match &mut app.tui.screen {
        Screen::Login(form) => {
            let (effects, nav) = auth::handle_login_key(form, key);
            dispatch_nav(app, effects, nav)
        }
        Screen::Register(form) => {
            let (effects, nav) = auth::handle_register_key(form, key);
            dispatch_nav(app, effects, nav)
        }
        Screen::Board(screen) => {
            let (mut effects, action) = board::handle_board_key(screen, key);
            match action {
                BoardAction::None => effects,
                BoardAction::OpenDetail(post) => {
                    app.overlay = Some(Overlay::PostDetail(PostDetailState::open(post)));
                    effects
                }
                BoardAction::Logout => {
                    app.tui.session = None;
                    effects.push(UiEffect::ClearCredentials);
                    effects.extend(navigate(&mut app.tui, Nav::Login));
                    effects
                }
            }
        }
    }
}

fn dispatch_nav(app: &mut AppState, mut effects: Vec<UiEffect>, nav: Option<Nav>) -> Vec<UiEffect> {
    if let Some(nav) = nav {
        effects.extend(navigate(&mut app.tui, nav));
    }
    effects
}

#[cfg(test)]
mod tests {
    use cork_client::SessionCheck;
    use cork_types::Post;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::state::BoardFocus;

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn post(id: &str, title: &str, description: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    fn board_app() -> AppState {
        AppState::new(SessionCheck::from_credentials(Some(
            cork_client::Credentials {
                token: "tok-123".to_string(),
            },
        )))
    }

    fn board_screen(app: &mut AppState) -> &mut BoardScreen {
        match &mut app.tui.screen {
            Screen::Board(screen) => screen,
            _ => panic!("expected the board screen"),
        }
    }

    #[test]
    fn missing_token_starts_at_login_with_zero_effects() {
        let app = AppState::new(SessionCheck::RedirectToLogin);
        assert!(matches!(app.tui.screen, Screen::Login(_)));
        assert!(app.tui.session.is_none());
        assert!(app.entry_effects().is_empty());
    }

    #[test]
    fn active_session_enters_board_and_fetches() {
        let app = board_app();
        assert!(matches!(app.tui.screen, Screen::Board(_)));
        assert_eq!(
            app.entry_effects(),
            vec![UiEffect::FetchUser, UiEffect::FetchPosts]
        );
    }

    #[test]
    fn login_success_issues_session_and_loads_the_board() {
        let mut app = AppState::new(SessionCheck::RedirectToLogin);

        let effects = update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::LoginResult {
                result: Ok("tok-9".to_string()),
            }),
        );

        assert!(app.tui.session.is_some());
        assert!(matches!(app.tui.screen, Screen::Board(_)));
        assert_eq!(
            effects,
            vec![
                UiEffect::SaveCredentials {
                    token: "tok-9".to_string()
                },
                UiEffect::FetchUser,
                UiEffect::FetchPosts,
            ]
        );
    }

    #[test]
    fn login_failure_keeps_the_form_populated() {
        let mut app = AppState::new(SessionCheck::RedirectToLogin);
        if let Screen::Login(form) = &mut app.tui.screen {
            form.email = "amy@example.com".to_string();
            form.password = "hunter2".to_string();
        }

        let effects = update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::LoginResult {
                result: Err("Invalid credentials".to_string()),
            }),
        );

        assert!(effects.is_empty());
        let Screen::Login(form) = &app.tui.screen else {
            panic!("expected the login screen");
        };
        assert_eq!(form.email, "amy@example.com");
        assert_eq!(form.password, "hunter2");
        assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn register_mismatch_makes_no_network_call() {
        let mut app = AppState::new(SessionCheck::RedirectToLogin);
        app.tui.screen = Screen::Register(RegisterForm {
            name: "Amy".to_string(),
            email: "amy@example.com".to_string(),
            password: "hunter2".to_string(),
            confirm: "hunter3".to_string(),
            ..RegisterForm::default()
        });

        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(effects.is_empty());
        let Screen::Register(form) = &app.tui.screen else {
            panic!("expected the register screen");
        };
        assert_eq!(form.error.as_deref(), Some("Passwords don't match"));
    }

    #[test]
    fn register_success_routes_back_to_login() {
        let mut app = AppState::new(SessionCheck::RedirectToLogin);
        app.tui.screen = Screen::Register(RegisterForm::default());

        let effects = update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::RegisterResult { result: Ok(()) }),
        );

        assert!(effects.is_empty());
        let Screen::Login(form) = &app.tui.screen else {
            panic!("expected the login screen");
        };
        assert!(form.notice.is_some());
    }

    #[test]
    fn empty_draft_is_rejected_locally() {
        let mut app = board_app();
        board_screen(&mut app).focus = BoardFocus::Editor;

        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(effects.is_empty());
        let screen = board_screen(&mut app);
        assert!(screen.board.notice.is_some());
    }

    #[test]
    fn filled_draft_submits_a_create() {
        let mut app = board_app();
        {
            let screen = board_screen(&mut app);
            screen.focus = BoardFocus::Editor;
            screen.editor.title = "A".to_string();
            screen.editor.description = "B".to_string();
        }

        let effects = update(&mut app, key(KeyCode::Enter));

        assert_eq!(effects.len(), 1);
        assert!(matches!(
            &effects[0],
            UiEffect::CreatePost { payload } if payload.title == "A" && payload.description == "B"
        ));
    }

    #[test]
    fn successful_create_resyncs_and_clears_the_draft() {
        let mut app = board_app();
        {
            let screen = board_screen(&mut app);
            screen.editor.title = "A".to_string();
            screen.editor.description = "B".to_string();
        }

        let effects = update(
            &mut app,
            UiEvent::Board(BoardUiEvent::Created {
                post: post("p9", "A", "B"),
            }),
        );
        assert_eq!(effects, vec![UiEffect::FetchPosts]);

        // The resync's result replaces the sequence wholesale.
        let before = board_screen(&mut app).board.posts.len();
        update(
            &mut app,
            UiEvent::Board(BoardUiEvent::PostsLoaded {
                posts: vec![post("p9", "A", "B")],
            }),
        );
        let screen = board_screen(&mut app);
        assert_eq!(screen.board.posts.len(), before + 1);
        assert_eq!(screen.board.posts[0].title, "A");
        assert_eq!(screen.board.posts[0].description, "B");
        assert!(screen.editor.title.is_empty());
    }

    #[test]
    fn successful_update_resyncs_once_and_leaves_edit_mode() {
        let mut app = board_app();
        {
            let screen = board_screen(&mut app);
            screen.board.replace_posts(vec![post("p1", "Old", "Old")]);
            let target = screen.board.posts[0].clone();
            screen.editor.begin_edit(&target);
        }

        let effects = update(
            &mut app,
            UiEvent::Board(BoardUiEvent::Updated {
                post: post("p1", "New", "Edited"),
            }),
        );

        assert_eq!(effects, vec![UiEffect::FetchPosts]);
        let screen = board_screen(&mut app);
        assert!(!screen.editor.is_editing());
    }

    #[test]
    fn delete_removes_only_the_matching_post() {
        let mut app = board_app();
        board_screen(&mut app)
            .board
            .replace_posts(vec![post("p1", "First", "one"), post("p2", "Second", "two")]);

        let effects = update(
            &mut app,
            UiEvent::Board(BoardUiEvent::Deleted {
                id: "p1".to_string(),
            }),
        );

        assert!(effects.is_empty());
        let screen = board_screen(&mut app);
        let ids: Vec<&str> = screen.board.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2"]);
    }

    #[test]
    fn fetch_failures_become_notices() {
        let mut app = board_app();

        update(
            &mut app,
            UiEvent::Board(BoardUiEvent::PostsFailed {
                error: "HTTP 500".to_string(),
            }),
        );

        let screen = board_screen(&mut app);
        let notice = screen.board.notice.as_ref().unwrap();
        assert!(notice.text.contains("HTTP 500"));
    }

    #[test]
    fn detail_modal_opens_and_closes_without_mutating_the_store() {
        let mut app = board_app();
        board_screen(&mut app)
            .board
            .replace_posts(vec![post("p1", "First", "one")]);

        update(&mut app, key(KeyCode::Enter));
        assert!(app.overlay.is_some());
        assert_eq!(board_screen(&mut app).board.posts.len(), 1);

        update(&mut app, key(KeyCode::Esc));
        assert!(app.overlay.is_none());
        assert_eq!(board_screen(&mut app).board.posts.len(), 1);
    }

    #[test]
    fn logout_clears_the_session_and_returns_to_login() {
        let mut app = board_app();

        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('l'),
                KeyModifiers::CONTROL,
            ))),
        );

        assert!(app.tui.session.is_none());
        assert!(matches!(app.tui.screen, Screen::Login(_)));
        assert_eq!(effects, vec![UiEffect::ClearCredentials]);
    }

    #[test]
    fn stale_board_results_after_logout_are_dropped() {
        let mut app = AppState::new(SessionCheck::RedirectToLogin);

        let effects = update(
            &mut app,
            UiEvent::Board(BoardUiEvent::PostsLoaded {
                posts: vec![post("p1", "First", "one")],
            }),
        );

        assert!(effects.is_empty());
        assert!(matches!(app.tui.screen, Screen::Login(_)));
    }

    #[test]
    fn delete_key_targets_the_selected_post() {
        let mut app = board_app();
        {
            let screen = board_screen(&mut app);
            screen
                .board
                .replace_posts(vec![post("p1", "First", "one"), post("p2", "Second", "two")]);
            screen.board.select_next();
        }

        let effects = update(&mut app, key(KeyCode::Char('d')));

        assert_eq!(
            effects,
            vec![UiEffect::DeletePost {
                id: "p2".to_string()
            }]
        );
    }
}
