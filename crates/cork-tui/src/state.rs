//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//! - `AppState` - combined state (`TuiState` + overlay)
//! - `TuiState` - non-overlay UI state (screen, session, tasks)
//! - `Screen` - the active view with its own state slice
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── screen: Screen           (Login | Register | Board)
//! │   ├── session: Option<Session> (explicit bearer session)
//! │   ├── tasks: Tasks             (in-flight request ledger)
//! │   └── spinner_frame: usize
//! └── overlay: Option<Overlay>     (detail modal)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can take `&mut self` and `&mut TuiState` without borrow
//! conflicts.

use cork_client::{Session, SessionCheck};

use crate::common::Tasks;
use crate::effects::UiEffect;
use crate::features::auth::{LoginForm, RegisterForm};
use crate::features::board::BoardState;
use crate::features::editor::EditorState;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Creates the initial state from the session guard's verdict.
    ///
    /// `RedirectToLogin` lands on the login screen; an active session lands
    /// on the board. Nothing here touches the network.
    pub fn new(check: SessionCheck) -> Self {
        let (screen, session) = match check {
            SessionCheck::Active(session) => (Screen::Board(BoardScreen::default()), Some(session)),
            SessionCheck::RedirectToLogin => (Screen::Login(LoginForm::default()), None),
        };

        Self {
            tui: TuiState {
                should_quit: false,
                screen,
                session,
                tasks: Tasks::default(),
                spinner_frame: 0,
            },
            overlay: None,
        }
    }

    /// Effects to run when the app starts.
    ///
    /// Board entry loads the profile and the post collection; the login
    /// screen starts with zero network calls.
    pub fn entry_effects(&self) -> Vec<UiEffect> {
        match self.tui.screen {
            Screen::Board(_) => vec![UiEffect::FetchUser, UiEffect::FetchPosts],
            Screen::Login(_) | Screen::Register(_) => vec![],
        }
    }
}

/// The active view.
pub enum Screen {
    Login(LoginForm),
    Register(RegisterForm),
    Board(BoardScreen),
}

/// Which pane of the board receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardFocus {
    /// The post list.
    #[default]
    List,
    /// The editor form at the top.
    Editor,
}

/// Board screen state: the post store, the editor draft, and key focus.
#[derive(Debug, Default)]
pub struct BoardScreen {
    pub board: BoardState,
    pub editor: EditorState,
    pub focus: BoardFocus,
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The active screen.
    pub screen: Screen,
    /// Active session; `None` until login completes, cleared at logout.
    pub session: Option<Session>,
    /// In-flight request ledger (spinner and busy indicators).
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}
