//! UI event types.
//!
//! This module defines the unified event enum for the TUI.
//! All external inputs (terminal, async results) are converted to `UiEvent`
//! before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Events follow the "inbox" pattern: async operations send events directly
//! to the runtime's event inbox. Results arrive as separate events.
//!
//! ## Task Lifecycle Events
//!
//! Async work uses a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a request is spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`

use cork_types::{Post, User};
use crossterm::event::Event as CrosstermEvent;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Async auth form results.
#[derive(Debug)]
pub enum AuthUiEvent {
    /// Login exchange completed (Ok carries the issued token).
    LoginResult { result: Result<String, String> },
    /// Registration completed.
    RegisterResult { result: Result<(), String> },
}

/// Async board results.
///
/// Failures carry the display message; the board surfaces them as a notice
/// instead of dropping them.
#[derive(Debug)]
pub enum BoardUiEvent {
    /// Profile fetched; replaces the local user.
    UserLoaded { user: User },
    UserFailed { error: String },

    /// Post collection fetched; replaces the local sequence wholesale.
    PostsLoaded { posts: Vec<Post> },
    PostsFailed { error: String },

    /// Post created on the server; triggers a resync.
    Created { post: Post },
    CreateFailed { error: String },

    /// Post updated on the server; triggers a resync.
    Updated { post: Post },
    UpdateFailed { error: String },

    /// Post deleted on the server; the matching local entry is removed.
    Deleted { id: String },
    DeleteFailed { id: String, error: String },
}

/// Unified event enum for the TUI.
///
/// All inputs to the TUI are converted to this type before processing.
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation).
    Tick,

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    /// Auth form async results.
    Auth(AuthUiEvent),

    /// Board async results.
    Board(BoardUiEvent),

    /// Task lifecycle: runtime started a request.
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    /// Task lifecycle: runtime completed a request (wraps the result event).
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
