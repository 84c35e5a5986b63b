//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! The runtime uses an "inbox" pattern for async event collection:
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//! - This eliminates per-operation receivers and simplifies event collection

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use cork_client::{ApiClient, Credentials, Session, SessionCheck};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskKind, TaskSeq, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick interval while requests are in flight (drives the spinner).
const BUSY_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing
/// is happening.
const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    /// Shared API client, cloned into spawned requests.
    api: Arc<ApiClient>,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    /// Task id generator for the started/completed lifecycle.
    task_seq: TaskSeq,
    /// Last time a Tick event was emitted.
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// The session guard's verdict decides the starting screen; entry
    /// effects run from `run()`.
    pub fn new(api: ApiClient, check: SessionCheck) -> Result<Self> {
        // Set up panic hook BEFORE entering the alternate screen.
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(check);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            api: Arc::new(api),
            inbox_tx,
            inbox_rx,
            task_seq: TaskSeq::default(),
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        let entry = self.state.entry_effects();
        self.execute_effects(entry);
        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick and input mark the frame dirty; inbox results do
                // too since they always change visible state.
                dirty = true;
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from all sources (inbox, terminal, tick timer).
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Faster ticks while requests are in flight keep the spinner moving.
        let tick_interval = if self.state.tui.tasks.is_any_running() {
            BUSY_POLL_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here.
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal events:
        // - If we already have events to process, do a non-blocking poll
        // - Otherwise block until the next tick is due
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    /// Executes effects returned by the reducer.
    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an API request with a uniform TaskStarted/TaskCompleted
    /// lifecycle. Nothing here de-duplicates: a second submission of the
    /// same kind runs alongside the first.
    fn spawn_task<F, Fut>(&mut self, kind: TaskKind, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let id = self.task_seq.next_id();
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        tokio::spawn(async move {
            let result = f().await;
            let _ = tx.send(UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: Box::new(result),
                },
            });
        });
    }

    /// Returns the session to attach to an authorized request.
    ///
    /// Effects that need a session are only emitted from the board, which
    /// is unreachable without one; a missing session is a dropped request.
    fn session(&self) -> Option<Session> {
        self.state.tui.session.clone()
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            // Credential persistence. Failures are logged, not fatal: the
            // in-memory session already reflects the user's intent.
            UiEffect::SaveCredentials { token } => {
                if let Err(err) = (Credentials { token }).save() {
                    tracing::warn!(error = %err, "failed to persist credentials");
                }
            }
            UiEffect::ClearCredentials => {
                if let Err(err) = Credentials::clear() {
                    tracing::warn!(error = %err, "failed to clear credentials");
                }
            }

            // Auth requests (no session required).
            UiEffect::SubmitLogin { email, password } => {
                let api = Arc::clone(&self.api);
                self.spawn_task(TaskKind::Login, move || {
                    handlers::submit_login(api, email, password)
                });
            }
            UiEffect::SubmitRegister {
                name,
                email,
                password,
            } => {
                let api = Arc::clone(&self.api);
                self.spawn_task(TaskKind::Register, move || {
                    handlers::submit_register(api, name, email, password)
                });
            }

            // Authorized requests: the explicit session travels with the task.
            UiEffect::FetchUser => {
                let Some(session) = self.session() else { return };
                let api = Arc::clone(&self.api);
                self.spawn_task(TaskKind::FetchUser, move || {
                    handlers::fetch_user(api, session)
                });
            }
            UiEffect::FetchPosts => {
                let Some(session) = self.session() else { return };
                let api = Arc::clone(&self.api);
                self.spawn_task(TaskKind::FetchPosts, move || {
                    handlers::fetch_posts(api, session)
                });
            }
            UiEffect::CreatePost { payload } => {
                let Some(session) = self.session() else { return };
                let api = Arc::clone(&self.api);
                self.spawn_task(TaskKind::CreatePost, move || {
                    handlers::create_post(api, session, payload)
                });
            }
            UiEffect::UpdatePost { id, payload } => {
                let Some(session) = self.session() else { return };
                let api = Arc::clone(&self.api);
                self.spawn_task(TaskKind::UpdatePost, move || {
                    handlers::update_post(api, session, id, payload)
                });
            }
            UiEffect::DeletePost { id } => {
                let Some(session) = self.session() else { return };
                let api = Arc::clone(&self.api);
                self.spawn_task(TaskKind::DeletePost, move || {
                    handlers::delete_post(api, session, id)
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
