//! Full-screen TUI for the corkboard client.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use cork_client::{ApiClient, Config, SessionCheck};
pub use features::{auth, board, editor};
pub use runtime::TuiRuntime;

/// Runs the interactive board.
///
/// The session guard runs before anything touches the network: without a
/// stored credential the TUI starts on the login screen and makes no calls.
pub async fn run_board(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Board mode requires a terminal.\n\
             Use `cork posts list` for non-interactive access."
        );
    }

    let base_url = config.resolve_base_url()?;
    let check = SessionCheck::from_store()?;

    let mut runtime = TuiRuntime::new(ApiClient::new(base_url), check)?;
    runtime.run()
}
