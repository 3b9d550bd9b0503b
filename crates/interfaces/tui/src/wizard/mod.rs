//! Gift wizard: collects a recipient profile and shows the suggestions.

mod prompt;
mod state;
mod ui;

use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing::info;

use giftwise_config::AppConfig;

pub use prompt::{print_suggestions, run_prompt_session};
pub use state::{Answered, Profile, Step, Style, Wizard};

/// Runs the full-screen wizard when attached to a terminal, otherwise the
/// line prompt on stdin/stdout.
pub fn run_gift_wizard(config: &AppConfig) -> Result<Wizard> {
    let wizard = if io::stdin().is_terminal() && io::stdout().is_terminal() {
        info!("starting terminal wizard");
        ui::run_wizard_tui(config)?
    } else {
        info!("stdin/stdout not a terminal; using line prompts");
        prompt::run_prompt_session(io::stdin().lock(), io::stdout().lock())?
    };

    info!(step = ?wizard.step(), "wizard finished");
    Ok(wizard)
}
