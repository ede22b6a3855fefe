//! Courier - command-line request composer
//!
//! Loads a request draft file, replays it into the editor, sends it once
//! and reports the response panel text.

pub mod config;
pub mod run;

pub use config::{SETTINGS_ENV, TIMEOUT_ENV, USER_AGENT_ENV, apply_env_overrides, load_settings};
pub use run::{AppError, RunOutcome, run};
