//! Settings loading with environment overrides.

use courier_domain::TransportSettings;
use courier_infrastructure::{SettingsError, SettingsRepository};

/// Overrides the request timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "COURIER_TIMEOUT_MS";

/// Overrides the default `User-Agent`.
pub const USER_AGENT_ENV: &str = "COURIER_USER_AGENT";

/// Points at an alternate settings file.
pub const SETTINGS_ENV: &str = "COURIER_SETTINGS";

/// Loads settings from disk and applies environment overrides.
///
/// `lookup` reads one environment variable; the binary passes
/// `std::env::var`.
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be read or parsed.
pub async fn load_settings(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<TransportSettings, SettingsError> {
    let repository = match lookup(SETTINGS_ENV).filter(|path| !path.trim().is_empty()) {
        Some(path) => SettingsRepository::at(path),
        None => SettingsRepository::new(),
    };

    let mut settings = repository.load().await?;
    apply_env_overrides(&mut settings, &lookup);
    Ok(settings)
}

/// Applies `COURIER_TIMEOUT_MS` and `COURIER_USER_AGENT`.
///
/// Malformed values are logged and ignored.
pub fn apply_env_overrides(settings: &mut TransportSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(raw) = lookup(TIMEOUT_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(timeout_ms) if timeout_ms > 0 => settings.timeout_ms = timeout_ms,
            _ => tracing::warn!(value = %raw, "ignoring malformed {TIMEOUT_ENV}"),
        }
    }

    if let Some(user_agent) = lookup(USER_AGENT_ENV) {
        if user_agent.trim().is_empty() {
            tracing::warn!("ignoring empty {USER_AGENT_ENV}");
        } else {
            settings.user_agent = user_agent;
        }
    }
}
