//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events. Applications embedding the store
//! call [`init_tracing`] once at start-up to see them.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "TODO_STORE_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "todo_store=info";

/// Builds a filter from a directive, falling back to [`DEFAULT_FILTER`]
/// when the directive is absent, blank, or does not parse.
#[must_use]
pub fn filter_from_directive(directive: Option<&str>) -> EnvFilter {
    directive
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a formatting subscriber filtered by [`LOG_ENV_VAR`].
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_tracing() -> bool {
    let directive = std::env::var(LOG_ENV_VAR).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter_from_directive(directive.as_deref()))
        .try_init()
        .is_ok()
}
