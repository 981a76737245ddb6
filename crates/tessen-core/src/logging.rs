//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

use crate::error::{CoreError, CoreResult};

/// Handle used to swap the active log filter once settings are loaded.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// ## Summary
/// Installs the global tracing subscriber with a reloadable filter.
///
/// ## Errors
/// Returns `CoreError::LoggingError` if the initial filter is invalid or a
/// global subscriber is already installed.
pub fn init_tracing(initial_level: &str) -> CoreResult<FilterHandle> {
    let filter = EnvFilter::try_new(initial_level)
        .map_err(|e| CoreError::LoggingError(format!("invalid filter {initial_level:?}: {e}")))?;
    let (filter_layer, filter_handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| CoreError::LoggingError(e.to_string()))?;

    Ok(filter_handle)
}

/// ## Summary
/// Replaces the active filter with `level`, keeping the old one when `level`
/// does not parse.
pub fn apply_level(handle: &FilterHandle, level: &str) {
    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %level, "Invalid log level in config, keeping current filter");
    }
}
