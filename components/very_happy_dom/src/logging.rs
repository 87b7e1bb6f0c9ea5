//! Tracing setup for embedders that want `dom_core`/`dom_selectors`/
//! `dom_hooks`'s internal `tracing::debug!`/`tracing::warn!` calls surfaced
//! (tokenizer recovery, selector cache evictions, dispatched listener
//! panics). The DOM core never installs a subscriber itself — only a
//! binary embedding it should decide where logs go.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber that writes formatted events to
/// stderr, filtered by `RUST_LOG` (falling back to `info` when unset).
///
/// Returns `Err` (rather than panicking) if a global subscriber is
/// already installed, so embedders that call this speculatively from a
/// library entry point don't need to track whether it already ran.
pub fn init_console_logging() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
}
