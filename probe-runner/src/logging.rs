//! Logging setup
//!
//! Everything goes to stderr through a `RUST_LOG`-driven filter, except the
//! terminal error line: it is emitted under its own target, and that target
//! is always enabled at `error` whatever the environment asks for.

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Target of the single line reported when polling ends on an error
pub const DIAGNOSTIC_TARGET: &str = "probe_diagnostic";

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_DIRECTIVES: &str = "probe_runner=warn";

/// Installs the global subscriber
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_DIRECTIVES.into());

    tracing_subscriber::registry()
        .with(with_diagnostics(filter)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init()?;

    Ok(())
}

/// Extends `filter` so the diagnostic line can never be filtered out
pub fn with_diagnostics(filter: EnvFilter) -> Result<EnvFilter> {
    Ok(filter.add_directive(format!("{DIAGNOSTIC_TARGET}=error").parse()?))
}
