//! Probe Runner
//!
//! A liveness probe that keeps hitting a local HTTP endpoint.
//!
//! Architecture:
//! - Configuration: built-in target and delay, validated at startup
//! - Services: one complete HTTP exchange per call, body discarded
//! - Scheduler: the poll/wait/repeat loop
//!
//! The runner issues one request at a time, waits a short fixed delay after
//! every completed exchange, and exits after reporting the first transport
//! error.

mod config;
mod logging;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::scheduler::Poller;
use crate::service::{HttpProbeService, ProbeService};
use probe_client::ProbeClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging; diagnostics go to stderr
    logging::init().context("Failed to initialize logging")?;

    info!("Starting probe runner");

    let config = Config::default();
    config
        .validate()
        .context("Invalid built-in configuration")?;

    let client = ProbeClient::new(config.target_url.clone())
        .context("Failed to build HTTP client")?;
    let probe: Arc<dyn ProbeService> = Arc::new(HttpProbeService::new(client));

    let mut poller = Poller::new(config, probe);

    // A transport error is the normal way out: it has already been reported
    // by the poller, and the process exits successfully
    if let Err(e) = poller.run().await {
        debug!("Poller stopped in state {:?}: {}", poller.state(), e);
    }
    info!("Completed {} poll cycle(s)", poller.cycles_completed());

    Ok(())
}
