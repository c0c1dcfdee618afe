//! Target poller
//!
//! Requests the target, throws the response away, waits, and does it again.
//! The first transport error is reported once and ends the loop for good.

use probe_client::{ProbeError, ProbeReply};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::{self, Instant};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::logging::DIAGNOSTIC_TARGET;
use crate::service::ProbeService;

/// Where the poller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    /// No request in flight: before the first cycle, or waiting out the delay
    Idle,
    /// A request has been issued and its exchange has not finished
    InFlight,
    /// A transport error ended polling
    Terminated,
}

/// Why the poller stopped
#[derive(Debug, Error)]
pub enum PollerError {
    /// The exchange failed; polling is over
    #[error(transparent)]
    Transport(#[from] ProbeError),

    /// The poller already terminated and cannot be restarted
    #[error("poller has terminated")]
    Terminated,
}

/// One outstanding request
struct PollCycle {
    number: u64,
    started_at: Instant,
}

/// Poller that keeps exactly one exchange with the target alive at a time
pub struct Poller {
    config: Config,
    probe: Arc<dyn ProbeService>,
    state: PollerState,
    cycles_completed: u64,
}

impl Poller {
    /// Creates a new idle poller
    pub fn new(config: Config, probe: Arc<dyn ProbeService>) -> Self {
        Self {
            config,
            probe,
            state: PollerState::Idle,
            cycles_completed: 0,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PollerState {
        self.state
    }

    /// Number of exchanges that finished successfully
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// Starts the polling loop
    ///
    /// Only returns once a transport error has terminated the poller.
    pub async fn run(&mut self) -> Result<(), PollerError> {
        info!(
            "Starting poller (target: {}, delay: {:?})",
            self.probe.target(),
            self.config.cycle_delay
        );

        loop {
            self.start().await?;
            time::sleep(self.config.cycle_delay).await;
        }
    }

    /// Runs a single poll cycle
    ///
    /// Issues the request and waits for the exchange to finish. On success
    /// the body has been discarded and the poller is idle again; on failure
    /// the error has been reported and the poller is terminated.
    pub async fn start(&mut self) -> Result<ProbeReply, PollerError> {
        if self.state == PollerState::Terminated {
            return Err(PollerError::Terminated);
        }

        let cycle = PollCycle {
            number: self.cycles_completed + 1,
            started_at: Instant::now(),
        };
        self.state = PollerState::InFlight;

        match self.probe.probe().await {
            Ok(reply) => {
                self.read_reply(cycle, reply);
                Ok(reply)
            }
            Err(e) => Err(self.fail(cycle, e)),
        }
    }

    fn read_reply(&mut self, cycle: PollCycle, reply: ProbeReply) {
        debug!(
            "Cycle {} completed in {:?} (status {}, discarded {} bytes)",
            cycle.number,
            cycle.started_at.elapsed(),
            reply.status,
            reply.discarded
        );

        self.cycles_completed += 1;
        self.state = PollerState::Idle;
    }

    fn fail(&mut self, cycle: PollCycle, e: ProbeError) -> PollerError {
        // The exchange was dropped when the probe returned, so nothing is
        // left subscribed to it by the time the error is reported
        error!(target: DIAGNOSTIC_TARGET, "Error: {}", e.describe());

        self.state = PollerState::Terminated;
        info!(
            "Poller terminated in cycle {} after {} completed cycle(s)",
            cycle.number, self.cycles_completed
        );

        PollerError::Transport(e)
    }
}
