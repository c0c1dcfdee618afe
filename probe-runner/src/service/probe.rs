//! Probe service
//!
//! One call is one complete exchange with the target: request sent,
//! response body read and thrown away.

use async_trait::async_trait;
use probe_client::{ProbeClient, ProbeReply};

/// Service trait for running a single exchange against the target
#[async_trait]
pub trait ProbeService: Send + Sync {
    /// URL the exchanges are addressed to
    fn target(&self) -> &str;

    /// Runs one exchange to completion
    ///
    /// # Returns
    /// What was discarded on success, or the transport error that ended
    /// the exchange
    async fn probe(&self) -> probe_client::Result<ProbeReply>;
}

/// ProbeService backed by a real HTTP client
pub struct HttpProbeService {
    client: ProbeClient,
}

impl HttpProbeService {
    /// Creates a new HTTP probe service
    pub fn new(client: ProbeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProbeService for HttpProbeService {
    fn target(&self) -> &str {
        self.client.target_url()
    }

    async fn probe(&self) -> probe_client::Result<ProbeReply> {
        self.client.probe().await
    }
}
