//! In-flight exchanges
//!
//! An [`Exchange`] owns the response of a request whose headers have arrived.
//! Draining it consumes the handle, so the response is released exactly once
//! whether the body read succeeds or fails.

use tracing::trace;

use crate::error::Result;

/// Outcome of a fully drained exchange
///
/// Nothing here feeds back into polling decisions; it only exists so callers
/// can log what they threw away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReply {
    /// HTTP status code of the response
    pub status: u16,
    /// Number of body bytes read and discarded
    pub discarded: u64,
}

/// A request whose response headers have been received
#[derive(Debug)]
pub struct Exchange {
    response: reqwest::Response,
}

impl Exchange {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        Self { response }
    }

    /// HTTP status code of the response
    pub fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    /// Reads the whole body chunk by chunk and discards it
    ///
    /// The body is never buffered as a whole, so large responses cost no
    /// more memory than a single chunk.
    pub async fn drain(mut self) -> Result<ProbeReply> {
        let status = self.status();
        let mut discarded = 0u64;

        while let Some(chunk) = self.response.chunk().await? {
            discarded += chunk.len() as u64;
        }

        trace!("Drained {} body bytes (status {})", discarded, status);

        Ok(ProbeReply { status, discarded })
    }
}
