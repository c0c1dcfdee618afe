//! Service layer
//!
//! The poller reaches the network only through [`ProbeService`], so the
//! polling loop can be driven by scripted probes in tests.

mod probe;

pub use probe::{HttpProbeService, ProbeService};
