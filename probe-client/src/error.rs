//! Error types for the probe client

use std::error::Error as StdError;
use thiserror::Error;

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Errors that can occur while exchanging with the target
///
/// Every failure below the application (refused connection, reset, DNS,
/// malformed response, body read failure) collapses into one category.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The HTTP exchange failed at the transport level
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ProbeError {
    /// Describe the error together with every underlying cause
    ///
    /// The top-level message of a transport error only names the URL; the
    /// actual reason (refused, reset, unresolvable host) lives further down
    /// the source chain. Causes are joined with `": "`, outermost first.
    pub fn describe(&self) -> String {
        let mut description = self.to_string();
        let mut source = self.source();

        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }

        description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_describe_starts_with_top_level_message() {
        // A relative URL fails inside the client, without a deeper cause
        let err: ProbeError = reqwest::Client::new()
            .get("not a url")
            .send()
            .await
            .unwrap_err()
            .into();

        assert!(err.describe().starts_with(&err.to_string()));
    }
}
