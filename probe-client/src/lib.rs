//! Probe HTTP Client
//!
//! The request/response primitives behind the probe: issue a plain `GET`
//! against a fixed target, then read and discard whatever comes back.
//!
//! # Example
//!
//! ```no_run
//! use probe_client::ProbeClient;
//!
//! #[tokio::main]
//! async fn main() -> probe_client::Result<()> {
//!     let client = ProbeClient::new("http://localhost:5000/")?;
//!
//!     let reply = client.probe().await?;
//!     println!("status {}, discarded {} bytes", reply.status, reply.discarded);
//!     Ok(())
//! }
//! ```

pub mod error;
mod exchange;

pub use error::{ProbeError, Result};
pub use exchange::{Exchange, ProbeReply};

use reqwest::{Client, ClientBuilder};

/// HTTP client bound to a single probe target
#[derive(Debug, Clone)]
pub struct ProbeClient {
    /// URL every request is sent to (e.g., "http://localhost:5000/")
    target_url: String,
    /// HTTP client instance
    client: Client,
}

impl ProbeClient {
    /// Create a new probe client
    ///
    /// No request timeout, default headers, plain HTTP allowed, and no
    /// proxy: requests always go straight to the target.
    ///
    /// # Example
    /// ```
    /// use probe_client::ProbeClient;
    ///
    /// let client = ProbeClient::new("http://localhost:5000/").unwrap();
    /// assert_eq!(client.target_url(), "http://localhost:5000/");
    /// ```
    pub fn new(target_url: impl Into<String>) -> Result<Self> {
        Self::from_builder(target_url, Client::builder())
    }

    /// Create a new probe client from a preconfigured reqwest builder
    ///
    /// Any proxy configured on `builder`, explicitly or through the
    /// `HTTP_PROXY` family of environment variables, is discarded.
    pub fn from_builder(target_url: impl Into<String>, builder: ClientBuilder) -> Result<Self> {
        let client = builder.no_proxy().build()?;
        Ok(Self::with_client(target_url, client))
    }

    /// Create a new probe client with a custom HTTP client
    ///
    /// # Arguments
    /// * `target_url` - The URL to probe
    /// * `client` - A configured reqwest Client
    pub fn with_client(target_url: impl Into<String>, client: Client) -> Self {
        Self {
            target_url: target_url.into(),
            client,
        }
    }

    /// Get the URL this client probes
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// Issue a `GET` to the target and wait for the response headers
    ///
    /// The status code is not checked: any response the server manages to
    /// send counts as a completed exchange.
    pub async fn get(&self) -> Result<Exchange> {
        let response = self.client.get(&self.target_url).send().await?;
        Ok(Exchange::new(response))
    }

    /// Run one full exchange: send the request, then drain the body
    pub async fn probe(&self) -> Result<ProbeReply> {
        self.get().await?.drain().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use reqwest::Proxy;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves `app` on an ephemeral local port and returns its root URL
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    /// Router answering every request with an empty 200 and counting hits
    fn counting_app(hits: Arc<AtomicUsize>) -> Router {
        Router::new().fallback(move || {
            let hits = Arc::clone(&hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                ""
            }
        })
    }

    /// Returns a URL on a local port nothing is listening on
    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/", addr)
    }

    #[test]
    fn test_client_creation() {
        let client = ProbeClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.target_url(), "http://localhost:5000/");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = ProbeClient::with_client("http://localhost:5000/", http_client);
        assert_eq!(client.target_url(), "http://localhost:5000/");
    }

    #[tokio::test]
    async fn test_probe_empty_body() {
        let url = serve(Router::new().route("/", get(|| async { "" }))).await;

        let reply = ProbeClient::new(url).unwrap().probe().await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.discarded, 0);
    }

    #[tokio::test]
    async fn test_probe_large_body_is_fully_drained() {
        let body = "x".repeat(4 * 1024 * 1024);
        let len = body.len() as u64;
        let url = serve(Router::new().route("/", get(move || async move { body }))).await;

        let reply = ProbeClient::new(url).unwrap().probe().await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.discarded, len);
    }

    #[tokio::test]
    async fn test_probe_ignores_error_status() {
        let app = Router::new().route(
            "/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let url = serve(app).await;

        let reply = ProbeClient::new(url).unwrap().probe().await.unwrap();
        assert_eq!(reply.status, 503);
        assert_eq!(reply.discarded, 4);
    }

    #[tokio::test]
    async fn test_get_exposes_status_before_drain() {
        let url = serve(Router::new().route("/", get(|| async { "hello" }))).await;

        let exchange = ProbeClient::new(url).unwrap().get().await.unwrap();
        assert_eq!(exchange.status(), 200);
        assert_eq!(exchange.drain().await.unwrap().discarded, 5);
    }

    #[tokio::test]
    async fn test_requests_bypass_configured_proxy() {
        let target_hits = Arc::new(AtomicUsize::new(0));
        let proxy_hits = Arc::new(AtomicUsize::new(0));
        let target = serve(counting_app(Arc::clone(&target_hits))).await;
        let proxy = serve(counting_app(Arc::clone(&proxy_hits))).await;

        // Same target through "localhost", the way the runner addresses it
        let target = target.replace("127.0.0.1", "localhost");
        let builder = Client::builder().proxy(Proxy::all(&proxy).unwrap());

        let client = ProbeClient::from_builder(target, builder).unwrap();
        client.probe().await.unwrap();

        assert_eq!(target_hits.load(Ordering::SeqCst), 1);
        assert_eq!(proxy_hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_probe_connection_refused_is_transport_error() {
        let url = closed_port_url();

        let err = ProbeClient::new(url).unwrap().probe().await.unwrap_err();
        assert!(matches!(err, ProbeError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_refused_connection_description_names_the_cause() {
        let url = closed_port_url();

        let err = ProbeClient::new(url.clone()).unwrap().probe().await.unwrap_err();
        let description = err.describe();
        assert!(description.contains(&url), "{description}");
        assert!(
            description.to_lowercase().contains("connection refused"),
            "{description}"
        );
        assert!(description.len() > err.to_string().len());
    }
}
