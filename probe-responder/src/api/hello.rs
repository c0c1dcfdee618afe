//! Greeting handler

/// Body of every `GET` response
pub const GREETING: &str = "Hello world\n";

/// GET /
pub async fn hello() -> &'static str {
    GREETING
}
