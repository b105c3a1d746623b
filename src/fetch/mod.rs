// src/fetch/mod.rs
// =============================================================================
// The HTTP GET capability used by both the crawler and the poll cycle.
//
// It sits behind a trait so the rest of the program never talks to reqwest
// directly; tests swap in an in-memory fetcher.
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::errors::FetchError;

pub use http::HttpFetcher;

/// Fetches the body of a URL as text.
///
/// Any non-2xx status must come back as `FetchError::Status`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}
