// src/fetch/http.rs
// =============================================================================
// reqwest-backed Fetcher.
//
// Key functionality:
// - One shared Client for every request (connection pooling)
// - A per-request timeout so a hung server can't stall the whole cycle
// - Non-2xx responses become FetchError::Status
// - reqwest errors are sorted into timeout / connect / other
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::trace;

use super::Fetcher;
use crate::errors::FetchError;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("site-sentinel/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        trace!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| categorize_error(url, e))
    }
}

// Sorts reqwest errors into the kinds we log differently
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure / host unreachable
// - Too many redirects, TLS problems, a body that isn't valid text, etc.
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            message: error.to_string(),
        }
    } else if let Some(status) = error.status() {
        FetchError::Status {
            url,
            status: status.as_u16(),
        }
    } else {
        FetchError::Request {
            url,
            message: error.to_string(),
        }
    }
}
