// src/errors.rs
// =============================================================================
// Typed errors for everything that can go wrong while monitoring.
//
// Each kind is caught at its own isolation boundary:
// - FetchError: one file (or one crawled page) is skipped this cycle
// - CrawlError: one site contributes no files this cycle
// - NotifyError: one notification is lost, the snapshot is still updated
// - ConfigError: fatal, only raised at startup
//
// None of the first three ever stops the scheduler loop.
// =============================================================================

use thiserror::Error;

/// Failure to GET a URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("could not connect to {url}: {message}")]
    Connect { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
}

/// Failure to enumerate a site's files.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrawlError {
    #[error("root page of {site} is unavailable: {source}")]
    RootUnavailable {
        site: String,
        #[source]
        source: FetchError,
    },
}

/// Failure to deliver a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("invalid email address: {0}")]
    Address(String),

    #[error("could not build message: {0}")]
    Message(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Failure to load the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message() {
        let err = FetchError::Status {
            url: "https://example.com/a.txt".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "https://example.com/a.txt returned HTTP 404");
    }

    #[test]
    fn test_crawl_error_keeps_source() {
        use std::error::Error as _;

        let err = CrawlError::RootUnavailable {
            site: "https://example.com".to_string(),
            source: FetchError::Timeout {
                url: "https://example.com".to_string(),
            },
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("timed out"));
    }
}
