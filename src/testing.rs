// src/testing.rs
// =============================================================================
// In-memory stand-ins for the network, used by unit tests.
//
// - FakeFetcher: a URL -> body table that tests can edit between cycles;
//   URLs missing from the table answer HTTP 404. Every request is recorded.
// - RecordingNotifier: remembers (subject, body) pairs, or fails every send.
// =============================================================================

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{FetchError, NotifyError};
use crate::fetch::Fetcher;
use crate::notify::Notifier;
use crate::types::{FilePath, Site, SnapshotKey};

/// Builds a key the way the crawler would for `path` found on the site root.
pub fn key(site: &str, path: &str) -> SnapshotKey {
    let path = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>();
    SnapshotKey::new(Site::parse(site).unwrap(), FilePath::from_segments(&path))
}

#[derive(Default)]
pub struct FakeFetcher {
    pages: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, url: &str, body: &str) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
    }

    pub fn remove(&self, url: &str) {
        self.pages.lock().unwrap().remove(url);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        self.pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<(String, String)>>,
    attempts: Mutex<usize>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        *self.attempts.lock().unwrap() += 1;

        if self.fail {
            return Err(NotifyError::Transport("connection refused".to_string()));
        }

        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}
