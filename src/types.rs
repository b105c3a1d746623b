// src/types.rs
// =============================================================================
// Identifiers shared by the crawler, the snapshot store and the poll cycle.
//
// - Site: a configured base URL, stored without a trailing slash
// - FilePath: a normalized path relative to a Site ("" is the site root)
// - SnapshotKey: (Site, FilePath), one monitored resource
// =============================================================================

use std::fmt;

use url::Url;

use crate::errors::ConfigError;

/// A monitored website. Identity is the normalized URL string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site(String);

impl Site {
    /// Validates `raw` as an absolute http(s) URL and strips trailing slashes,
    /// so "https://a.com/docs/" and "https://a.com/docs" are the same site.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let parsed = Url::parse(trimmed)
            .map_err(|e| ConfigError::Invalid(format!("invalid site URL '{}': {}", raw, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::Invalid(format!(
                "site URL '{}' must use http or https",
                raw
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::Invalid(format!("site URL '{}' has no host", raw)));
        }

        Ok(Site(trimmed.trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL of `path` on this site.
    pub fn url_for(&self, path: &FilePath) -> String {
        if path.is_root() {
            self.0.clone()
        } else {
            format!("{}/{}", self.0, path.as_str())
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A path relative to a site, already normalized by the link resolver:
/// no leading slash, no empty or "." segments, no fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePath(String);

impl FilePath {
    pub fn root() -> Self {
        FilePath(String::new())
    }

    /// Joins already-clean segments. Callers outside `crawl::resolve` should
    /// go through `resolve` so the normalization rules stay in one place.
    pub(crate) fn from_segments(segments: &[&str]) -> Self {
        FilePath(segments.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One monitored resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey {
    pub site: Site,
    pub path: FilePath,
}

impl SnapshotKey {
    pub fn new(site: Site, path: FilePath) -> Self {
        Self { site, path }
    }

    pub fn url(&self) -> String {
        self.site.url_for(&self.path)
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.site, self.path)
    }
}
