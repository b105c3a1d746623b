// src/crawl/resolve.rs
// =============================================================================
// Turns an href found on a page into a site-relative FilePath.
//
// Rules:
// - "/about"    -> Internal("about"): rooted at the site, crawled for more links
// - "data.txt"  -> External("<page>/data.txt"): a leaf file to monitor
// - repeated slashes, "." and ".." are normalized away, "#fragment" dropped
// - "?query" is kept, it can select different content
//
// Hrefs carrying a scheme (mailto:, https:, ...) or pointing only at a
// fragment are not paths; `is_followable` filters them before resolving.
// =============================================================================

use crate::types::FilePath;

/// Classification of one discovered href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Site-rooted page that is itself crawled.
    Internal(FilePath),
    /// Leaf resource that is fetched and monitored.
    External(FilePath),
}

/// Resolves `href` as found on the page at `base`.
pub fn resolve(base: &FilePath, href: &str) -> Link {
    let href = strip_fragment(href.trim());

    if href.starts_with('/') {
        Link::Internal(normalize("", href))
    } else {
        Link::External(normalize(base.as_str(), href))
    }
}

/// Whether `href` names a path on the same site at all.
pub fn is_followable(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    !has_scheme(href)
}

fn strip_fragment(href: &str) -> &str {
    match href.find('#') {
        Some(idx) => &href[..idx],
        None => href,
    }
}

// Queries are split off first so a '/' inside one is not read as a segment.
// Only the href's own query survives; the base page's query says nothing
// about where its relative links point.
fn normalize(base: &str, href: &str) -> FilePath {
    let base = split_query(base).0;
    let (path, query) = split_query(href);

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                // Never climbs above the site root.
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    match query {
        Some(query) if query.len() > 1 => {
            let joined = format!("{}{}", segments.join("/"), query);
            FilePath::from_segments(&[joined.as_str()])
        }
        _ => FilePath::from_segments(&segments),
    }
}

fn split_query(s: &str) -> (&str, Option<&str>) {
    match s.find('?') {
        Some(idx) => (&s[..idx], Some(&s[idx..])),
        None => (s, None),
    }
}

// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":".
// Protocol-relative "//host/..." also points off-site.
fn has_scheme(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }

    let Some(colon) = href.find(':') else {
        return false;
    };
    let scheme = &href[..colon];

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
