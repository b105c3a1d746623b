// src/crawl/mod.rs
// =============================================================================
// This module discovers which files a site exposes.
//
// Submodules:
// - links: pulls raw hrefs out of an HTML page
// - resolve: classifies an href as Internal (crawl it) or External (monitor it)
// - site: walks a site from its root page with a visited set
// =============================================================================

mod links;
mod resolve;
mod site;

pub use site::SiteCrawler;
