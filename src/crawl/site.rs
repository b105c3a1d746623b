// src/crawl/site.rs
// =============================================================================
// Enumerates every monitorable file reachable from a site's root page.
//
// How it works:
// 1. Start with the root path ("") on a stack
// 2. Pop a path; skip it if already visited, otherwise mark it visited
// 3. Fetch the page and extract its hrefs
// 4. Internal links ("/about") go back on the stack to be crawled
// 5. External links ("report.txt") are collected as files to monitor
// 6. Repeat until the stack is empty
//
// The visited set is what guarantees termination: a site where /p1 links to
// /p2 and /p2 links back to /p1 expands each page exactly once.
//
// Failures:
// - root page unreachable -> CrawlError, the site yields nothing this cycle
// - any other page unreachable -> logged, only that page's links are lost
// =============================================================================

use std::collections::HashSet;

use tracing::{debug, warn};

use super::links::extract_hrefs;
use super::resolve::{is_followable, resolve, Link};
use crate::errors::CrawlError;
use crate::fetch::Fetcher;
use crate::types::{FilePath, Site};

pub struct SiteCrawler<'a> {
    fetcher: &'a dyn Fetcher,
}

impl<'a> SiteCrawler<'a> {
    pub fn new(fetcher: &'a dyn Fetcher) -> Self {
        Self { fetcher }
    }

    // Returns the discovered files in discovery order, each exactly once
    pub async fn crawl(&self, site: &Site) -> Result<Vec<FilePath>, CrawlError> {
        // Depth-first worklist. Children are pushed in reverse so they pop
        // in the order they appear on the page.
        let mut stack = vec![FilePath::root()];
        let mut visited: HashSet<FilePath> = HashSet::new();

        let mut files = Vec::new();
        let mut seen_files: HashSet<FilePath> = HashSet::new();

        while let Some(page) = stack.pop() {
            if !visited.insert(page.clone()) {
                continue;
            }

            let url = site.url_for(&page);
            debug!(site = %site, page = %page, "crawling page");

            let html = match self.fetcher.get(&url).await {
                Ok(html) => html,
                Err(source) if page.is_root() => {
                    return Err(CrawlError::RootUnavailable {
                        site: site.as_str().to_string(),
                        source,
                    });
                }
                Err(e) => {
                    warn!(site = %site, page = %page, error = %e, "skipping unreachable page");
                    continue;
                }
            };

            let mut children = Vec::new();
            for href in extract_hrefs(&html) {
                if !is_followable(&href) {
                    continue;
                }

                match resolve(&page, &href) {
                    Link::Internal(path) => {
                        if !visited.contains(&path) {
                            children.push(path);
                        }
                    }
                    Link::External(path) => {
                        if seen_files.insert(path.clone()) {
                            files.push(path);
                        }
                    }
                }
            }

            stack.extend(children.into_iter().rev());
        }

        debug!(site = %site, pages = visited.len(), files = files.len(), "crawl finished");
        Ok(files)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a stack instead of recursion?
//    - A recursive async fn needs boxing, and a deep site could blow the stack
//    - Vec::push / Vec::pop gives the same depth-first order with no risk
//
// 2. Why two HashSets?
//    - `visited` holds pages we already expanded (termination guarantee)
//    - `seen_files` keeps the result free of duplicates while `files` (a Vec)
//      keeps discovery order, so every cycle walks files in the same order
//
// 3. What is `Err(source) if page.is_root()`?
//    - A match guard: the arm only matches when the condition is true
//    - Root failures end the crawl, every other failure falls to the next arm
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeFetcher;

    fn site() -> Site {
        Site::parse("https://example.com").unwrap()
    }

    fn paths(files: &[FilePath]) -> Vec<&str> {
        files.iter().map(FilePath::as_str).collect()
    }

    #[tokio::test]
    async fn test_crawl_collects_nested_files() {
        let fetcher = FakeFetcher::new();
        fetcher.set("https://example.com", r#"<a href="/about">About</a><a href="report.txt">R</a>"#);
        fetcher.set("https://example.com/about", r#"<a href="data.txt">Data</a>"#);

        let files = SiteCrawler::new(&fetcher).crawl(&site()).await.unwrap();

        assert_eq!(paths(&files), vec!["report.txt", "about/data.txt"]);
    }

    #[tokio::test]
    async fn test_crawl_terminates_on_cycles() {
        let fetcher = FakeFetcher::new();
        fetcher.set("https://example.com", r#"<a href="/p1">1</a>"#);
        fetcher.set(
            "https://example.com/p1",
            r#"<a href="/p2">2</a><a href="one.txt">f</a>"#,
        );
        fetcher.set(
            "https://example.com/p2",
            r#"<a href="/p1">1</a><a href="/">home</a><a href="two.txt">f</a>"#,
        );

        let files = SiteCrawler::new(&fetcher).crawl(&site()).await.unwrap();

        assert_eq!(paths(&files), vec!["p1/one.txt", "p2/two.txt"]);
        // root, p1, p2 -- each fetched once
        assert_eq!(fetcher.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_crawl_dedupes_files() {
        let fetcher = FakeFetcher::new();
        fetcher.set(
            "https://example.com",
            r#"<a href="a.txt">1</a><a href="./a.txt">2</a><a href="a.txt#top">3</a>"#,
        );

        let files = SiteCrawler::new(&fetcher).crawl(&site()).await.unwrap();

        assert_eq!(paths(&files), vec!["a.txt"]);
    }

    #[tokio::test]
    async fn test_crawl_skips_non_path_links() {
        let fetcher = FakeFetcher::new();
        fetcher.set(
            "https://example.com",
            r##"<a href="mailto:x@y.z">m</a><a href="#top">t</a><a href="https://other.com/x">o</a><a href="keep.txt">k</a>"##,
        );

        let files = SiteCrawler::new(&fetcher).crawl(&site()).await.unwrap();

        assert_eq!(paths(&files), vec!["keep.txt"]);
    }

    #[tokio::test]
    async fn test_root_failure_is_crawl_error() {
        let fetcher = FakeFetcher::new();

        let err = SiteCrawler::new(&fetcher).crawl(&site()).await.unwrap_err();

        let CrawlError::RootUnavailable { site, .. } = err;
        assert_eq!(site, "https://example.com");
    }

    #[tokio::test]
    async fn test_files_under_page_with_query_resolve_to_page_path() {
        let fetcher = FakeFetcher::new();
        fetcher.set("https://example.com", r#"<a href="/list?page=2">Page 2</a>"#);
        fetcher.set("https://example.com/list?page=2", r#"<a href="data.txt">Data</a>"#);

        let files = SiteCrawler::new(&fetcher).crawl(&site()).await.unwrap();

        let urls: Vec<String> = files.iter().map(|f| site().url_for(f)).collect();
        assert_eq!(urls, vec!["https://example.com/list/data.txt"]);
    }

    #[tokio::test]
    async fn test_sub_page_failure_keeps_other_branches() {
        let fetcher = FakeFetcher::new();
        fetcher.set(
            "https://example.com",
            r#"<a href="/broken">b</a><a href="/ok">o</a><a href="top.txt">t</a>"#,
        );
        fetcher.set("https://example.com/ok", r#"<a href="file.txt">f</a>"#);

        let files = SiteCrawler::new(&fetcher).crawl(&site()).await.unwrap();

        assert_eq!(paths(&files), vec!["top.txt", "ok/file.txt"]);
    }
}
