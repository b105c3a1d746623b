// src/crawl/links.rs
// =============================================================================
// This module pulls hyperlinks out of HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup still parses
//
// Only the raw href values are returned. Deciding what they point at is the
// resolver's job (see resolve.rs), so nothing is filtered or rewritten here.
// =============================================================================

use scraper::{Html, Selector};

// Extracts every `<a href="...">` value from an HTML document
//
// Returns the hrefs in document order. Duplicates are kept: a page that
// links to the same file twice yields it twice, and the crawler dedupes.
//
// Example:
//   html = "<a href='/about'>About</a><a href='report.txt'>Report</a>"
//   result = ["/about", "report.txt"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // "a[href]" means "all <a> tags that have an href attribute"
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
