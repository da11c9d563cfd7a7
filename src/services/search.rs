//! Search provider seam for TabShell.
//!
//! Results are purely advisory; the shell renders them on the internal
//! search page and navigation happens only when the user picks one.

use crate::services::router;

/// Supplies results for the internal search page.
pub trait SearchProvider {
    fn search(&self, query: &str) -> Vec<SearchResult>;
}

/// A single advisory search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Deterministic offline provider: derives five plausible results from the
/// query text without touching the network.
pub struct MockSearchProvider;

impl MockSearchProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProvider for MockSearchProvider {
    fn search(&self, query: &str) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let encoded = router::encode_query(query);
        let slug: String = query
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        vec![
            SearchResult {
                title: format!("{} - Wikipedia", query),
                url: format!("https://en.wikipedia.org/wiki/{}", encoded),
                description: format!(
                    "Learn more about {} on Wikipedia, the free encyclopedia.",
                    query
                ),
            },
            SearchResult {
                title: format!("{} - Latest News", query),
                url: format!("https://news.google.com/search?q={}", encoded),
                description: format!("Breaking news and top stories about {}.", query),
            },
            SearchResult {
                title: format!("{} - Official Site", query),
                url: format!("https://{}.org", slug),
                description: format!("The official website for {}.", query),
            },
            SearchResult {
                title: format!("{} on Twitter", query),
                url: format!("https://twitter.com/search?q={}", encoded),
                description: format!("See the latest posts and discussions about {}.", query),
            },
            SearchResult {
                title: format!("{} - Images", query),
                url: format!("https://images.google.com/search?q={}", encoded),
                description: format!("Browse image results for {}.", query),
            },
        ]
    }
}
