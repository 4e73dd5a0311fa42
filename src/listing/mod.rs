//! Article list and pagination discovery.
//!
//! Every anchor is scored twice: as an entry of an article list and as a
//! link to another page of that list. List candidates are grouped by the
//! shape of their URL ([`sampler`]), and the winning group is chosen from
//! the best-scored and the largest groups ([`cluster`]).

pub mod classifier;
pub mod cluster;
pub mod sampler;

use serde::{Deserialize, Serialize};

use crate::dom::{self, Document};
use crate::options::Options;
use crate::patterns::KeywordPatterns;

pub use cluster::{Cluster, ClusterChoice, ClusterSet};
pub use sampler::shape_key;

/// One link of the discovered article list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// The href as found in the document, fragment removed.
    pub url: String,
    /// Longest line of the anchor text seen for this URL.
    pub title: String,
    /// Best relevance score seen for this URL.
    pub score: i32,
}

/// Output of [`classify_links`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResult {
    /// Article links of the winning cluster, in document order.
    pub items: Vec<ListItem>,
    /// Pagination URLs, deduplicated in document order.
    pub pages: Vec<String>,
}

/// Find the article list and pagination links of a page.
///
/// Reads the tree without modifying it. Run it before content purification,
/// which removes `<nav>` and friends from the whole document.
#[must_use]
pub fn classify_links(doc: &Document, options: &Options) -> ListingResult {
    let patterns = KeywordPatterns::from_options(options);
    let mut clusters = ClusterSet::new();
    let mut pages: Vec<String> = Vec::new();

    for anchor in dom::elements_by_tag(doc, "a") {
        let Some(href) = dom::get_attribute(&anchor, "href") else {
            continue;
        };
        let Some(url) = classifier::normalize_href(&href) else {
            continue;
        };
        let text = dom::text_content(&anchor);
        let Some(title) = classifier::anchor_title(&text) else {
            continue;
        };

        let page_score = classifier::pagination_score(&anchor, &url, &text);
        if classifier::is_pagination(page_score, &url) {
            pages.push(url.clone());
        }

        let score = classifier::relevance_score(&anchor, &url, &patterns);
        if score < classifier::MIN_RELEVANCE {
            continue;
        }

        let shape = shape_key(&url);
        log::trace!("list candidate {url} score {score} shape {shape}");
        clusters.add(shape, url, score, title);
    }

    let items = clusters
        .select()
        .map(|(_, urls)| {
            urls.into_iter()
                .filter_map(|url| {
                    let title = clusters.title(&url)?.to_string();
                    let score = clusters.score(&url).unwrap_or_default();
                    Some(ListItem { url, title, score })
                })
                .collect()
        })
        .unwrap_or_default();

    ListingResult {
        items,
        pages: cluster::dedup(pages),
    }
}
