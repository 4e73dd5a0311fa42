//! Main content extraction.
//!
//! [`scorer`] picks the element that holds the article, [`purifier`] strips
//! noise and layout from it, and [`extract_main_content`] runs both and
//! serializes the result.

pub mod purifier;
pub mod scorer;

use crate::dom::{self, Document};
use crate::options::Options;

pub use purifier::{purify, PurifyStats, IGNORE_TAGS};
pub use scorer::{find_content_root, ContentCandidate};

/// Purified main content of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainContent {
    /// Serialized outer HTML of the content root.
    pub html: String,
    /// Plain text of the content root.
    pub text: String,
}

/// Find, purify and serialize the main content.
///
/// This mutates `doc`: ignored tags are removed from the whole document.
/// Run anything that needs the untouched tree first.
#[must_use]
pub fn extract_main_content(doc: &Document, options: &Options) -> Option<MainContent> {
    let candidate = find_content_root(doc, options)?;
    purify(doc, &candidate.node);

    Some(MainContent {
        html: dom::outer_html(&candidate.node).to_string(),
        text: plain_text(&dom::text_content(&candidate.node), options.text_limit),
    })
}

/// Collapse source indentation out of extracted text.
///
/// Double spaces and non-breaking spaces are dropped; with `limit` the text
/// is cut to that many characters and trimmed.
#[must_use]
pub fn plain_text(raw: &str, limit: Option<usize>) -> String {
    let text = raw.replace("  ", "").replace('\u{a0}', "");
    match limit {
        Some(limit) => text.chars().take(limit).collect::<String>().trim().to_string(),
        None => text,
    }
}
