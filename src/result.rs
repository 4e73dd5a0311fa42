//! Result types for extraction output.
//!
//! This module defines the structured output of one extraction: the main
//! content, the article list, the pagination links and page metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::listing::ListItem;

/// Result of extracting one HTML page.
///
/// Every part is best-effort. A page with no recognizable content still
/// yields its list, pagination and metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Purified main content as HTML, links resolved when a base URL is set.
    pub content_html: Option<String>,

    /// Main content as plain text.
    pub content_text: String,

    /// `src` of every image in the main content, in document order.
    pub images: Vec<String>,

    /// Links of the discovered article list.
    pub list: Vec<ListItem>,

    /// Links to other pages of the same list.
    pub pages: Vec<String>,

    /// Page-level metadata.
    pub metadata: Metadata,

    /// Warnings encountered during extraction.
    ///
    /// Non-fatal issues such as a page without a content container.
    pub warnings: Vec<String>,
}

/// Metadata extracted from an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Text of the first `<title>`, trimmed.
    pub title: Option<String>,

    /// `content` of the description meta tag.
    pub description: Option<String>,

    /// Favicon or logo URL. `/favicon.ico` when the page names none.
    pub logo: String,

    /// First date-like string in the page source.
    pub publish_date: Option<PublishDate>,

    /// Page URL, when one was supplied as the base URL.
    pub url: Option<String>,

    /// Host of [`url`](Self::url), normalized.
    pub hostname: Option<String>,
}

/// A publish date as found in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishDate {
    /// Matched text with `年`/`月` replaced by `-`.
    pub raw: String,

    /// Calendar date, when the raw text is a valid one.
    pub date: Option<NaiveDate>,
}
