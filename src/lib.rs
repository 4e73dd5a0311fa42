//! # article-sieve
//!
//! Heuristic extraction of the article body, the article list and the
//! pagination links of an HTML page.
//!
//! The page is parsed once. The main content is the container whose
//! paragraph-like children and class/id vocabulary score highest; it is
//! stripped of noise tags and styled layout wrappers before serialization.
//! Independently, every anchor is scored as a list entry and as a page link,
//! and list entries are clustered by the shape of their URL.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_sieve::{extract_with_options, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><div class="content"><p>Main content here.</p><img src="a.png"></div></body></html>"#;
//!
//! let options = Options {
//!     base_url: Some("https://example.com/news/1.html".to_string()),
//!     ..Options::default()
//! };
//! let result = extract_with_options(html, &options)?;
//! assert_eq!(result.metadata.title.as_deref(), Some("My Article"));
//! assert!(result.content_text.contains("Main content here."));
//! assert_eq!(result.images, vec!["https://example.com/news/a.png"]);
//! # Ok::<(), article_sieve::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Content Extraction**: scored container selection and purification
//! - **Article Lists**: URL-shape clustering of article links
//! - **Pagination**: page-number and "next page" link detection
//! - **Link Resolution**: relative `src`/`href` rewritten against a base URL
//! - **Metadata**: title, description, logo and publish date

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Main content scoring and purification.
pub mod content;

/// Article list and pagination discovery.
pub mod listing;

/// Metadata extraction (title, meta tags, logo, publish date).
pub mod metadata;

/// Base URL resolution and content link rewriting.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use listing::{ListItem, ListingResult};
pub use options::{Options, DEFAULT_CONTENT_KEYWORDS};
pub use patterns::KeywordPatterns;
pub use result::{ExtractResult, Metadata, PublishDate};
pub use url_utils::UrlResolver;

/// Extracts content, list, pagination and metadata using default options.
///
/// # Example
///
/// ```rust
/// use article_sieve::extract;
///
/// let html = "<html><body><article>Content</article></body></html>";
/// let result = extract(html)?;
/// assert_eq!(result.content_text, "Content");
/// # Ok::<(), article_sieve::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts content, list, pagination and metadata with custom options.
///
/// Returns an error only when `options.base_url` is malformed.
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts from raw bytes, detecting the character encoding.
///
/// The encoding is read from `<meta charset>` or
/// `<meta http-equiv="Content-Type">` in the first 1024 bytes and defaults
/// to UTF-8. Invalid sequences are replaced with U+FFFD.
///
/// # Example
///
/// ```rust
/// use article_sieve::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article>Caf\xE9</article></body></html>";
/// let result = extract_bytes(html)?;
/// assert!(result.content_text.contains("Café"));
/// # Ok::<(), article_sieve::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts from raw bytes with custom options.
///
/// [`Options::charset`] overrides the page's own declaration and fails with
/// [`Error::UnknownCharset`] when the label is not recognized.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html, options.charset.as_deref())?;
    extract_with_options(&html_str, options)
}
