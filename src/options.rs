//! Configuration options for extraction.
//!
//! The `Options` struct controls which vocabulary marks a content container,
//! whether `<body>` is used when no container scores, and how links in the
//! extracted content are resolved.

/// Default vocabulary of class/id fragments that mark content containers.
pub const DEFAULT_CONTENT_KEYWORDS: &[&str] = &[
    "article", "archive", "blog", "content", "detail", "entry", "post", "news", "topic",
];

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_sieve::Options;
///
/// let options = Options {
///     force_body: true,
///     base_url: Some("https://example.com/news/index.html".to_string()),
///     ..Options::default()
/// };
/// assert!(options.include_listing);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Class/id fragments that mark a container as holding article content.
    ///
    /// Matched case-insensitively. Also used by the list classifier to
    /// recognize article-like URL paths (`/detail/...`, `/post-...`).
    ///
    /// Default: [`DEFAULT_CONTENT_KEYWORDS`]
    pub content_keywords: Vec<String>,

    /// Fall back to `<body>` when no container scores above zero.
    ///
    /// Default: `false`
    pub force_body: bool,

    /// Page URL used to make links and image sources in the content absolute.
    ///
    /// A malformed value makes extraction fail with
    /// [`Error::InvalidBaseUrl`](crate::Error::InvalidBaseUrl).
    ///
    /// Default: `None`
    pub base_url: Option<String>,

    /// Charset label overriding the one declared in the document.
    ///
    /// Only used by the byte-oriented entry points.
    ///
    /// Default: `None`
    pub charset: Option<String>,

    /// Truncate `content_text` to this many characters.
    ///
    /// Default: `None`
    pub text_limit: Option<usize>,

    /// Run the article list and pagination classifier.
    ///
    /// Default: `true`
    pub include_listing: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            content_keywords: DEFAULT_CONTENT_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
            force_body: false,
            base_url: None,
            charset: None,
            text_limit: None,
            include_listing: true,
        }
    }
}

impl Options {
    /// Build a case-insensitive alternation of the content keywords,
    /// suitable for embedding in a larger regex.
    ///
    /// Returns `None` when the vocabulary is empty.
    #[must_use]
    pub fn keyword_alternation(&self) -> Option<String> {
        let escaped: Vec<String> = self
            .content_keywords
            .iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();

        if escaped.is_empty() {
            None
        } else {
            Some(escaped.join("|"))
        }
    }
}
