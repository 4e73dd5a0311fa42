//! Compiled regex patterns for scoring and link rewriting.
//!
//! Static patterns are compiled once on first use with `LazyLock`.
//! Patterns derived from the configurable content vocabulary are compiled
//! per extraction in [`KeywordPatterns`].

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::options::Options;

// =============================================================================
// List Classifier Patterns
// =============================================================================

/// Class names of anchors (or their wrappers) that look like list entries.
pub static LIST_ITEM_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(article|title|content|list|cover|pic|img)").expect("LIST_ITEM_CLASS regex")
});

/// Short-link article paths such as `/p/8f2a1c`.
pub static SHORT_POST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/p/.+").expect("SHORT_POST_PATH regex"));

/// Static-page extensions: `.htm`, `.html`, `.shtml`, `.xhtml` and friends.
pub static STATIC_PAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.[sx]?html?$").expect("STATIC_PAGE_EXTENSION regex")
});

/// Page numbers in paths (`/page/3`) or queries (`?page=3`).
pub static PAGE_NUMBER_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)page/\d+|page=\d+").expect("PAGE_NUMBER_URL regex")
});

/// "Next page" anchor text, English and Chinese.
pub static NEXT_PAGE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)next\s*page|下一页").expect("NEXT_PAGE_TEXT regex")
});

/// Class names used by pagination widgets.
pub static PAGINATION_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(page|pagination|numbers)").expect("PAGINATION_CLASS regex")
});

// =============================================================================
// Serialized Content Patterns
// =============================================================================

/// `src` value of every `<img>` tag in serialized HTML.
pub static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\s[^>]*?src="([^"]*)""#).expect("IMG_SRC regex")
});

/// `href` value of every `<a>` tag in serialized HTML.
pub static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s[^>]*?href="([^"]*)""#).expect("ANCHOR_HREF regex")
});

// =============================================================================
// Metadata Patterns
// =============================================================================

/// Loose year/month/day date, including `2021年10月21` style dates.
pub static PUBLISH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2,4}[/年\s-]+\d{1,2}[/月\s-]+\d{1,2})").expect("PUBLISH_DATE regex")
});

/// Patterns built from [`Options::content_keywords`].
#[derive(Debug, Clone, Default)]
pub struct KeywordPatterns {
    /// Matches a container's concatenated class and id.
    pub container: Option<Regex>,
    /// Matches article-like URL paths (`detail/...`, `post-...`, `news_...`).
    pub url_path: Option<Regex>,
}

impl KeywordPatterns {
    /// Compile the vocabulary patterns for one extraction.
    ///
    /// An empty vocabulary yields patterns that never match.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let Some(alternation) = options.keyword_alternation() else {
            return Self::default();
        };

        Self {
            container: compile(&format!("(?i)({alternation})")),
            url_path: compile(&format!("(?i)({alternation})[/_-].+")),
        }
    }

    /// Whether `class_and_id` names a content container.
    #[must_use]
    pub fn is_content_container(&self, class_and_id: &str) -> bool {
        self.container
            .as_ref()
            .is_some_and(|re| re.is_match(class_and_id))
    }

    /// Whether `path` looks like an article path.
    #[must_use]
    pub fn is_content_path(&self, path: &str) -> bool {
        self.url_path.as_ref().is_some_and(|re| re.is_match(path))
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            log::warn!("content keyword pattern rejected: {err}");
            None
        }
    }
}
