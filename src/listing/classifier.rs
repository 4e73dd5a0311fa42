//! Per-anchor signals for the list classifier.
//!
//! Every anchor gets two independent scores: how much it looks like a link
//! to an article in a list, and how much it looks like a link to another
//! page of the same list.

use crate::dom::{self, NodeRef};
use crate::listing::sampler;
use crate::patterns::{
    KeywordPatterns, LIST_ITEM_CLASS, NEXT_PAGE_TEXT, PAGE_NUMBER_URL, PAGINATION_CLASS,
    SHORT_POST_PATH, STATIC_PAGE_EXTENSION,
};

/// Pagination scores above this put the URL in the pagination set.
pub const PAGINATION_THRESHOLD: i32 = 5;

/// Relevance scores below this drop the anchor from the list candidates.
pub const MIN_RELEVANCE: i32 = 1;

/// Fragment-free href with the surrounding whitespace trimmed.
///
/// Returns `None` for anchors that cannot point at another page: empty or
/// one-character hrefs once slashes are trimmed (`/`, `#top`, `/a/`), and
/// `javascript:` handlers.
#[must_use]
pub fn normalize_href(href: &str) -> Option<String> {
    let url = href.split('#').next().unwrap_or_default().trim();
    let core = url.trim_matches('/');

    if core.chars().count() < 2 || is_script_url(core) {
        return None;
    }
    Some(url.to_string())
}

fn is_script_url(url: &str) -> bool {
    url.get(..11)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("javascript:"))
}

/// Longest non-blank line of the anchor text, whitespace collapsed.
#[must_use]
pub fn anchor_title(text: &str) -> Option<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut best: Option<String> = None;
    for line in normalized.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            continue;
        }
        if best
            .as_ref()
            .is_none_or(|b| line.chars().count() > b.chars().count())
        {
            best = Some(line);
        }
    }
    best
}

/// Class names of the anchor, its parent and its grandparent, concatenated.
#[must_use]
pub fn class_hierarchy(anchor: &NodeRef) -> String {
    let mut classes = dom::class_name(anchor);
    let parent = dom::parent_element(anchor);
    if let Some(parent) = parent {
        classes.push_str(&dom::class_name(&parent));
        if let Some(grandparent) = dom::parent_element(&parent) {
            classes.push_str(&dom::class_name(&grandparent));
        }
    }
    classes
}

/// How much the anchor looks like an entry of an article list.
#[must_use]
pub fn relevance_score(anchor: &NodeRef, url: &str, patterns: &KeywordPatterns) -> i32 {
    let mut score = 0;

    if LIST_ITEM_CLASS.is_match(&class_hierarchy(anchor)) {
        score += 10;
    }
    if patterns.is_content_path(&sampler::url_path(url)) {
        score += 10;
    }
    if SHORT_POST_PATH.is_match(url) {
        score += 10;
    }
    if STATIC_PAGE_EXTENSION.is_match(url) {
        score += 5;
    }

    let parent = dom::parent_element(anchor);
    let grandparent = parent.as_ref().and_then(dom::parent_element);
    if parent.iter().chain(grandparent.iter()).any(dom::is_list_heading) {
        score += 5;
    }

    for child in dom::element_children(anchor) {
        if LIST_ITEM_CLASS.is_match(&dom::class_name(&child)) {
            score += 10;
        }
        if dom::is_list_heading(&child) {
            score += 5;
        }
    }

    score
}

/// How much the anchor looks like a link to another page of the list.
#[must_use]
pub fn pagination_score(anchor: &NodeRef, url: &str, text: &str) -> i32 {
    let mut score = 0;

    if PAGE_NUMBER_URL.is_match(url) {
        score += 10;
    }
    if NEXT_PAGE_TEXT.is_match(text) {
        score += 10;
    }
    if PAGINATION_CLASS.is_match(&class_hierarchy(anchor)) {
        score += 10;
    }
    if !has_digit(url) {
        score -= 10;
    }

    score
}

/// Whether a pagination score and URL qualify for the pagination set.
///
/// Page links always carry a page number, so digit-free URLs are refused
/// whatever their score.
#[must_use]
pub fn is_pagination(score: i32, url: &str) -> bool {
    score > PAGINATION_THRESHOLD && has_digit(url)
}

fn has_digit(url: &str) -> bool {
    url.bytes().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn first_anchor(doc: &dom::Document) -> NodeRef<'_> {
        dom::elements_by_tag(doc, "a")[0]
    }

    #[test]
    fn normalize_href_strips_fragment_and_whitespace() {
        assert_eq!(normalize_href("  /news/1.html#comments "), Some("/news/1.html".into()));
        assert_eq!(normalize_href("/detail/abc/"), Some("/detail/abc/".into()));
    }

    #[test]
    fn normalize_href_rejects_short_and_script_urls() {
        assert_eq!(normalize_href(""), None);
        assert_eq!(normalize_href("/"), None);
        assert_eq!(normalize_href("#top"), None);
        assert_eq!(normalize_href("/a/"), None);
        assert_eq!(normalize_href("javascript:;"), None);
        assert_eq!(normalize_href("JavaScript:void(0)"), None);
    }

    #[test]
    fn anchor_title_takes_longest_line() {
        let text = "\r\n  12  \r\n  A much longer headline  \n short ";
        assert_eq!(anchor_title(text), Some("A much longer headline".into()));
    }

    #[test]
    fn anchor_title_first_wins_on_equal_length() {
        assert_eq!(anchor_title("abc\nxyz"), Some("abc".into()));
    }

    #[test]
    fn anchor_title_none_when_blank() {
        assert_eq!(anchor_title(" \n\t\u{a0}\n"), None);
    }

    #[test]
    fn relevance_counts_every_signal() {
        let doc = dom::parse(
            r#"<div class="news-list"><h3><a href="/p/post-42.html"><img class="cover"><h4>t</h4></a></h3></div>"#,
        );
        let patterns = KeywordPatterns::from_options(&Options::default());
        let anchor = first_anchor(&doc);
        // class hierarchy (h3 has none, div is grandparent) +10, keyword path +10,
        // /p/ +10, .html +5, heading parent +5, child cover +10, child heading +5
        assert_eq!(relevance_score(&anchor, "/p/post-42.html", &patterns), 55);
    }

    #[test]
    fn relevance_zero_for_plain_link() {
        let doc = dom::parse(r#"<div><a href="/test/63a38da17fa4">x</a></div>"#);
        let patterns = KeywordPatterns::from_options(&Options::default());
        assert_eq!(relevance_score(&first_anchor(&doc), "/test/63a38da17fa4", &patterns), 0);
    }

    #[test]
    fn keyword_in_host_is_not_a_content_path() {
        let doc = dom::parse(r#"<div><a href="https://news-today.com/about">About us</a></div>"#);
        let patterns = KeywordPatterns::from_options(&Options::default());
        let anchor = first_anchor(&doc);
        assert_eq!(relevance_score(&anchor, "https://news-today.com/about", &patterns), 0);
        assert_eq!(relevance_score(&anchor, "/about?from=news-today", &patterns), 0);
        assert_eq!(relevance_score(&anchor, "https://example.com/news/2024", &patterns), 10);
    }

    #[test]
    fn pagination_signals() {
        let doc = dom::parse(r#"<div class="pagination"><a href="/list/page/3">Next page</a></div>"#);
        assert_eq!(pagination_score(&first_anchor(&doc), "/list/page/3", "Next page"), 30);
    }

    #[test]
    fn pagination_penalizes_digit_free_urls() {
        let doc = dom::parse(r#"<div class="pagination"><a href="/list/next">下一页</a></div>"#);
        let score = pagination_score(&first_anchor(&doc), "/list/next", "下一页");
        assert_eq!(score, 10);
        assert!(!is_pagination(score, "/list/next"));
    }

    #[test]
    fn pagination_threshold_is_strict() {
        assert!(!is_pagination(5, "/page/2"));
        assert!(is_pagination(10, "/page/2"));
    }
}
