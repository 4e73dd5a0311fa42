//! Meta Tag Extraction
//!
//! Lookups over `<meta>` and `<link>` tags in the document head.

use crate::dom::{self, Document};

/// Logo used when the page declares none.
pub const DEFAULT_LOGO: &str = "/favicon.ico";

/// `content` of the first `<meta>` whose `name` or `property` equals `name`.
///
/// The comparison is exact. The first matching tag wins even when its
/// `content` is empty.
#[must_use]
pub fn get_meta(doc: &Document, name: &str) -> Option<String> {
    dom::elements_by_tag(doc, "meta")
        .into_iter()
        .find(|meta| {
            dom::get_attribute(meta, "name").as_deref() == Some(name)
                || dom::get_attribute(meta, "property").as_deref() == Some(name)
        })
        .map(|meta| dom::get_attribute(&meta, "content").unwrap_or_default())
}

/// Meta description, when present and non-blank.
#[must_use]
pub fn extract_description(doc: &Document) -> Option<String> {
    get_meta(doc, "description")
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Favicon or logo of the page.
///
/// Tries, in order: the first `<link>` whose `rel` mentions `icon`
/// (`icon`, `shortcut icon`, `apple-touch-icon`), then the first `<meta>`
/// whose `property` mentions `icon` or `image` (`og:image`), then
/// [`DEFAULT_LOGO`]. A matching tag with an empty value falls through to
/// the next source.
#[must_use]
pub fn extract_logo(doc: &Document) -> String {
    let from_link = dom::elements_by_tag(doc, "link")
        .into_iter()
        .find(|link| {
            dom::get_attribute(link, "rel")
                .is_some_and(|rel| rel.to_ascii_lowercase().contains("icon"))
        })
        .and_then(|link| dom::get_attribute(&link, "href"));

    let from_meta = || {
        dom::elements_by_tag(doc, "meta")
            .into_iter()
            .find(|meta| {
                dom::get_attribute(meta, "property").is_some_and(|p| {
                    let p = p.to_ascii_lowercase();
                    p.contains("icon") || p.contains("image")
                })
            })
            .and_then(|meta| dom::get_attribute(&meta, "content"))
    };

    from_link
        .filter(|href| !href.trim().is_empty())
        .or_else(|| from_meta().filter(|c| !c.trim().is_empty()))
        .map_or_else(|| DEFAULT_LOGO.to_string(), |logo| logo.trim().to_string())
}
