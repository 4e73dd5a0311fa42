//! Extraction pipeline.
//!
//! One document is parsed per call. Everything that reads the untouched
//! tree (metadata, listing) runs before content purification, which removes
//! noise tags from the whole document.

use crate::content;
use crate::dom;
use crate::error::Result;
use crate::listing::{self, ListingResult};
use crate::metadata;
use crate::options::Options;
use crate::result::ExtractResult;
use crate::url_utils::{self, UrlResolver};

/// Main entry point for extraction.
///
/// Fails only when `options.base_url` is set and malformed.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    let resolver = options
        .base_url
        .as_deref()
        .filter(|base| !base.trim().is_empty())
        .map(UrlResolver::new)
        .transpose()?;

    let document = dom::parse(html);
    let mut warnings = Vec::new();

    let metadata = metadata::extract_metadata(&document, html, options);

    let listing = if options.include_listing {
        listing::classify_links(&document, options)
    } else {
        ListingResult::default()
    };

    let (content_html, content_text, images) =
        match content::extract_main_content(&document, options) {
            Some(main) => {
                let html = match &resolver {
                    Some(resolver) => resolver.rewrite_content(&main.html),
                    None => main.html,
                };
                let images = url_utils::collect_image_sources(&html);
                (Some(html), main.text, images)
            }
            None => {
                warnings.push("no main content container found".to_string());
                (None, String::new(), Vec::new())
            }
        };

    log::debug!(
        "extracted {} content chars, {} list items, {} pages",
        content_text.chars().count(),
        listing.items.len(),
        listing.pages.len()
    );

    Ok(ExtractResult {
        content_html,
        content_text,
        images,
        list: listing.items,
        pages: listing.pages,
        metadata,
        warnings,
    })
}
