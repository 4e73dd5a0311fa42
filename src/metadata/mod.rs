//! Metadata extraction module.
//!
//! Page-level scalars that sit next to the main content: title, meta
//! description, logo and publish date.

pub mod dom_extraction;
pub mod meta_tags;

use crate::dom::Document;

use crate::result::Metadata;
use crate::url_utils;
use crate::Options;

pub use dom_extraction::{extract_date, extract_title, parse_date};
pub use meta_tags::{extract_description, extract_logo, get_meta, DEFAULT_LOGO};

/// Extract all metadata from a document.
///
/// `source` is the decoded page before parsing; the publish date is searched
/// there so that dates inside scripts and comments are found too. Run this
/// before content purification, which removes scripts from the tree.
#[must_use]
pub fn extract_metadata(doc: &Document, source: &str, opts: &Options) -> Metadata {
    let url = opts.base_url.as_deref().map(str::trim).filter(|u| !u.is_empty());
    let hostname = url
        .and_then(|u| url::Url::parse(u).ok())
        .and_then(|u| u.host_str().map(url_utils::normalize_domain));

    Metadata {
        title: extract_title(doc),
        description: extract_description(doc),
        logo: extract_logo(doc),
        publish_date: extract_date(source),
        url: url.map(str::to_string),
        hostname,
    }
}
