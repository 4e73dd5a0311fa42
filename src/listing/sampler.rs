//! URL shape keys.
//!
//! A shape key reduces a URL to its structure: host, an optional namespace
//! segment, one token per remaining path segment (`number` or `string`) and
//! the file extension. Links to sibling articles share a key even when their
//! ids differ, which is what the list classifier clusters on.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use url::Url;

use crate::url_utils::normalize_domain;

/// Placeholder base used to parse relative links. Its host never appears in
/// a key.
static RELATIVE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://relative.invalid/").expect("RELATIVE_BASE url"));

/// Compute the shape key of a URL.
///
/// # Examples
///
/// ```
/// use article_sieve::listing::shape_key;
///
/// assert_eq!(
///     shape_key("/blog/2023/05/10.html"),
///     shape_key("/blog/2023/06/2.html"),
/// );
/// assert_ne!(shape_key("/blog/2023/05/10.html"), shape_key("/blog/about.html"));
/// ```
#[must_use]
pub fn shape_key(raw: &str) -> String {
    let (host, path) = host_and_path(raw.trim());
    let (stem, extension) = split_extension(path.trim_matches('/'));

    let segments: Vec<&str> = stem.split('/').filter(|s| !s.is_empty()).collect();
    let (prefix, rest) = if segments.len() > 2 {
        (Some(segments[0]), &segments[1..])
    } else {
        (None, &segments[..])
    };

    let mut parts: Vec<&str> = vec![host.as_str()];
    parts.extend(prefix);
    parts.extend(rest.iter().map(|s| segment_token(s)));

    let mut key = parts.join("/");
    key.push_str(extension);
    key
}

/// Path of a URL, relative links included, percent-escapes decoded.
///
/// Host, query and fragment are dropped.
#[must_use]
pub fn url_path(raw: &str) -> String {
    let (_, path) = host_and_path(raw.trim());
    match urlencoding::decode(&path) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => path,
    }
}

fn host_and_path(raw: &str) -> (String, String) {
    match Url::parse(raw) {
        Ok(url) => (
            url.host_str().map(normalize_domain).unwrap_or_default(),
            url.path().to_string(),
        ),
        Err(url::ParseError::RelativeUrlWithoutBase) => match RELATIVE_BASE.join(raw) {
            Ok(url) => {
                // protocol-relative links carry their own host
                let host = url
                    .host_str()
                    .filter(|h| *h != "relative.invalid")
                    .map(normalize_domain)
                    .unwrap_or_default();
                (host, url.path().to_string())
            }
            Err(_) => (String::new(), strip_query(raw).to_string()),
        },
        Err(_) => (String::new(), strip_query(raw).to_string()),
    }
}

fn strip_query(raw: &str) -> &str {
    raw.split(['?', '#']).next().unwrap_or(raw)
}

/// Split `.ext` off the last path segment.
fn split_extension(path: &str) -> (&str, &str) {
    let last_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[last_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let at = last_start + dot;
            let ext = &path[at..];
            if ext.len() > 1 && ext[1..].chars().all(|c| c.is_ascii_alphanumeric()) {
                (&path[..at], ext)
            } else {
                (path, "")
            }
        }
        _ => (path, ""),
    }
}

fn segment_token(segment: &str) -> &'static str {
    let is_positive_integer = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && segment.bytes().any(|b| b != b'0');
    if is_positive_integer {
        "number"
    } else {
        "string"
    }
}
