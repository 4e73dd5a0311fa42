//! URL Utility Functions
//!
//! Link resolution against a page's base URL and rewriting of the links
//! inside serialized content.

use std::collections::HashSet;

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::{ANCHOR_HREF, IMG_SRC};

/// Normalize a host for comparison: lower-cased, trailing dot and `www.`
/// removed.
///
/// # Examples
/// ```
/// use article_sieve::url_utils::normalize_domain;
///
/// assert_eq!(normalize_domain("WWW.Example.COM."), "example.com");
/// assert_eq!(normalize_domain("cdn.example.com"), "cdn.example.com");
/// ```
#[must_use]
pub fn normalize_domain(host: &str) -> String {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

/// Resolves links found on a page against the page's own URL.
///
/// Links without a host inherit the base scheme, host and port. Relative
/// paths are joined onto the directory of the base path; `../` steps walk
/// up from it.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    base: Url,
    directory: String,
}

impl UrlResolver {
    /// Build a resolver for the page at `base`.
    ///
    /// Fails when `base` is not an absolute URL with a host.
    pub fn new(base: &str) -> Result<Self> {
        let base_str = base.trim();
        let base = Url::parse(base_str).map_err(|source| Error::InvalidBaseUrl {
            url: base_str.to_string(),
            source,
        })?;
        if base.host_str().is_none() {
            return Err(Error::BaseUrlWithoutHost(base_str.to_string()));
        }

        let directory = base_directory(base.path());
        Ok(Self { base, directory })
    }

    /// The parsed base URL.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Directory of the base path, e.g. `/a/b` for `/a/b/c.html`.
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Resolve one link to an absolute URL.
    ///
    /// Links that carry a scheme but no host (`data:`, `mailto:`,
    /// `javascript:`, `tel:`) are returned unchanged.
    #[must_use]
    pub fn resolve(&self, link: &str) -> String {
        let link = link.trim();

        let parts = match Url::parse(link) {
            Ok(url) => match LinkParts::from_absolute(&url) {
                Some(parts) => parts,
                None => return link.to_string(),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) if link.starts_with("//") => {
                let with_scheme = format!("{}:{link}", self.base.scheme());
                match Url::parse(&with_scheme)
                    .ok()
                    .as_ref()
                    .and_then(LinkParts::from_absolute)
                {
                    Some(parts) => parts,
                    None => return link.to_string(),
                }
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => self.relative_parts(link),
            Err(err) => {
                log::debug!("unresolvable link {link:?}: {err}");
                return link.to_string();
            }
        };

        parts.assemble()
    }

    /// Rewrite every `<img src>` and then every `<a href>` in `content` to
    /// its resolved form.
    ///
    /// Each distinct raw value is resolved once and replaced everywhere it
    /// occurs in the string, including outside of attributes.
    #[must_use]
    pub fn rewrite_content(&self, content: &str) -> String {
        let mut content = content.to_string();

        for pattern in [&*IMG_SRC, &*ANCHOR_HREF] {
            let raws: Vec<String> = {
                let mut seen = HashSet::new();
                pattern
                    .captures_iter(&content)
                    .map(|caps| caps[1].to_string())
                    .filter(|raw| !raw.is_empty() && seen.insert(raw.clone()))
                    .collect()
            };

            for raw in raws {
                let resolved = self.resolve(&raw);
                if resolved != raw {
                    content = content.replace(&raw, &resolved);
                }
            }
        }

        content
    }

    fn relative_parts(&self, link: &str) -> LinkParts {
        let (rest, fragment) = split_off(link, '#');
        let (path, query) = split_off(rest, '?');

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else if path.starts_with('.') {
            let mut directory = self.directory.clone();
            for _ in 0..path.matches("../").count() {
                directory = parent_directory(&directory);
            }
            let rest = path.replace("../", "").replace("./", "");
            join_directory(&directory, &rest)
        } else {
            join_directory(&self.directory, path)
        };

        LinkParts {
            scheme: self.base.scheme().to_string(),
            host: self.base.host_str().unwrap_or_default().to_string(),
            port: self.base.port(),
            path,
            query: query.map(str::to_string),
            fragment: fragment.map(str::to_string),
        }
    }
}

/// Components of a link before reassembly.
#[derive(Debug)]
struct LinkParts {
    scheme: String,
    host: String,
    port: Option<u16>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl LinkParts {
    fn from_absolute(url: &Url) -> Option<Self> {
        let host = url.host_str()?;
        Some(Self {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            port: url.port(),
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
        })
    }

    fn assemble(&self) -> String {
        let mut url = format!("{}://{}", self.scheme, self.host);
        if let Some(port) = self.port {
            url.push(':');
            url.push_str(&port.to_string());
        }
        url.push_str(&urlencoding::encode(&self.path));
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        if let Some(fragment) = self.fragment.as_deref().filter(|f| !f.is_empty()) {
            url.push('#');
            url.push_str(fragment);
        }

        let decoded = urlencoding::decode(&url).map(std::borrow::Cow::into_owned);
        decoded.unwrap_or(url)
    }
}

fn split_off(s: &str, sep: char) -> (&str, Option<&str>) {
    match s.split_once(sep) {
        Some((head, tail)) => (head, Some(tail)),
        None => (s, None),
    }
}

/// `src` of every `<img>` in serialized HTML, in document order.
#[must_use]
pub fn collect_image_sources(html: &str) -> Vec<String> {
    IMG_SRC
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Directory part of a URL path.
///
/// A trailing slash means the path already names a directory.
fn base_directory(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }
    if let Some(dir) = path.strip_suffix('/') {
        return dir.to_string();
    }
    parent_directory(path)
}

fn parent_directory(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(i) => trimmed[..i].to_string(),
    }
}

fn join_directory(directory: &str, rest: &str) -> String {
    if directory.ends_with('/') {
        format!("{directory}{rest}")
    } else {
        format!("{directory}/{rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(base: &str) -> UrlResolver {
        UrlResolver::new(base).unwrap_or_else(|e| panic!("base {base}: {e}"))
    }

    #[test]
    fn parent_relative_link() {
        let r = resolver("http://x.com/a/b/c.html");
        assert_eq!(r.directory(), "/a/b");
        assert_eq!(r.resolve("../img/a.png"), "http://x.com/a/img/a.png");
    }

    #[test]
    fn absolute_link_unchanged() {
        let r = resolver("http://x.com/a/b/c.html");
        assert_eq!(r.resolve("https://cdn.com/x.png"), "https://cdn.com/x.png");
    }

    #[test]
    fn root_and_sibling_links() {
        let r = resolver("https://example.com/news/2024/story.html");
        assert_eq!(r.resolve("/img/a.png"), "https://example.com/img/a.png");
        assert_eq!(r.resolve("a.png"), "https://example.com/news/2024/a.png");
        assert_eq!(r.resolve("./a.png"), "https://example.com/news/2024/a.png");
        assert_eq!(r.resolve("../../a.png"), "https://example.com/a.png");
    }

    #[test]
    fn walking_up_stops_at_root() {
        let r = resolver("http://x.com/a/c.html");
        assert_eq!(r.resolve("../../../a.png"), "http://x.com/a.png");
    }

    #[test]
    fn directory_base_keeps_last_segment() {
        let r = resolver("http://x.com/a/b/");
        assert_eq!(r.resolve("c.png"), "http://x.com/a/b/c.png");
    }

    #[test]
    fn port_query_and_fragment_survive() {
        let r = resolver("http://x.com:8080/a/b.html");
        assert_eq!(r.resolve("c.html?id=2#top"), "http://x.com:8080/a/c.html?id=2#top");
    }

    #[test]
    fn protocol_relative_takes_base_scheme() {
        let r = resolver("https://x.com/a/b.html");
        assert_eq!(r.resolve("//cdn.com/x.png"), "https://cdn.com/x.png");
    }

    #[test]
    fn opaque_schemes_pass_through() {
        let r = resolver("https://x.com/");
        for link in ["data:image/png;base64,AAAA", "mailto:a@x.com", "javascript:;", "tel:123"] {
            assert_eq!(r.resolve(link), link);
        }
    }

    #[test]
    fn existing_percent_escapes_are_kept() {
        let r = resolver("https://x.com/");
        assert_eq!(r.resolve("/a%20b.png"), "https://x.com/a%20b.png");
        assert_eq!(r.resolve("a b.png"), "https://x.com/a b.png");
    }

    #[test]
    fn malformed_base_is_rejected() {
        assert!(matches!(
            UrlResolver::new("not a url"),
            Err(Error::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            UrlResolver::new("mailto:a@x.com"),
            Err(Error::BaseUrlWithoutHost(_))
        ));
    }

    #[test]
    fn rewrite_content_resolves_images_and_links() {
        let r = resolver("http://x.com/a/b/c.html");
        let html = r#"<div><img src="../img/a.png"><a href="d.html">d</a><a href="https://y.com/">y</a></div>"#;
        assert_eq!(
            r.rewrite_content(html),
            r#"<div><img src="http://x.com/a/img/a.png"><a href="http://x.com/a/b/d.html">d</a><a href="https://y.com/">y</a></div>"#
        );
    }

    #[test]
    fn rewrite_content_also_replaces_matching_prose() {
        // Replacement is by raw string, so identical text outside the
        // attribute is rewritten too.
        let r = resolver("http://x.com/d/p.html");
        let html = r#"<p>see a.png</p><img src="a.png">"#;
        assert_eq!(
            r.rewrite_content(html),
            r#"<p>see http://x.com/d/a.png</p><img src="http://x.com/d/a.png">"#
        );
    }

    #[test]
    fn rewrite_content_replaces_inside_earlier_resolutions() {
        // A raw link that is a substring of an already rewritten one is
        // replaced inside it as well.
        let r = resolver("http://x.com/a/b/c.html");
        assert_eq!(
            r.rewrite_content(r#"<img src="img/a.png"><img src="a.png">"#),
            r#"<img src="http://x.com/a/b/img/http://x.com/a/b/a.png"><img src="http://x.com/a/b/a.png">"#
        );
        assert_eq!(
            r.rewrite_content(r#"<a href="/">home</a>"#),
            r#"<a href="http://x.com/">home<http://x.com/a>"#
        );
    }

    #[test]
    fn image_sources_in_order() {
        let html = r#"<img src="/1.png"><p><img alt="" src="2.png"></p>"#;
        assert_eq!(collect_image_sources(html), vec!["/1.png", "2.png"]);
    }

    #[test]
    fn directory_helpers() {
        assert_eq!(base_directory(""), "/");
        assert_eq!(base_directory("/c.html"), "/");
        assert_eq!(base_directory("/a/b/c.html"), "/a/b");
        assert_eq!(parent_directory("/a"), "/");
        assert_eq!(parent_directory("/"), "/");
        assert_eq!(join_directory("/", "x"), "/x");
        assert_eq!(join_directory("/a", "x"), "/a/x");
    }
}
