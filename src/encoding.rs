//! Character encoding detection and transcoding.
//!
//! Pages are decoded with the charset the caller names, else the one the
//! page declares in its `<meta>` tags, else UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Look up an encoding by its WHATWG label (`gbk`, `Shift_JIS`, `latin1`).
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownCharset(label.to_string()))
}

/// Charset label declared in the first 1024 bytes of `html`, if any.
///
/// `<meta http-equiv="Content-Type">` is consulted before `<meta charset>`
/// so that the `charset=` inside its `content` value is read as a whole.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    [&*CONTENT_TYPE_CHARSET_RE, &*CHARSET_META_RE]
        .into_iter()
        .find_map(|re| re.captures(&head).map(|c| c[1].to_string()))
}

/// Pick the encoding for `html`.
///
/// An explicit `charset` wins and must be a known label. Otherwise the
/// page's own declaration is used when recognized, falling back to UTF-8.
pub fn detect_encoding(html: &[u8], charset: Option<&str>) -> Result<&'static Encoding> {
    if let Some(label) = charset {
        return encoding_for_label(label);
    }

    let declared = declared_charset(html);
    match declared.as_deref().map(encoding_for_label) {
        Some(Ok(encoding)) => Ok(encoding),
        Some(Err(err)) => {
            log::debug!("ignoring page charset: {err}");
            Ok(UTF_8)
        }
        None => Ok(UTF_8),
    }
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD.
///
/// # Examples
///
/// ```
/// use article_sieve::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// let text = transcode_to_utf8(html, Some("latin1")).unwrap_or_default();
/// assert!(text.contains("Café"));
/// ```
pub fn transcode_to_utf8(html: &[u8], charset: Option<&str>) -> Result<String> {
    let encoding = detect_encoding(html, charset)?;

    if encoding == UTF_8 {
        return Ok(String::from_utf8_lossy(html).into_owned());
    }

    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("malformed {} sequences replaced", used.name());
    }
    Ok(decoded.into_owned())
}
