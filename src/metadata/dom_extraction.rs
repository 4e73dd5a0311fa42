//! DOM-based Metadata Extraction
//!
//! Title from the document tree and publish date from the raw source.

use chrono::NaiveDate;

use crate::dom::{self, Document};
use crate::patterns::PUBLISH_DATE;
use crate::result::PublishDate;

// ============================================================
// TITLE EXTRACTION
// ============================================================

/// Text of the first `<title>`, trimmed. `None` when absent or blank.
#[must_use]
pub fn extract_title(doc: &Document) -> Option<String> {
    dom::elements_by_tag(doc, "title")
        .first()
        .map(|title| dom::text_content(title).trim().to_string())
        .filter(|title| !title.is_empty())
}

// ============================================================
// DATE EXTRACTION
// ============================================================

/// First date-like string in the raw page source.
///
/// Matches year/month/day separated by `/`, `-`, whitespace or the CJK
/// `年`/`月` markers, which are rewritten to `-`.
#[must_use]
pub fn extract_date(source: &str) -> Option<PublishDate> {
    let raw = PUBLISH_DATE
        .captures(source)?
        .get(1)?
        .as_str()
        .replace(['年', '月'], "-");
    let date = parse_date(&raw);
    Some(PublishDate { raw, date })
}

/// Parse a loose `y-m-d` string. Two-digit years are taken as 20xx.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let mut numbers = raw
        .split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty());

    let year_part = numbers.next()?;
    let mut year: i32 = year_part.parse().ok()?;
    if year_part.len() == 2 {
        year += 2000;
    }
    let month: u32 = numbers.next()?.parse().ok()?;
    let day: u32 = numbers.next()?.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
