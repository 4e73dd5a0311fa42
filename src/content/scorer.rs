//! Main content scoring.
//!
//! One pass over every element. `<article>` scores itself; paragraph-like
//! children score their parent container, which gains a lot when its
//! class/id names a content container and loses a little when it does not.
//! Scores live in a side table keyed by [`NodeId`] that is dropped when the
//! pass returns.

use std::collections::HashMap;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::options::Options;
use crate::patterns::KeywordPatterns;

/// Bonus for every `<article>` element.
const ARTICLE_BONUS: i32 = 20;

/// Unstyled child inside a recognized content container.
const PLAIN_CHILD_BONUS: i32 = 30;

/// Styled child inside a recognized content container.
const STYLED_CHILD_BONUS: i32 = 1;

/// Child inside a container that is not recognized.
const UNKNOWN_CONTAINER_PENALTY: i32 = -5;

/// Tags whose parent is scored as a content container.
const CONTENT_CHILD_TAGS: &[&str] = &["p", "pre", "ul", "img", "blockquote"];

/// The element chosen as main content, with its final score.
///
/// `score` is `0` when the node came from the `<body>` fallback.
#[derive(Debug, Clone, Copy)]
pub struct ContentCandidate<'a> {
    /// The content root.
    pub node: NodeRef<'a>,
    /// Accumulated score at the end of the pass.
    pub score: i32,
}

/// Find the element most likely to hold the main article.
///
/// Returns `None` when nothing scores above zero, unless
/// [`Options::force_body`] is set, in which case `<body>` is returned.
#[must_use]
pub fn find_content_root<'a>(doc: &'a Document, options: &Options) -> Option<ContentCandidate<'a>> {
    let patterns = KeywordPatterns::from_options(options);
    let mut scores: HashMap<NodeId, i32> = HashMap::new();
    let mut best: Option<ContentCandidate<'a>> = None;

    for node in dom::elements(doc) {
        let Some((target, score)) = score_element(&node, &scores, &patterns) else {
            continue;
        };

        scores.insert(target.id, score);

        if score > best.map_or(0, |b| b.score) {
            best = Some(ContentCandidate { node: target, score });
        }
    }

    if let Some(candidate) = best {
        log::debug!(
            "content root <{}> scored {}",
            dom::tag_name(&candidate.node).unwrap_or_default(),
            candidate.score
        );
        return Some(candidate);
    }

    if options.force_body {
        log::debug!("no content container scored; falling back to <body>");
        return dom::body(doc).map(|node| ContentCandidate { node, score: 0 });
    }

    None
}

/// Score contributed by one element: the node that receives it and its new
/// total. `None` for tags that do not take part.
fn score_element<'a>(
    node: &NodeRef<'a>,
    scores: &HashMap<NodeId, i32>,
    patterns: &KeywordPatterns,
) -> Option<(NodeRef<'a>, i32)> {
    let tag = dom::tag_name(node)?;
    let prior = |n: &NodeRef<'a>| scores.get(&n.id).copied().unwrap_or(0);

    if tag == "article" {
        return Some((*node, prior(node) + ARTICLE_BONUS));
    }

    if !CONTENT_CHILD_TAGS.contains(&tag.as_str()) {
        return None;
    }

    let parent = dom::parent_element(node)?;
    let delta = if patterns.is_content_container(&dom::class_and_id(&parent)) {
        if dom::has_class_or_id(node) {
            STYLED_CHILD_BONUS
        } else {
            PLAIN_CHILD_BONUS
        }
    } else {
        UNKNOWN_CONTAINER_PENALTY
    };

    Some((parent, prior(&parent) + delta))
}
