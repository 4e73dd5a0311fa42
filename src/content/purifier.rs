//! Content purification.
//!
//! Removes tags that never carry article text, anywhere in the document,
//! then drops every styled element below the content root. Styled elements
//! are layout (share bars, ad slots, widget wrappers); the plain markup that
//! remains is the article. Removal is two-phase: candidates are collected
//! during the walk and detached afterwards.

use crate::dom::{self, Document, NodeRef};

/// Tags removed from the whole document before the content is serialized.
pub const IGNORE_TAGS: &[&str] = &[
    "style", "form", "script", "button", "input", "textarea", "noscript", "select", "option",
    "object", "applet", "basefont", "bgsound", "blink", "canvas", "command", "menu", "nav",
    "datalist", "embed", "frame", "frameset", "keygen", "label", "marquee",
];

/// Counts of what a purification pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurifyStats {
    /// Elements removed because their tag is in [`IGNORE_TAGS`].
    pub ignored_tags: usize,
    /// Styled elements (or their single-child wrappers) removed below the root.
    pub layout_elements: usize,
}

impl PurifyStats {
    /// Total number of detached nodes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.ignored_tags + self.layout_elements
    }
}

/// Clean `root` in place.
///
/// `root` keeps its position but loses its own `class` and `id`. It is
/// never detached: an ignored tag that is `root` or wraps it (a page-wide
/// `<form>`, say) stays, while ignored tags inside and beside it go.
pub fn purify(doc: &Document, root: &NodeRef) -> PurifyStats {
    let mut stats = PurifyStats::default();

    dom::clear_class_and_id(root);

    for tag in IGNORE_TAGS {
        for node in dom::elements_by_tag(doc, tag) {
            if dom::is_ancestor_or_self(&node, root) {
                continue;
            }
            dom::detach(&node);
            stats.ignored_tags += 1;
        }
    }

    let styled: Vec<NodeRef> = dom::descendant_elements(root)
        .into_iter()
        .filter(dom::has_class_or_id)
        .collect();

    for node in styled {
        let target = match dom::parent_element(&node) {
            Some(parent) if parent.id != root.id && dom::child_node_count(&parent) == 1 => parent,
            _ => node,
        };
        dom::detach(&target);
        stats.layout_elements += 1;
    }

    log::debug!(
        "purified content: {} ignored tags, {} layout elements",
        stats.ignored_tags,
        stats.layout_elements
    );

    stats
}
