//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query`'s arena tree. Nodes are addressed by
//! [`NodeId`], parents and children are indexes into the same arena, so
//! passes can key side tables by id instead of writing scratch attributes
//! onto the document.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef};
pub use tendril::StrTendril;

/// Heading tags that mark a link as a list title.
const LIST_HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5"];

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Traversal ===

/// Every element of the document in document order.
#[must_use]
pub fn elements(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.root()
        .descendants()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Every descendant element of `node` in document order, excluding `node`.
#[must_use]
pub fn descendant_elements<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Elements matching a tag name, in document order.
#[must_use]
pub fn elements_by_tag<'a>(doc: &'a Document, tag: &str) -> Vec<NodeRef<'a>> {
    doc.select(tag).nodes().to_vec()
}

/// Parent of `node` when it is an element (not the document node).
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Direct element children of `node`, skipping text and comments.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Number of child nodes of any kind, text nodes included.
#[inline]
#[must_use]
pub fn child_node_count(node: &NodeRef) -> usize {
    node.children().len()
}

/// The document's `<body>` element.
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body").nodes().first().copied()
}

// === Tag/Attribute Information ===

/// Tag name, lower-cased. `None` for text, comment and document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Whether `node` is an `h1`–`h5` heading.
#[must_use]
pub fn is_list_heading(node: &NodeRef) -> bool {
    tag_name(node).is_some_and(|t| LIST_HEADINGS.contains(&t.as_str()))
}

/// `class` attribute, empty when missing.
#[must_use]
pub fn class_name(node: &NodeRef) -> String {
    node.attr("class").map(|s| s.to_string()).unwrap_or_default()
}

/// `id` attribute, empty when missing.
#[must_use]
pub fn id(node: &NodeRef) -> String {
    node.attr("id").map(|s| s.to_string()).unwrap_or_default()
}

/// `class` followed by `id`, concatenated without separator.
#[must_use]
pub fn class_and_id(node: &NodeRef) -> String {
    let mut out = class_name(node);
    out.push_str(&id(node));
    out
}

/// Whether `node` carries a non-empty `class` or `id`. Whitespace counts.
#[must_use]
pub fn has_class_or_id(node: &NodeRef) -> bool {
    !class_and_id(node).is_empty()
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

// === Text Content ===

/// All text of the node and its descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Outer HTML of the node.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    node.html()
}

// === Tree Manipulation ===

/// Remove class and id from an element.
pub fn clear_class_and_id(node: &NodeRef) {
    node.remove_attr("class");
    node.remove_attr("id");
}

/// Whether `ancestor` is `node` itself or one of its ancestors.
#[must_use]
pub fn is_ancestor_or_self(ancestor: &NodeRef, node: &NodeRef) -> bool {
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.id == ancestor.id {
            return true;
        }
        current = n.parent();
    }
    false
}

/// Detach `node` from its parent. The node stays in the arena and can
/// still be serialized.
#[inline]
pub fn detach(node: &NodeRef) {
    node.remove_from_parent();
}
