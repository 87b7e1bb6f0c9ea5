//! Query traversal (C8): `querySelector`/`querySelectorAll`/`matches`/
//! `closest`, a pre-order document-order walk over the arena consulting
//! the compiled [`SelectorList`].

use crate::cache;
use crate::matcher::matches_list;
use dom_collections::NodeList;
use dom_core::Document;
use dom_storage::NodeId;
use dom_types::{DomError, NodeType};

/// Elements and documents that support CSS selector queries, rooted at
/// `self`'s descendants.
pub trait Selectable {
    fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>, DomError>;
    fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<NodeList, DomError>;
    fn matches(&self, node: NodeId, selector: &str) -> Result<bool, DomError>;
    fn closest(&self, node: NodeId, selector: &str) -> Result<Option<NodeId>, DomError>;
}

impl Selectable for Document {
    fn query_selector(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>, DomError> {
        SelectorQuery::find_first(self, root, selector)
    }

    fn query_selector_all(&self, root: NodeId, selector: &str) -> Result<NodeList, DomError> {
        SelectorQuery::find_all(self, root, selector)
    }

    fn matches(&self, node: NodeId, selector: &str) -> Result<bool, DomError> {
        let list = cache::compile(selector)?;
        Ok(matches_list(self, node, &list))
    }

    fn closest(&self, node: NodeId, selector: &str) -> Result<Option<NodeId>, DomError> {
        let list = cache::compile(selector)?;
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if matches_list(self, current, &list) {
                return Ok(Some(current));
            }
            cursor = self.parent_node(current).filter(|&p| self.node_type(p) == Some(NodeType::Element));
        }
        Ok(None)
    }
}

/// Namespace for the traversal entry points, independent of any
/// particular root type.
pub struct SelectorQuery;

impl SelectorQuery {
    /// First descendant of `root` (pre-order, not including `root`
    /// itself) matching `selector`.
    pub fn find_first(document: &Document, root: NodeId, selector: &str) -> Result<Option<NodeId>, DomError> {
        let list = cache::compile(selector)?;
        Ok(find_first_descendant(document, root, &list))
    }

    /// Every descendant of `root` matching `selector`, in document
    /// order, with no duplicates across comma-separated alternatives.
    pub fn find_all(document: &Document, root: NodeId, selector: &str) -> Result<NodeList, DomError> {
        let list = cache::compile(selector)?;
        let mut out = Vec::new();
        collect_descendants(document, root, &list, &mut out);
        Ok(NodeList::new(out))
    }
}

fn find_first_descendant(
    document: &Document,
    node: NodeId,
    list: &crate::parser::SelectorList,
) -> Option<NodeId> {
    for child in document.child_nodes(node) {
        if document.node_type(child) == Some(NodeType::Element) && matches_list(document, child, list) {
            return Some(child);
        }
        if let Some(found) = find_first_descendant(document, child, list) {
            return Some(found);
        }
    }
    None
}

fn collect_descendants(
    document: &Document,
    node: NodeId,
    list: &crate::parser::SelectorList,
    out: &mut Vec<NodeId>,
) {
    for child in document.child_nodes(node) {
        if document.node_type(child) == Some(NodeType::Element) && matches_list(document, child, list) {
            out.push(child);
        }
        collect_descendants(document, child, list, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_selector_all_returns_document_order() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        let div = doc.create_element("div").unwrap();
        doc.set_attribute(div, "class".into(), "a b".into()).unwrap();
        let span = doc.create_element("span").unwrap();
        doc.set_attribute(span, "class".into(), "a".into()).unwrap();
        doc.append_child(body, div).unwrap();
        doc.append_child(div, span).unwrap();

        let all = doc.query_selector_all(body, ".a").unwrap();
        assert_eq!(all.as_slice(), &[div, span]);

        let just_div = doc.query_selector(body, ".b").unwrap();
        assert_eq!(just_div, Some(div));
    }

    #[test]
    fn query_selector_equals_first_of_query_selector_all() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        let a = doc.create_element("li").unwrap();
        let b = doc.create_element("li").unwrap();
        doc.append_child(body, a).unwrap();
        doc.append_child(body, b).unwrap();

        let first = doc.query_selector(body, "li").unwrap();
        let all = doc.query_selector_all(body, "li").unwrap();
        assert_eq!(first, all.item(0));
    }

    #[test]
    fn closest_walks_ancestors_including_self() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        let outer = doc.create_element("div").unwrap();
        doc.set_attribute(outer, "id".into(), "outer".into()).unwrap();
        let inner = doc.create_element("span").unwrap();
        doc.append_child(body, outer).unwrap();
        doc.append_child(outer, inner).unwrap();

        assert_eq!(doc.closest(inner, "#outer").unwrap(), Some(outer));
        assert_eq!(doc.closest(outer, "#outer").unwrap(), Some(outer));
        assert_eq!(doc.closest(inner, "#missing").unwrap(), None);
    }

    #[test]
    fn matches_checks_a_single_element() {
        let doc = Document::new();
        let el = doc.create_element("input").unwrap();
        doc.set_attribute(el, "disabled".into(), String::new()).unwrap();
        assert!(doc.matches(el, ":disabled").unwrap());
        assert!(!doc.matches(el, ":enabled").unwrap());
    }

    #[test]
    fn invalid_selector_raises() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        assert!(doc.query_selector_all(body, "div[").is_err());
    }
}
