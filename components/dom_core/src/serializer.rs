//! HTML serialization (C6): `inner_html`/`outer_html` rendering.
//!
//! No entity-encoding is performed anywhere, on text content or attribute
//! values, matching the decided open question that this workspace never
//! encodes or decodes HTML entities. Attribute values round-trip verbatim;
//! a literal `"` inside one is written as-is.

use crate::attr::is_void_element;
use crate::document::Document;
use crate::node::NodeKind;
use dom_storage::NodeId;

/// Renders `node` and its subtree as HTML (`outerHTML` semantics).
pub fn serialize_outer(document: &Document, node: NodeId) -> String {
    let mut out = String::new();
    write_node(document, node, &mut out);
    out
}

/// Renders only `node`'s children (`innerHTML` semantics).
pub fn serialize_inner(document: &Document, node: NodeId) -> String {
    let mut out = String::new();
    for child in document.child_nodes(node) {
        write_node(document, child, &mut out);
    }
    out
}

fn write_node(document: &Document, node: NodeId, out: &mut String) {
    let Some(kind) = document.node_kind_snapshot(node) else {
        return;
    };
    match kind {
        NodeKind::Document(_) => {
            for child in document.child_nodes(node) {
                write_node(document, child, out);
            }
        }
        NodeKind::Element(_) => {
            let tag = document.tag_name(node).unwrap_or_default();
            let void = is_void_element(&tag);
            out.push('<');
            out.push_str(&tag);
            for (name, value) in document.attributes(node) {
                out.push(' ');
                out.push_str(&name);
                out.push_str("=\"");
                out.push_str(&value);
                out.push('"');
            }
            if void {
                out.push_str(" />");
                return;
            }
            out.push('>');
            for child in document.child_nodes(node) {
                write_node(document, child, out);
            }
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
        NodeKind::Text(text) => out.push_str(&text.data),
        NodeKind::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(&comment.data);
            out.push_str("-->");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree_builder::parse_fragment;

    #[test]
    fn serializes_nested_elements() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        parse_fragment(&doc, body, "<div class=\"a\"><p>hi</p></div>").unwrap();
        let div = doc.children(body)[0];
        assert_eq!(serialize_outer(&doc, div), "<div class=\"a\"><p>hi</p></div>");
    }

    #[test]
    fn void_elements_self_close() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        parse_fragment(&doc, body, "<br>").unwrap();
        let br = doc.children(body)[0];
        assert_eq!(serialize_outer(&doc, br), "<br />");
    }

    #[test]
    fn inner_html_round_trip_matches_spec_scenario_s6() {
        let doc = Document::new();
        let div = doc.create_element("div").unwrap();
        doc.set_inner_html(div, "<p class=\"x\">hi</p><br/>").unwrap();
        assert_eq!(doc.inner_html(div), "<p class=\"x\">hi</p><br />");
    }

    #[test]
    fn attribute_values_round_trip_without_entity_encoding() {
        let doc = Document::new();
        let el = doc.create_element("div").unwrap();
        doc.set_attribute(el, "title".into(), "say \"hi\"".into()).unwrap();
        assert_eq!(serialize_outer(&doc, el), "<div title=\"say \"hi\"\"></div>");
    }

    #[test]
    fn inner_html_renders_only_children() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        parse_fragment(&doc, body, "<span>x</span>").unwrap();
        assert_eq!(serialize_inner(&doc, body), "<span>x</span>");
    }

    #[test]
    fn text_content_is_not_entity_encoded() {
        let doc = Document::new();
        let el = doc.create_element("p").unwrap();
        let text = doc.create_text_node("a & b < c");
        doc.append_child(el, text).unwrap();
        assert_eq!(serialize_outer(&doc, el), "<p>a & b < c</p>");
    }
}
