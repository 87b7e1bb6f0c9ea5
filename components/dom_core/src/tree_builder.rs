//! Tree construction from a token stream (C3).
//!
//! A deliberately small "open element stack" builder: no insertion-mode
//! state machine, no foster parenting, no implied end tags beyond
//! closing void elements immediately. Good enough for the well-formed
//! fragments/documents this workspace targets; malformed input (a stray
//! end tag, an unclosed tag at EOF) is repaired the pragmatic way browsers
//! do — ignore the stray end tag, close everything still open at EOF.

use crate::attr::is_void_element;
use crate::document::Document;
use crate::tokenizer::{tokenize, Token};
use dom_storage::NodeId;
use dom_types::DomError;

/// Parses `html` as a document fragment and appends the resulting nodes
/// as children of `parent`.
///
/// Per the decided open question on whitespace, a text run consisting
/// only of whitespace at the very start or end of the fragment is
/// dropped; interior whitespace-only runs (e.g. indentation between
/// sibling tags) are kept, matching how real markup relies on them for
/// inline layout.
pub fn parse_fragment(document: &Document, parent: NodeId, html: &str) -> Result<(), DomError> {
    let tokens = tokenize(html)?;
    let mut stack: Vec<NodeId> = vec![parent];
    let mut first_significant_seen = false;
    let last_text_index = tokens
        .iter()
        .rposition(|t| matches!(t, Token::Text(s) if !s.trim().is_empty()));

    for (idx, token) in tokens.iter().enumerate() {
        match token {
            Token::StartTag {
                name,
                attrs,
                self_closing,
            } => {
                first_significant_seen = true;
                let current = *stack.last().unwrap();
                let element = document.create_element(name)?;
                for attr in attrs {
                    document.set_attribute(element, attr.name.clone(), attr.value.clone())?;
                }
                document.append_child(current, element)?;
                if !*self_closing && !is_void_element(name) {
                    stack.push(element);
                }
            }
            Token::EndTag { name } => {
                if let Some(pos) = stack.iter().rposition(|id| {
                    document
                        .tag_name(*id)
                        .map(|t| t == *name)
                        .unwrap_or(false)
                }) {
                    stack.truncate(pos.max(1));
                }
                // A stray end tag with no matching open element is ignored.
            }
            Token::Text(text) => {
                let is_boundary_whitespace = text.trim().is_empty()
                    && (!first_significant_seen || Some(idx) > last_text_index);
                if is_boundary_whitespace {
                    continue;
                }
                first_significant_seen = true;
                let current = *stack.last().unwrap();
                let text_node = document.create_text_node(text.clone());
                document.append_child(current, text_node)?;
            }
            Token::Comment(text) => {
                first_significant_seen = true;
                let current = *stack.last().unwrap();
                let comment_node = document.create_comment(text.clone());
                document.append_child(current, comment_node)?;
            }
            Token::Eof => break,
        }
    }
    Ok(())
}

/// Parses `html` as a full document: builds (or reuses) a minimal
/// `html > head, body` skeleton and populates `body` with the parsed
/// markup. Content before any `<body>` tag that isn't `<head>`/`<html>`
/// is treated as body content, matching how browsers recover from
/// missing structural tags.
pub fn parse_document(document: &Document, html: &str) -> Result<(), DomError> {
    let body = document
        .body()
        .ok_or_else(|| DomError::internal("document has no <body>"))?;
    parse_fragment(document, body, html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_into_the_tree() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        parse_fragment(&doc, body, "<div><p>hello</p></div>").unwrap();
        let div = doc.children(body)[0];
        assert_eq!(doc.tag_name(div).as_deref(), Some("div"));
        let p = doc.children(div)[0];
        assert_eq!(doc.tag_name(p).as_deref(), Some("p"));
        assert_eq!(doc.text_content(p), "hello");
    }

    #[test]
    fn void_elements_are_not_pushed_onto_the_stack() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        parse_fragment(&doc, body, "<div><br>after</div>").unwrap();
        let div = doc.children(body)[0];
        let kids = doc.child_nodes(div);
        assert_eq!(kids.len(), 2);
    }

    #[test]
    fn stray_end_tag_is_ignored() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        parse_fragment(&doc, body, "</div><p>ok</p>").unwrap();
        assert_eq!(doc.children(body).len(), 1);
    }

    #[test]
    fn boundary_whitespace_is_dropped_interior_is_kept() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        parse_fragment(&doc, body, "  <a>x</a> <b>y</b>  ").unwrap();
        let kids = doc.child_nodes(body);
        // <a>, text(" "), <b> — leading/trailing all-whitespace runs dropped.
        assert_eq!(kids.len(), 3);
    }

    #[test]
    fn attributes_are_applied_to_the_created_element() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        parse_fragment(&doc, body, "<div id=\"x\" class=\"a b\"></div>").unwrap();
        let div = doc.children(body)[0];
        assert_eq!(doc.get_attribute(div, "id").as_deref(), Some("x"));
        assert_eq!(doc.get_attribute(div, "class").as_deref(), Some("a b"));
    }

    #[test]
    fn closing_a_nested_element_does_not_over_pop_its_parent() {
        let doc = Document::new();
        let body = doc.body().unwrap();
        parse_fragment(&doc, body, "<div><p>hello</p><span>world</span></div><p>c</p>").unwrap();
        let kids = doc.children(body);
        assert_eq!(kids.len(), 2);
        let div = kids[0];
        assert_eq!(doc.tag_name(div).as_deref(), Some("div"));
        let div_kids = doc.children(div);
        assert_eq!(div_kids.len(), 2);
        assert_eq!(doc.tag_name(div_kids[1]).as_deref(), Some("span"));
        let trailing_p = kids[1];
        assert_eq!(doc.tag_name(trailing_p).as_deref(), Some("p"));
        assert_eq!(doc.text_content(trailing_p), "c");
    }
}
