//! CSS selector matching (C8): evaluates a compiled [`SelectorList`]
//! against a candidate element, and the right-to-left complex-selector
//! algorithm SPEC_FULL.md §4.8 specifies.

use crate::parser::{AttrOp, Combinator, Compound, NthArg, Pseudo, Selector, SelectorList};
use dom_core::Document;
use dom_storage::NodeId;

/// `true` if `node` matches every simple selector in `compound`.
pub fn matches_compound(document: &Document, node: NodeId, compound: &Compound) -> bool {
    if let Some(tag) = &compound.tag {
        if document.tag_name(node).as_deref() != Some(tag.as_str()) {
            return false;
        }
    }
    if let Some(id) = &compound.id {
        if document.get_attribute(node, "id").as_deref() != Some(id.as_str()) {
            return false;
        }
    }
    if !compound.classes.is_empty() {
        let class_list = document.class_list(node);
        if !compound.classes.iter().all(|c| class_list.contains(c)) {
            return false;
        }
    }
    for attr in &compound.attrs {
        if !matches_attr(document, node, attr) {
            return false;
        }
    }
    for pseudo in &compound.pseudos {
        if !matches_pseudo(document, node, pseudo) {
            return false;
        }
    }
    true
}

fn matches_attr(document: &Document, node: NodeId, attr: &crate::parser::AttrPredicate) -> bool {
    let Some(value) = document.get_attribute(node, &attr.name) else {
        return false;
    };
    let (Some(op), Some(expected)) = (attr.op, attr.value.as_deref()) else {
        return true;
    };
    match op {
        AttrOp::Equals => value == expected,
        AttrOp::StartsWith => !expected.is_empty() && value.starts_with(expected),
        AttrOp::EndsWith => !expected.is_empty() && value.ends_with(expected),
        AttrOp::Contains => !expected.is_empty() && value.contains(expected),
        AttrOp::Includes => value.split_ascii_whitespace().any(|tok| tok == expected),
    }
}

fn matches_pseudo(document: &Document, node: NodeId, pseudo: &Pseudo) -> bool {
    match pseudo {
        Pseudo::FirstChild => element_position(document, node).map_or(false, |(pos, _)| pos == 1),
        Pseudo::LastChild => {
            element_position(document, node).map_or(false, |(pos, total)| pos == total)
        }
        Pseudo::NthChild(arg) => element_position(document, node).map_or(false, |(pos, _)| {
            match arg {
                NthArg::Odd => pos % 2 == 1,
                NthArg::Even => pos % 2 == 0,
                NthArg::Index(n) => i64::try_from(pos).map(|p| p == *n).unwrap_or(false),
            }
        }),
        Pseudo::Not(inner) => !matches_compound(document, node, inner),
        Pseudo::Checked => document.has_attribute(node, "checked"),
        Pseudo::Disabled => document.has_attribute(node, "disabled"),
        Pseudo::Enabled => !document.has_attribute(node, "disabled"),
        Pseudo::Empty => document.children(node).is_empty(),
    }
}

/// 1-indexed position of `node` among its parent's element children, and
/// the total count, or `None` if `node` has no parent.
fn element_position(document: &Document, node: NodeId) -> Option<(usize, usize)> {
    let parent = document.parent_node(node)?;
    let siblings = document.children(parent);
    let pos = siblings.iter().position(|&n| n == node)?;
    Some((pos + 1, siblings.len()))
}

/// Evaluates the full right-to-left combinator chain of `selector`
/// against `node`.
pub fn matches_selector(document: &Document, node: NodeId, selector: &Selector) -> bool {
    let steps = &selector.steps;
    let mut idx = steps.len() - 1;
    if !matches_compound(document, node, &steps[idx].compound) {
        return false;
    }
    let mut current = node;

    while idx > 0 {
        let combinator = steps[idx].combinator.expect("non-first step carries a combinator");
        let target = &steps[idx - 1].compound;
        match combinator {
            Combinator::Child => match document.parent_node(current) {
                Some(parent) if matches_compound(document, parent, target) => {
                    current = parent;
                    idx -= 1;
                }
                _ => return false,
            },
            Combinator::Adjacent => match document.previous_element_sibling(current) {
                Some(sibling) if matches_compound(document, sibling, target) => {
                    current = sibling;
                    idx -= 1;
                }
                _ => return false,
            },
            Combinator::Sibling => {
                let mut cursor = document.previous_element_sibling(current);
                let mut found = None;
                while let Some(sibling) = cursor {
                    if matches_compound(document, sibling, target) {
                        found = Some(sibling);
                        break;
                    }
                    cursor = document.previous_element_sibling(sibling);
                }
                match found {
                    Some(sibling) => {
                        current = sibling;
                        idx -= 1;
                    }
                    None => return false,
                }
            }
            Combinator::Descendant => {
                let mut cursor = document.parent_node(current);
                let mut found = None;
                while let Some(ancestor) = cursor {
                    if matches_compound(document, ancestor, target) {
                        found = Some(ancestor);
                        break;
                    }
                    cursor = document.parent_node(ancestor);
                }
                match found {
                    Some(ancestor) => {
                        current = ancestor;
                        idx -= 1;
                    }
                    None => return false,
                }
            }
        }
    }
    true
}

/// `true` if `node` matches any alternative in `list`.
pub fn matches_list(document: &Document, node: NodeId, list: &SelectorList) -> bool {
    list.selectors.iter().any(|sel| matches_selector(document, node, sel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn tag_class_and_id() {
        let doc = Document::new();
        let el = doc.create_element("div").unwrap();
        doc.set_attribute(el, "class".into(), "a b".into()).unwrap();
        doc.set_attribute(el, "id".into(), "x".into()).unwrap();

        assert!(matches_list(&doc, el, &parse("div").unwrap()));
        assert!(matches_list(&doc, el, &parse(".a").unwrap()));
        assert!(matches_list(&doc, el, &parse("#x").unwrap()));
        assert!(!matches_list(&doc, el, &parse("span").unwrap()));
        assert!(!matches_list(&doc, el, &parse(".c").unwrap()));
    }

    #[test]
    fn attribute_operators() {
        let doc = Document::new();
        let el = doc.create_element("a").unwrap();
        doc.set_attribute(el, "href".into(), "file.pdf".into()).unwrap();
        assert!(matches_list(&doc, el, &parse(r#"a[href$=".pdf"]"#).unwrap()));
        assert!(matches_list(&doc, el, &parse(r#"a[href^="file"]"#).unwrap()));
        assert!(matches_list(&doc, el, &parse(r#"a[href*="le.p"]"#).unwrap()));
        assert!(!matches_list(&doc, el, &parse(r#"a[href$=".html"]"#).unwrap()));
    }

    #[test]
    fn descendant_vs_child_combinator() {
        let doc = Document::new();
        let outer_ul = doc.create_element("ul").unwrap();
        let outer_li = doc.create_element("li").unwrap();
        let inner_ul = doc.create_element("ul").unwrap();
        let inner_li = doc.create_element("li").unwrap();
        doc.append_child(outer_ul, outer_li).unwrap();
        doc.append_child(outer_li, inner_ul).unwrap();
        doc.append_child(inner_ul, inner_li).unwrap();

        let descendant = parse("ul li").unwrap();
        assert!(matches_list(&doc, outer_li, &descendant));
        assert!(matches_list(&doc, inner_li, &descendant));

        let child = parse("ul > li").unwrap();
        assert!(matches_list(&doc, outer_li, &child));
        assert!(!matches_list(&doc, inner_li, &child));

        let nested_child = parse("ul > ul > li").unwrap();
        assert!(matches_list(&doc, inner_li, &nested_child));
        assert!(!matches_list(&doc, outer_li, &nested_child));
    }

    #[test]
    fn nth_child_odd() {
        let doc = Document::new();
        let ul = doc.create_element("ul").unwrap();
        let items: Vec<_> = (0..4).map(|_| doc.create_element("li").unwrap()).collect();
        for &li in &items {
            doc.append_child(ul, li).unwrap();
        }
        let odd = parse("li:nth-child(odd)").unwrap();
        let matched: Vec<bool> = items.iter().map(|&n| matches_list(&doc, n, &odd)).collect();
        assert_eq!(matched, vec![true, false, true, false]);
    }

    #[test]
    fn not_pseudo_negates_inner_compound() {
        let doc = Document::new();
        let a = doc.create_element("div").unwrap();
        doc.set_attribute(a, "class".into(), "hidden".into()).unwrap();
        let b = doc.create_element("div").unwrap();

        let sel = parse("div:not(.hidden)").unwrap();
        assert!(!matches_list(&doc, a, &sel));
        assert!(matches_list(&doc, b, &sel));
    }

    #[test]
    fn empty_pseudo_ignores_text_children() {
        let doc = Document::new();
        let el = doc.create_element("div").unwrap();
        let text = doc.create_text_node("hi");
        doc.append_child(el, text).unwrap();
        // Decided open question: `:empty` here means zero *element*
        // children, so a text-only element still matches.
        assert!(matches_list(&doc, el, &parse("div:empty").unwrap()));
    }
}
