//! `HTMLCollection`: elements reachable from a root's descendants,
//! filtered by tag name or class name, captured as a live-independent
//! snapshot (§4.4, §3 invariant 8).
//!
//! The teacher's version of this type cloned a fresh `Element` out of the
//! arena for every descendant it visited (`Any::downcast_ref::<Element>()`
//! then `.clone()`) to route around a `NodeRef`/`ElementRef` split that no
//! longer exists once node identity is just a `NodeId` — traversal here
//! walks `NodeId`s directly and only reads through the arena via
//! `Document`, never cloning node data.

use dom_core::Document;
use dom_storage::NodeId;

/// A snapshot of elements, in document order, taken under a root.
#[derive(Debug, Clone, Default)]
pub struct HTMLCollection {
    items: Vec<NodeId>,
}

impl HTMLCollection {
    /// Matches every element descendant of `root` (not including `root`
    /// itself) whose tag name equals `tag_name`, or all elements if
    /// `tag_name` is `"*"`.
    pub fn by_tag_name(document: &Document, root: NodeId, tag_name: &str) -> Self {
        let match_all = tag_name == "*";
        let target = tag_name.to_ascii_lowercase();
        let items = collect_descendants(document, root, |document, node| {
            match_all || document.tag_name(node).as_deref() == Some(target.as_str())
        });
        Self { items }
    }

    /// Matches every element descendant of `root` whose class set
    /// contains every token in the whitespace-separated `class_names`.
    pub fn by_class_name(document: &Document, root: NodeId, class_names: &str) -> Self {
        let targets: Vec<String> = class_names.split_whitespace().map(str::to_string).collect();
        if targets.is_empty() {
            return Self { items: Vec::new() };
        }
        let items = collect_descendants(document, root, |document, node| {
            let tokens = document.class_list(node).tokens();
            targets.iter().all(|t| tokens.contains(t))
        });
        Self { items }
    }

    pub fn length(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<NodeId> {
        self.items.get(index).copied()
    }

    /// The first element whose `id` or `name` attribute equals `name`.
    pub fn named_item(&self, document: &Document, name: &str) -> Option<NodeId> {
        self.items.iter().copied().find(|&node| {
            document.get_attribute(node, "id").as_deref() == Some(name)
                || document.get_attribute(node, "name").as_deref() == Some(name)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.items.iter().copied()
    }
}

fn collect_descendants(
    document: &Document,
    root: NodeId,
    predicate: impl Fn(&Document, NodeId) -> bool,
) -> Vec<NodeId> {
    let mut ordered = Vec::new();
    collect_in_order(document, root, &mut ordered);
    ordered.into_iter().filter(|&node| predicate(document, node)).collect()
}

fn collect_in_order(document: &Document, node: NodeId, out: &mut Vec<NodeId>) {
    use dom_types::NodeType;
    for child in document.child_nodes(node) {
        if document.node_type(child) == Some(NodeType::Element) {
            out.push(child);
        }
        collect_in_order(document, child, out);
    }
}
