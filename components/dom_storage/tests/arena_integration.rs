use dom_storage::{gc, NodeArena};

#[derive(Debug)]
struct TreeNode {
    children: Vec<dom_storage::NodeId>,
}

#[test]
fn arena_supports_a_small_tree_and_gc_together() {
    let arena: NodeArena<TreeNode> = NodeArena::with_capacity(8);

    let leaf_a = arena.insert(TreeNode { children: vec![] });
    let leaf_b = arena.insert(TreeNode { children: vec![] });
    let root = arena.insert(TreeNode {
        children: vec![leaf_a, leaf_b],
    });

    let detached = arena.insert(TreeNode { children: vec![] });
    assert!(arena.contains(detached));

    let stats = gc::collect(&arena, &[root], |n| n.children.clone());
    assert_eq!(stats.swept, 1);
    assert!(!arena.contains(detached));
    assert!(arena.contains(root));
    assert!(arena.contains(leaf_a));
    assert!(arena.contains(leaf_b));
}

#[test]
fn cloned_arena_handles_share_storage() {
    let arena: NodeArena<i32> = NodeArena::new();
    let id = arena.insert(1);
    let handle = arena.clone();
    handle.with_mut(id, |v| *v += 1);
    assert_eq!(arena.with(id, |v| *v), Some(2));
}
