use dom_collections::NodeList;
use dom_core::Document;

#[test]
fn wraps_a_fixed_set_of_ids() {
    let doc = Document::new();
    let a = doc.create_element("div").unwrap();
    let b = doc.create_element("span").unwrap();
    let list = NodeList::new(vec![a, b]);

    assert_eq!(list.length(), 2);
    assert_eq!(list.item(0), Some(a));
    assert_eq!(list.item(1), Some(b));
    assert_eq!(list.item(2), None);
}

#[test]
fn empty_list() {
    let list = NodeList::new(vec![]);
    assert_eq!(list.length(), 0);
    assert!(list.is_empty());
    assert!(list.item(0).is_none());
}

#[test]
fn iterates_in_order() {
    let doc = Document::new();
    let ids: Vec<_> = (0..3).map(|_| doc.create_element("li").unwrap()).collect();
    let list = NodeList::new(ids.clone());
    let collected: Vec<_> = list.iter().collect();
    assert_eq!(collected, ids);
}
