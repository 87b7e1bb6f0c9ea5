//! Integration tests covering the mutation observer and element
//! registry hooks against a real built document.

use dom_core::{Document, ElementUpgradeRegistry};
use dom_hooks::{ElementRegistry, MutationObserver, MutationObserverInit};
use std::sync::{Arc, Mutex};

#[test]
fn observer_sees_a_child_list_mutation_on_the_document_body() {
    let doc = Arc::new(Document::new());
    let seen = Arc::new(Mutex::new(0));
    let seen_clone = seen.clone();
    let observer = MutationObserver::new(doc.clone(), move |records| {
        *seen_clone.lock().unwrap() += records.len();
    });
    observer.attach();

    let body = doc.body().unwrap();
    observer
        .observe(body, MutationObserverInit { child_list: true, ..Default::default() })
        .unwrap();

    let child = doc.create_element("p").unwrap();
    doc.append_child(body, child).unwrap();

    observer.deliver();
    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn element_registry_upgrades_only_the_registered_tag() {
    let registry = Arc::new(ElementRegistry::new());
    let upgraded = Arc::new(Mutex::new(Vec::new()));
    let upgraded_clone = upgraded.clone();
    registry.define("app-button", move |node| upgraded_clone.lock().unwrap().push(node));

    let doc = Document::new();
    doc.set_element_registry(Some(registry as Arc<dyn ElementUpgradeRegistry>));

    doc.create_element("div").unwrap();
    let button = doc.create_element("app-button").unwrap();

    assert_eq!(*upgraded.lock().unwrap(), vec![button]);
}

#[test]
fn disconnecting_an_observer_stops_further_delivery() {
    let doc = Arc::new(Document::new());
    let seen = Arc::new(Mutex::new(0));
    let seen_clone = seen.clone();
    let observer = MutationObserver::new(doc.clone(), move |records| {
        *seen_clone.lock().unwrap() += records.len();
    });
    observer.attach();

    let div = doc.create_element("div").unwrap();
    observer
        .observe(div, MutationObserverInit { attributes: true, ..Default::default() })
        .unwrap();
    observer.disconnect();

    doc.set_attribute(div, "class".into(), "x".into()).unwrap();
    observer.deliver();

    assert_eq!(*seen.lock().unwrap(), 0);
}
