//! End-to-end scenarios exercising the facade the way a consumer would:
//! parse HTML into a document, query it, mutate it, and dispatch events,
//! all through `very_happy_dom::Document`.

use dom_selectors::Selectable;
use very_happy_dom::event::{Event, EventInit};
use very_happy_dom::Document;

fn fresh_body() -> (Document, dom_storage::NodeId) {
    let doc = Document::new();
    let body = doc.body().unwrap();
    (doc, body)
}

// ---------------------------------------------------------------------
// S1: parse + query by class
// ---------------------------------------------------------------------

#[test]
fn s1_parse_and_query_by_class() {
    let (doc, body) = fresh_body();
    doc.set_inner_html(body, r#"<div class="a b"><span class="a">x</span></div>"#)
        .unwrap();

    let matches = doc.query_selector_all(body, ".a").unwrap();
    assert_eq!(matches.length(), 2);
    let div = doc.children(body)[0];
    let span = doc.children(div)[0];
    assert_eq!(matches.item(0), Some(div));
    assert_eq!(matches.item(1), Some(span));

    assert_eq!(doc.query_selector(body, ".b").unwrap(), Some(div));
}

// ---------------------------------------------------------------------
// S2: descendant vs. child combinators
// ---------------------------------------------------------------------

#[test]
fn s2_descendant_vs_child_combinator() {
    let (doc, body) = fresh_body();
    doc.set_inner_html(body, "<ul><li><ul><li>inner</li></ul></li></ul>")
        .unwrap();

    let descendant = doc.query_selector_all(body, "ul li").unwrap();
    assert_eq!(descendant.length(), 2);

    let direct_child = doc.query_selector_all(body, "ul > li").unwrap();
    assert_eq!(direct_child.length(), 2);
    assert_eq!(descendant.as_slice(), direct_child.as_slice());

    let nested_only = doc.query_selector_all(body, "ul > ul > li").unwrap();
    assert_eq!(nested_only.length(), 1);
}

// ---------------------------------------------------------------------
// S3: attribute suffix predicate preserves document order
// ---------------------------------------------------------------------

#[test]
fn s3_attribute_suffix_predicate() {
    let (doc, body) = fresh_body();
    doc.set_inner_html(
        body,
        r#"<a href="x.pdf"></a><a href="y.html"></a><a href="z.pdf"></a>"#,
    )
    .unwrap();

    let anchors = doc.children(body);
    let pdfs = doc.query_selector_all(body, r#"a[href$=".pdf"]"#).unwrap();
    assert_eq!(pdfs.length(), 2);
    assert_eq!(pdfs.item(0), Some(anchors[0]));
    assert_eq!(pdfs.item(1), Some(anchors[2]));
}

// ---------------------------------------------------------------------
// S4: :nth-child(odd)
// ---------------------------------------------------------------------

#[test]
fn s4_nth_child_odd() {
    let (doc, body) = fresh_body();
    doc.set_inner_html(body, "<ul><li></li><li></li><li></li><li></li></ul>")
        .unwrap();
    let ul = doc.children(body)[0];
    let items = doc.children(ul);

    let odd = doc.query_selector_all(body, "li:nth-child(odd)").unwrap();
    assert_eq!(odd.length(), 2);
    assert_eq!(odd.item(0), Some(items[0]));
    assert_eq!(odd.item(1), Some(items[2]));
}

// ---------------------------------------------------------------------
// S5: bubbling dispatch order and preventDefault's return value
// ---------------------------------------------------------------------

#[test]
fn s5_event_bubbles_then_prevent_default_stops_default_action() {
    use std::sync::{Arc, Mutex};

    let (doc, body) = fresh_body();
    doc.set_inner_html(body, r#"<div id="outer"><button id="inner"></button></div>"#)
        .unwrap();
    let outer = doc.children(body)[0];
    let inner = doc.children(outer)[0];

    let record = Arc::new(Mutex::new(Vec::new()));

    let outer_record = record.clone();
    doc.add_event_listener(
        outer,
        "click",
        Arc::new(move |_event: &mut Event| outer_record.lock().unwrap().push("outer")),
        false,
    );

    let inner_record = record.clone();
    doc.add_event_listener(
        inner,
        "click",
        Arc::new(move |event: &mut Event| {
            inner_record.lock().unwrap().push("inner");
            event.prevent_default();
        }),
        false,
    );

    let event = Event::new("click", EventInit { bubbles: true, cancelable: true });
    let result = doc.dispatch_event(inner, event);

    assert_eq!(*record.lock().unwrap(), vec!["inner", "outer"]);
    assert!(!result);
}

// ---------------------------------------------------------------------
// S6: innerHTML round-trip modulo void-element self-close serialization
// ---------------------------------------------------------------------

#[test]
fn s6_inner_html_round_trip() {
    let (doc, body) = fresh_body();
    let div = doc.create_element("div").unwrap();
    doc.append_child(body, div).unwrap();

    doc.set_inner_html(div, r#"<p class="x">hi</p><br/>"#).unwrap();
    assert_eq!(doc.inner_html(div), r#"<p class="x">hi</p><br />"#);
}

// ---------------------------------------------------------------------
// S7: classList is a write-through mirror of the `class` attribute
// ---------------------------------------------------------------------

#[test]
fn s7_class_list_mirrors_class_attribute() {
    let (doc, body) = fresh_body();
    let el = doc.create_element("div").unwrap();
    doc.append_child(body, el).unwrap();

    doc.set_attribute(el, "class".into(), "a  b  a".into()).unwrap();
    assert!(doc.class_list(el).contains("a"));
    assert!(doc.class_list(el).contains("b"));

    doc.class_list(el).remove("a");
    assert_eq!(doc.get_attribute(el, "class"), Some("b".to_string()));
}

// ---------------------------------------------------------------------
// Property 3 (§8): closest walks up to the first match, or the tree root
// ---------------------------------------------------------------------

#[test]
fn closest_returns_self_or_walks_ancestors_to_first_match() {
    let (doc, body) = fresh_body();
    doc.set_inner_html(body, r#"<section class="card"><div><span>leaf</span></div></section>"#)
        .unwrap();
    let section = doc.children(body)[0];
    let div = doc.children(section)[0];
    let span = doc.children(div)[0];

    assert_eq!(doc.closest(span, ".card").unwrap(), Some(section));
    assert_eq!(doc.closest(section, ".card").unwrap(), Some(section));
    assert_eq!(doc.closest(body, ".card").unwrap(), None);
}
