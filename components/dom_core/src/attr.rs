//! Attribute-name validation, the void-element table, and the pure
//! class/style derivation functions consulted by [`crate::class_list`] and
//! [`crate::style`].
//!
//! This workspace does not model a separate `Attr` node: `Element`
//! attributes are a plain `IndexMap<String, String>` (insertion order
//! preserved, per the data-model invariant that serialization observes
//! attribute-write order). This module holds only the free functions that
//! operate on attribute *values* once you already have one out of that map.

/// Elements with no content and no closing tag; the tree builder never
/// pushes these onto the open-element stack, and the serializer emits
/// them self-closing.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// `true` if `tag` (already canonicalized) is a void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Validates an attribute name against the tokenizer's own attribute-name
/// grammar (`[a-zA-Z0-9_:-]+`), so a name built programmatically through
/// `set_attribute` can't produce something the parser itself would never
/// have tokenized as a name.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b':' || b == b'-')
}

/// Splits a `class` attribute value into its whitespace-separated,
/// deduplicated, order-preserving token set.
pub fn split_class_tokens(value: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut tokens = Vec::new();
    for tok in value.split_ascii_whitespace() {
        if seen.insert(tok) {
            tokens.push(tok.to_string());
        }
    }
    tokens
}

/// Joins class tokens back into a `class` attribute value.
pub fn join_class_tokens(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// Parses a `style` attribute value into an ordered `name -> value` map.
/// Rules are `;`-separated `name: value` pairs; a later declaration of the
/// same property overwrites an earlier one (reads return the last value
/// set), matching the invariant documented on [`crate::style`].
pub fn parse_style_declarations(value: &str) -> indexmap::IndexMap<String, String> {
    let mut map = indexmap::IndexMap::new();
    for rule in value.split(';') {
        let rule = rule.trim();
        if rule.is_empty() {
            continue;
        }
        if let Some((name, val)) = rule.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            let val = val.trim().to_string();
            if !name.is_empty() {
                map.insert(name, val);
            }
        }
    }
    map
}

/// Serializes a parsed style map back into a `style` attribute value.
pub fn serialize_style_declarations(map: &indexmap::IndexMap<String, String>) -> String {
    map.iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}
