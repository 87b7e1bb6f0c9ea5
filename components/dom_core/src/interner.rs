//! Tag/attribute-name canonicalization (C1).
//!
//! HTML tag and attribute names are matched case-insensitively; this
//! workspace canonicalizes both to lowercase at the boundary (tokenizer
//! output, `set_attribute`) so every downstream comparison is a plain
//! string equality. A small static table of the ~100 most common names
//! avoids a fresh heap allocation for the overwhelming majority of real
//! HTML, falling back to an ordinary lowercased `String` for anything
//! else — the same two-tier shape `string_cache`'s atom tables use,
//! hand-written here since this crate's tokenizer grammar is intentionally
//! smaller than the full HTML tag set those crates intern.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const COMMON_TAGS: &[&str] = &[
    "html", "head", "body", "div", "span", "p", "a", "img", "ul", "ol", "li", "table", "tr", "td",
    "th", "thead", "tbody", "tfoot", "form", "input", "button", "select", "option", "textarea",
    "label", "h1", "h2", "h3", "h4", "h5", "h6", "header", "footer", "nav", "main", "section",
    "article", "aside", "br", "hr", "meta", "link", "title", "script", "style", "pre", "code",
    "em", "strong", "b", "i", "u", "small", "blockquote", "figure", "figcaption", "video",
    "audio", "source", "track", "canvas", "svg", "iframe", "embed", "object", "param", "area",
    "map", "base", "col", "colgroup", "wbr", "template", "dialog", "details", "summary",
];

const COMMON_ATTRS: &[&str] = &[
    "id", "class", "style", "href", "src", "alt", "title", "name", "type", "value", "placeholder",
    "disabled", "checked", "required", "readonly", "maxlength", "minlength", "min", "max",
    "pattern", "for", "action", "method", "target", "rel", "width", "height", "data-id",
    "data-value", "role", "tabindex", "aria-label", "aria-hidden",
];

static COMMON_TAG_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| COMMON_TAGS.iter().copied().collect());
static COMMON_ATTR_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| COMMON_ATTRS.iter().copied().collect());

/// Canonicalizes an HTML tag name: lowercased, with the common-name table
/// consulted first to skip an allocation when possible.
pub fn canon_tag(s: &str) -> String {
    canonicalize(s, &COMMON_TAG_SET)
}

/// Canonicalizes an HTML attribute name: lowercased, same common-name
/// fast path as [`canon_tag`].
pub fn canon_attr(s: &str) -> String {
    canonicalize(s, &COMMON_ATTR_SET)
}

fn canonicalize(s: &str, table: &HashSet<&'static str>) -> String {
    if s.bytes().all(|b| !b.is_ascii_uppercase()) {
        if let Some(&interned) = table.get(s) {
            return interned.to_string();
        }
        return s.to_string();
    }
    let lowered = s.to_ascii_lowercase();
    if let Some(&interned) = table.get(lowered.as_str()) {
        return interned.to_string();
    }
    lowered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_tag_names() {
        assert_eq!(canon_tag("DIV"), "div");
        assert_eq!(canon_tag("Span"), "span");
        assert_eq!(canon_tag("div"), "div");
    }

    #[test]
    fn lowercases_attribute_names() {
        assert_eq!(canon_attr("CLASS"), "class");
        assert_eq!(canon_attr("Href"), "href");
    }

    #[test]
    fn uncommon_names_still_canonicalize() {
        assert_eq!(canon_tag("MyCustomElement"), "mycustomelement");
        assert_eq!(canon_attr("data-MY-Thing"), "data-my-thing");
    }
}
