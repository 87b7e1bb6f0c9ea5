//! The error taxonomy shared by every crate in this workspace.
//!
//! The DOM core recovers locally from most malformed input (see the HTML
//! tokenizer); `DomError` covers only the failures meant to surface to a
//! caller at an API boundary.

use thiserror::Error;

/// Errors raised by the DOM core's public API.
///
/// Every fallible operation in this workspace returns `Result<T, DomError>`.
///
/// # Examples
///
/// ```
/// use dom_types::DomError;
///
/// let error = DomError::invalid_selector("div[");
/// assert!(error.to_string().contains("div["));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomError {
    /// A selector string failed to parse.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// `remove_child`/`replace_child` target was not a child of the node
    /// it was called on, or `insert_before`'s reference node was not a
    /// child.
    #[error("not found: {0}")]
    NotFound(String),

    /// Inserting a node would make it its own ancestor.
    #[error("hierarchy error: {0}")]
    HierarchyError(String),

    /// The tokenizer hit a structural failure it could not recover from
    /// locally (currently only an unterminated comment).
    #[error("malformed html: {0}")]
    MalformedHtml(String),

    /// An internal invariant was violated. Guards against broken
    /// arena/tree state; should never occur in correct code.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomError {
    /// Builds an [`DomError::InvalidSelector`] with the given selector text.
    pub fn invalid_selector(selector: impl Into<String>) -> Self {
        DomError::InvalidSelector(selector.into())
    }

    /// Builds a [`DomError::NotFound`] with a short description.
    pub fn not_found(what: impl Into<String>) -> Self {
        DomError::NotFound(what.into())
    }

    /// Builds a [`DomError::HierarchyError`] with a short description.
    pub fn hierarchy_error(what: impl Into<String>) -> Self {
        DomError::HierarchyError(what.into())
    }

    /// Builds a [`DomError::MalformedHtml`] with a short description.
    pub fn malformed_html(what: impl Into<String>) -> Self {
        DomError::MalformedHtml(what.into())
    }

    /// Builds a [`DomError::Internal`] with a short description.
    pub fn internal(what: impl Into<String>) -> Self {
        DomError::Internal(what.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_selector_message() {
        let err = DomError::invalid_selector("a[");
        assert_eq!(err.to_string(), "invalid selector: a[");
    }

    #[test]
    fn not_found_message() {
        let err = DomError::not_found("reference node is not a child");
        assert_eq!(err.to_string(), "not found: reference node is not a child");
    }

    #[test]
    fn equality() {
        assert_eq!(DomError::not_found("x"), DomError::not_found("x"));
        assert_ne!(DomError::not_found("x"), DomError::not_found("y"));
    }

    #[test]
    fn clone_roundtrip() {
        let err = DomError::hierarchy_error("cycle");
        assert_eq!(err.clone(), err);
    }
}
