//! Cross-document identifiers.
//!
//! Node identity within a single document is [`dom_storage::NodeId`], a
//! generational index into that document's arena. This module only adds
//! [`DocumentId`], since a host application may hold more than one
//! `Document` at once (e.g. a main document plus detached fragments parsed
//! for comparison) and wants a cheap way to tell them apart.

/// Unique identifier for a document, distinct from any other `Document` a
/// host process has created.
///
/// # Examples
///
/// ```
/// use dom_types::DocumentId;
///
/// let main_doc: DocumentId = DocumentId::new(1);
/// let other_doc: DocumentId = DocumentId::new(2);
/// assert_ne!(main_doc, other_doc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DocumentId(u64);

impl DocumentId {
    /// Wraps a raw numeric id.
    pub fn new(raw: u64) -> Self {
        DocumentId(raw)
    }

    /// Returns the raw numeric id.
    pub fn raw(self) -> u64 {
        self.0
    }
}
