//! Node type enumeration for DOM nodes.
//!
//! This workspace models exactly the four node kinds the DOM core builds
//! (document, element, text, comment); DOM4's `Attribute`,
//! `ProcessingInstruction`, `CDataSection` and `DocumentType` numbers are
//! not assigned here since there is no node kind to wear them.

/// Node type enumeration, values matching the DOM Level 4 numbering for
/// the node kinds this crate models.
///
/// # Examples
///
/// ```
/// use dom_types::NodeType;
///
/// let node_type = NodeType::Element;
/// assert_eq!(node_type as u16, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u16)]
pub enum NodeType {
    /// Element node (e.g., `<div>`, `<p>`)
    Element = 1,
    /// Text node containing character data
    Text = 3,
    /// Comment node
    Comment = 8,
    /// Document node (root of the tree)
    Document = 9,
}

impl NodeType {
    /// Returns the numeric value of the node type as defined in the DOM
    /// specification.
    ///
    /// # Examples
    ///
    /// ```
    /// use dom_types::NodeType;
    ///
    /// assert_eq!(NodeType::Element.as_u16(), 1);
    /// assert_eq!(NodeType::Text.as_u16(), 3);
    /// ```
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}
