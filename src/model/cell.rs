//! Worksheet cell structures.

/// How a cell stores its text, from the `t` attribute of `<c>`.
///
/// Only the string encodings matter; numbers, booleans, errors and formula
/// strings are all carried as their literal `<v>` text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellKind {
    /// Value text is used as-is
    #[default]
    Literal,
    /// Value is an index into the shared string table (`t="s"`)
    SharedString,
    /// Text lives in a nested `<is>` element (`t="inlineStr"`)
    InlineString,
}

impl CellKind {
    /// Map a `t` attribute value; `None` means the attribute was absent.
    pub fn from_type_attr(value: Option<&str>) -> Self {
        match value {
            Some("s") => CellKind::SharedString,
            Some("inlineStr") => CellKind::InlineString,
            _ => CellKind::Literal,
        }
    }
}

/// A cell as read from the worksheet, before densification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCell {
    /// A1-style reference, e.g. "B7"
    pub reference: String,
    /// Resolved text
    pub value: String,
    /// Encoding the text came from
    pub kind: CellKind,
}

impl RawCell {
    /// Create a cell.
    pub fn new(reference: impl Into<String>, value: impl Into<String>, kind: CellKind) -> Self {
        Self {
            reference: reference.into(),
            value: value.into(),
            kind,
        }
    }
}
