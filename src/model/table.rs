//! Dense string tables extracted from a worksheet.

/// Read a cell from a row, yielding an empty string when the row is too short.
///
/// Rows are only as wide as their right-most populated cell, so every column
/// read goes through this check.
pub fn cell_at(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// A worksheet as rows of text.
///
/// Each row is dense up to its own right-most cell; rows are not padded to a
/// common width. Row 0 is conventionally the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Rows in document order
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from prebuilt rows.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Append a row.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row, if any.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }

    /// Bounds-checked cell read; missing rows and columns read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows.get(row).map(|r| cell_at(r, col)).unwrap_or("")
    }
}
