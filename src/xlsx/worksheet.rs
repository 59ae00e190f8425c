//! Worksheet parsing and row densification.

use super::namespace::ScopedReader;
use super::reference::column_index;
use super::shared_strings::{RichText, SharedStrings};
use crate::error::Result;
use crate::model::{CellKind, RawCell, Table};
use quick_xml::events::{BytesStart, Event};

/// A `<c>` element being read.
#[derive(Debug, Default)]
struct PendingCell {
    reference: Option<String>,
    kind: CellKind,
    value: String,
    in_value: bool,
    inline: Option<RichText>,
    inline_text: Option<String>,
}

impl PendingCell {
    fn from_start(e: &BytesStart<'_>) -> Self {
        let mut reference = None;
        let mut cell_type = None;
        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                b"r" => reference = Some(String::from_utf8_lossy(&attr.value).into_owned()),
                b"t" => cell_type = Some(String::from_utf8_lossy(&attr.value).into_owned()),
                _ => {}
            }
        }
        Self {
            reference,
            kind: CellKind::from_type_attr(cell_type.as_deref()),
            ..Default::default()
        }
    }

    /// Resolve the cell text; `None` when the cell has no reference.
    fn finish(self, shared_strings: &SharedStrings) -> Option<RawCell> {
        let reference = self.reference?;
        let value = match self.kind {
            CellKind::Literal => self.value,
            CellKind::SharedString => shared_strings.resolve(&self.value),
            CellKind::InlineString => self.inline_text.unwrap_or(self.value),
        };
        Some(RawCell {
            reference,
            value,
            kind: self.kind,
        })
    }
}

/// Lay out one row's cells by column.
///
/// The row is as wide as its right-most cell; gaps are empty strings and a
/// later cell overwrites an earlier one at the same column. Cells whose
/// reference has no usable column are dropped.
pub fn densify_row(cells: &[RawCell]) -> Vec<String> {
    let placed: Vec<(usize, &str)> = cells
        .iter()
        .filter_map(|cell| match column_index(&cell.reference) {
            Some(col) => Some((col, cell.value.as_str())),
            None => {
                tracing::trace!(reference = %cell.reference, "skipping cell without a usable column");
                None
            }
        })
        .collect();

    let width = placed.iter().map(|(col, _)| *col).max().unwrap_or(0);
    let mut row = vec![String::new(); width];
    for (col, value) in placed {
        row[col - 1] = value.to_string();
    }
    row
}

/// Parse worksheet XML into a table.
///
/// Every `<row>` becomes one table row, in document order, including rows
/// with no cells.
pub fn parse_worksheet(xml: &str, shared_strings: &SharedStrings) -> Result<Table> {
    let mut table = Table::new();
    let mut reader = ScopedReader::from_str(xml);

    let mut buf = Vec::new();
    let mut row: Option<Vec<RawCell>> = None;
    let mut cell: Option<PendingCell> = None;

    loop {
        let scoped = reader.read_event_into(&mut buf)?;
        match (&scoped.event, scoped.tag()) {
            (Event::Start(_), Some(b"row")) => row = Some(Vec::new()),
            (Event::Empty(_), Some(b"row")) => table.add_row(Vec::new()),
            (Event::End(_), Some(b"row")) => {
                if let Some(cells) = row.take() {
                    table.add_row(densify_row(&cells));
                }
            }
            (Event::Start(e), Some(b"c")) if row.is_some() => {
                cell = Some(PendingCell::from_start(e));
            }
            (Event::Empty(e), Some(b"c")) => {
                if let (Some(cells), Some(raw)) = (
                    row.as_mut(),
                    PendingCell::from_start(e).finish(shared_strings),
                ) {
                    cells.push(raw);
                }
            }
            (Event::End(_), Some(b"c")) => {
                if let (Some(cells), Some(pending)) = (row.as_mut(), cell.take()) {
                    cells.extend(pending.finish(shared_strings));
                }
            }
            (Event::Start(_), Some(tag)) => {
                if let Some(ref mut pending) = cell {
                    match (tag, pending.inline.as_mut()) {
                        (b"v", None) => pending.in_value = true,
                        (b"is", None) => pending.inline = Some(RichText::default()),
                        (_, Some(rich)) => rich.open(tag),
                        _ => {}
                    }
                }
            }
            (Event::Empty(_), Some(b"is")) => {
                if let Some(ref mut pending) = cell {
                    pending.inline_text = Some(String::new());
                }
            }
            (Event::End(_), Some(tag)) => {
                if let Some(ref mut pending) = cell {
                    match tag {
                        b"v" => pending.in_value = false,
                        b"is" => {
                            pending.inline_text = pending.inline.take().map(|mut r| r.finish());
                        }
                        _ => {
                            if let Some(rich) = pending.inline.as_mut() {
                                rich.close(tag);
                            }
                        }
                    }
                }
            }
            (Event::Eof, _) => break,
            _ => {
                if let (Some(text), Some(pending)) = (scoped.text(), cell.as_mut()) {
                    if let Some(rich) = pending.inline.as_mut() {
                        rich.push_text(&text);
                    } else if pending.in_value {
                        pending.value.push_str(&text);
                    }
                }
            }
        }
        buf.clear();
    }

    tracing::debug!(rows = table.len(), "parsed worksheet");
    Ok(table)
}
