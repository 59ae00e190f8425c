//! XLSX table extraction.
//!
//! Reads the first worksheet of an Office Open XML spreadsheet into a dense
//! [`Table`](crate::model::Table) of strings. Styles, formulas, dates and
//! every other worksheet are ignored; each cell becomes its text.
//!
//! # Example
//!
//! ```no_run
//! use signup_prefill::xlsx::TableExtractor;
//!
//! let table = TableExtractor::open("responses.xlsx")?.into_table()?;
//!
//! if let Some(header) = table.header() {
//!     println!("{} columns", header.len());
//! }
//! # Ok::<(), signup_prefill::Error>(())
//! ```

mod namespace;
mod parser;
mod reference;
mod shared_strings;
mod worksheet;

pub use parser::TableExtractor;
pub use reference::{column_index, column_letters, MAX_COLUMN};
pub use shared_strings::SharedStrings;
pub use worksheet::{densify_row, parse_worksheet};
