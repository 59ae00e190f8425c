//! # signup-prefill
//!
//! Turns sign-up survey exports (`.xlsx`) into user-profile records ready
//! for import.
//!
//! Extraction reads the first worksheet of the package into a dense table of
//! strings. Mapping then matches the header row against the survey's question
//! texts, normalizes each answer and drops rows without (or repeating) a
//! contact handle.
//!
//! ## Quick Start
//!
//! ```no_run
//! use signup_prefill::{prefill_from_file, mapper::PrefillOptions, render::write_outputs};
//!
//! let outcome = prefill_from_file("responses.xlsx", &PrefillOptions::default())?;
//! let paths = write_outputs("prefill_users.json", &outcome.records)?;
//!
//! println!("rows: {}", outcome.records.len());
//! println!("output: {}", paths.json.display());
//! # Ok::<(), signup_prefill::Error>(())
//! ```
//!
//! ## Table Extraction Only
//!
//! ```no_run
//! let table = signup_prefill::extract_table("responses.xlsx")?;
//! for row in table.data_rows() {
//!     println!("{}", row.join(" | "));
//! }
//! # Ok::<(), signup_prefill::Error>(())
//! ```

pub mod container;
pub mod error;
pub mod mapper;
pub mod model;
pub mod render;
pub mod xlsx;

// Re-exports
pub use container::SpreadsheetContainer;
pub use error::{Error, Result};
pub use mapper::{MappingOutcome, MappingReport, PrefillOptions, RecordMapper};
pub use model::{CellKind, RawCell, Table, UserRecord};
pub use xlsx::TableExtractor;

use std::path::Path;

/// Read the first worksheet of an `.xlsx` file into a table.
///
/// # Example
///
/// ```no_run
/// use signup_prefill::extract_table;
///
/// let table = extract_table("responses.xlsx")?;
/// println!("Rows: {}", table.len());
/// # Ok::<(), signup_prefill::Error>(())
/// ```
pub fn extract_table(path: impl AsRef<Path>) -> Result<Table> {
    TableExtractor::open(path)?.into_table()
}

/// Extract a survey export and map its rows to user records.
///
/// The package is fully read and released before mapping starts. A worksheet
/// without any rows fails with [`Error::NoDataRows`].
pub fn prefill_from_file(path: impl AsRef<Path>, options: &PrefillOptions) -> Result<MappingOutcome> {
    let table = extract_table(path)?;
    if table.is_empty() {
        return Err(Error::NoDataRows);
    }
    RecordMapper::new(options.clone()).map_table(&table)
}

/// Map the rows of an in-memory `.xlsx` package.
pub fn prefill_from_bytes(data: Vec<u8>, options: &PrefillOptions) -> Result<MappingOutcome> {
    let table = TableExtractor::from_bytes(data)?.into_table()?;
    if table.is_empty() {
        return Err(Error::NoDataRows);
    }
    RecordMapper::new(options.clone()).map_table(&table)
}
