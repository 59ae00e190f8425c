//! Table extraction from a spreadsheet package.

use crate::container::{SpreadsheetContainer, SHARED_STRINGS_PART};
use crate::error::{Error, Result};
use crate::model::Table;
use std::path::Path;

use super::shared_strings::SharedStrings;
use super::worksheet::parse_worksheet;

/// Reads the first worksheet of an `.xlsx` package into a [`Table`].
pub struct TableExtractor {
    container: SpreadsheetContainer,
    shared_strings: SharedStrings,
}

impl TableExtractor {
    /// Open an XLSX file for extraction.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = SpreadsheetContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create an extractor from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = SpreadsheetContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create an extractor from an opened package.
    ///
    /// The shared string table is parsed once here. A package without one
    /// gets an empty table.
    pub fn from_container(container: SpreadsheetContainer) -> Result<Self> {
        let shared_strings = if container.exists(SHARED_STRINGS_PART) {
            SharedStrings::parse(&container.read_xml(SHARED_STRINGS_PART)?)?
        } else {
            tracing::debug!("package has no shared string table");
            SharedStrings::default()
        };

        Ok(Self {
            container,
            shared_strings,
        })
    }

    /// Name of the worksheet part that [`extract`](Self::extract) reads.
    pub fn worksheet_part(&self) -> Result<String> {
        self.container.first_worksheet().ok_or(Error::NoWorksheet)
    }

    /// Extract the first worksheet.
    ///
    /// An empty worksheet yields an empty table; deciding whether that is an
    /// error is up to the caller.
    pub fn extract(&self) -> Result<Table> {
        let part = self.worksheet_part()?;
        tracing::debug!(part = %part, "reading worksheet");
        let xml = self.container.read_xml(&part)?;
        parse_worksheet(&xml, &self.shared_strings)
    }

    /// Extract the first worksheet and release the package.
    pub fn into_table(self) -> Result<Table> {
        self.extract()
    }

    /// Get the shared string table.
    pub fn shared_strings(&self) -> &SharedStrings {
        &self.shared_strings
    }
}
