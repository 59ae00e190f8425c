//! Error types for the signup-prefill library.

use std::io;
use thiserror::Error;

/// Result type alias for signup-prefill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an extraction run.
///
/// Only structural problems surface here. Anomalies inside individual
/// cells or rows are replaced by empty values instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// The package contains no worksheet part.
    #[error("No worksheet found in xlsx")]
    NoWorksheet,

    /// The worksheet has no rows at all.
    #[error("No data rows found")]
    NoDataRows,

    /// A required header is absent from the first row.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Error while serializing output.
    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error comes from the survey layout rather than the file format.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Error::MissingColumn(_))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::NoWorksheet.to_string(), "No worksheet found in xlsx");
        assert_eq!(Error::NoDataRows.to_string(), "No data rows found");

        let err = Error::MissingColumn("Q4你的性别是?".to_string());
        assert_eq!(err.to_string(), "Missing column: Q4你的性别是?");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_schema_error());
    }

    #[test]
    fn test_schema_error_class() {
        assert!(Error::MissingColumn("x".into()).is_schema_error());
        assert!(!Error::NoDataRows.is_schema_error());
    }
}
