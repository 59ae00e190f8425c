//! ZIP package access for spreadsheet files.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Part holding the workbook-wide shared string table.
pub const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";

/// Worksheet parts are named `xl/worksheets/sheetN.xml`.
pub const WORKSHEET_PREFIX: &str = "xl/worksheets/sheet";

/// Suffix shared by all worksheet parts.
pub const WORKSHEET_SUFFIX: &str = ".xml";

/// Byte order detected at the start of an XML part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    /// Encoding announced by a byte order mark, with the length of the mark.
    fn sniff(bytes: &[u8]) -> Option<(Self, usize)> {
        match bytes {
            [0xEF, 0xBB, 0xBF, ..] => Some((Self::Utf8, 3)),
            [0xFF, 0xFE, ..] => Some((Self::Utf16Le, 2)),
            [0xFE, 0xFF, ..] => Some((Self::Utf16Be, 2)),
            _ => None,
        }
    }

    /// Guess UTF-16 from the zero bytes ASCII markup leaves behind.
    fn guess_utf16(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [_, 0, _, 0, ..] => Some(Self::Utf16Le),
            [0, _, 0, _, ..] => Some(Self::Utf16Be),
            _ => None,
        }
    }
}

fn invalid_data<E>(err: E) -> Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(invalid_data)
}

/// Rewrite `encoding="UTF-16"` in the XML declaration once the text is UTF-8.
fn relabel_declaration(content: String) -> String {
    if !content.starts_with("<?xml") {
        return content;
    }
    let Some(end) = content.find("?>") else {
        return content;
    };
    let (decl, rest) = content.split_at(end + 2);
    let mut fixed = decl.to_string();
    for quote in ['"', '\''] {
        for label in ["UTF-16", "utf-16"] {
            fixed = fixed.replace(
                &format!("encoding={quote}{label}{quote}"),
                &format!("encoding={quote}UTF-8{quote}"),
            );
        }
    }
    fixed + rest
}

/// Decode the bytes of an XML part into a UTF-8 string.
///
/// Packages written by Excel are UTF-8, but some exporters emit UTF-16 with or
/// without a byte order mark.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if let Some((encoding, bom)) = TextEncoding::sniff(bytes) {
        let body = &bytes[bom..];
        return match encoding {
            TextEncoding::Utf8 => String::from_utf8(body.to_vec()).map_err(invalid_data),
            TextEncoding::Utf16Le => decode_utf16(body, u16::from_le_bytes).map(relabel_declaration),
            TextEncoding::Utf16Be => decode_utf16(body, u16::from_be_bytes).map(relabel_declaration),
        };
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    match TextEncoding::guess_utf16(bytes) {
        Some(TextEncoding::Utf16Le) => decode_utf16(bytes, u16::from_le_bytes),
        Some(TextEncoding::Utf16Be) => decode_utf16(bytes, u16::from_be_bytes),
        _ => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// A spreadsheet package opened as an in-memory ZIP archive.
pub struct SpreadsheetContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl SpreadsheetContainer {
    /// Open a package from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use signup_prefill::container::SpreadsheetContainer;
    ///
    /// let container = SpreadsheetContainer::open("responses.xlsx")?;
    /// # Ok::<(), signup_prefill::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Open a package from its raw bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        tracing::debug!(parts = archive.len(), "opened spreadsheet package");
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Open a package from any seekable reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read an XML part as text.
    pub fn read_xml(&self, part: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(part)
            .map_err(|_| Error::MissingComponent(part.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        decode_xml_bytes(&bytes)
    }

    /// Check if a part exists in the package.
    pub fn exists(&self, part: &str) -> bool {
        self.archive.borrow().file_names().any(|n| n == part)
    }

    /// List all part names in archive order.
    pub fn list_files(&self) -> Vec<String> {
        self.archive
            .borrow()
            .file_names()
            .map(String::from)
            .collect()
    }

    /// First part, in archive order, whose name starts with `prefix` and ends with `suffix`.
    pub fn first_part_matching(&self, prefix: &str, suffix: &str) -> Option<String> {
        self.archive
            .borrow()
            .file_names()
            .find(|n| n.starts_with(prefix) && n.ends_with(suffix))
            .map(String::from)
    }

    /// The worksheet that extraction reads: the first `xl/worksheets/sheet*.xml` part.
    pub fn first_worksheet(&self) -> Option<String> {
        self.first_part_matching(WORKSHEET_PREFIX, WORKSHEET_SUFFIX)
    }
}

impl std::fmt::Debug for SpreadsheetContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpreadsheetContainer")
            .field("parts", &self.archive.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn package(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut buffer = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
            let options = SimpleFileOptions::default();
            for (name, body) in parts {
                zip.start_file(*name, options).unwrap();
                zip.write_all(body.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_first_worksheet_in_archive_order() {
        let data = package(&[
            ("xl/workbook.xml", "<workbook/>"),
            ("xl/worksheets/_rels/sheet2.xml.rels", "<Relationships/>"),
            ("xl/worksheets/sheet2.xml", "<worksheet/>"),
            ("xl/worksheets/sheet1.xml", "<worksheet/>"),
        ]);
        let container = SpreadsheetContainer::from_bytes(data).unwrap();
        assert_eq!(
            container.first_worksheet().as_deref(),
            Some("xl/worksheets/sheet2.xml")
        );
        assert!(container.exists("xl/workbook.xml"));
        assert!(!container.exists(SHARED_STRINGS_PART));
        assert_eq!(container.list_files().len(), 4);
    }

    #[test]
    fn test_no_worksheet() {
        let data = package(&[("xl/workbook.xml", "<workbook/>")]);
        let container = SpreadsheetContainer::from_bytes(data).unwrap();
        assert!(container.first_worksheet().is_none());
    }

    #[test]
    fn test_missing_part() {
        let data = package(&[("xl/workbook.xml", "<workbook/>")]);
        let container = SpreadsheetContainer::from_bytes(data).unwrap();
        let err = container.read_xml(SHARED_STRINGS_PART).unwrap_err();
        assert!(matches!(err, Error::MissingComponent(ref p) if p == SHARED_STRINGS_PART));
    }

    #[test]
    fn test_not_a_zip() {
        let err = SpreadsheetContainer::from_bytes(b"name,sex\n".to_vec()).unwrap_err();
        assert!(matches!(err, Error::ZipArchive(_)));
    }

    #[test]
    fn test_decode_xml_bytes() {
        let utf16_le = b"\xFF\xFE<\0?\0x\0m\0l\0>\0";
        assert_eq!(decode_xml_bytes(utf16_le).unwrap(), "<?xml>");

        let utf16_be = b"\xFE\xFF\0<\0?\0x\0m\0l\0>";
        assert_eq!(decode_xml_bytes(utf16_be).unwrap(), "<?xml>");

        let utf8_bom = b"\xEF\xBB\xBF<t>\xE7\x94\xB7</t>";
        assert_eq!(decode_xml_bytes(utf8_bom).unwrap(), "<t>男</t>");

        assert_eq!(decode_xml_bytes(b"<t/>").unwrap(), "<t/>");
    }

    #[test]
    fn test_utf16_declaration_relabelled() {
        let text = r#"<?xml version="1.0" encoding="UTF-16"?><sst/>"#;
        let mut bytes = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let decoded = decode_xml_bytes(&bytes).unwrap();
        assert_eq!(decoded, r#"<?xml version="1.0" encoding="UTF-8"?><sst/>"#);
    }
}
