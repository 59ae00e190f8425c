//! Synthetic `.xlsx` packages for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

/// How a builder writes its string cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strings {
    /// `t="s"` cells pointing into `xl/sharedStrings.xml`
    Shared,
    /// `t="inlineStr"` cells, no shared string part
    Inline,
}

/// Builds a minimal workbook whose first sheet holds the given rows.
///
/// Empty strings in a row are left out of the sheet entirely, so rows come
/// out sparse the way spreadsheet tools write them.
pub struct XlsxBuilder {
    rows: Vec<Vec<String>>,
    strings: Strings,
    extra_sheets: Vec<(String, String)>,
}

impl XlsxBuilder {
    pub fn new(strings: Strings) -> Self {
        Self {
            rows: Vec::new(),
            strings,
            extra_sheets: Vec::new(),
        }
    }

    pub fn row<S: AsRef<str>>(mut self, cells: &[S]) -> Self {
        self.rows
            .push(cells.iter().map(|c| c.as_ref().to_string()).collect());
        self
    }

    /// Add a worksheet part written after `sheet1.xml`.
    pub fn extra_sheet(mut self, name: &str, xml: &str) -> Self {
        self.extra_sheets.push((name.to_string(), xml.to_string()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut shared: Vec<String> = Vec::new();
        let mut sheet = format!(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{MAIN_NS}"><sheetData>"#);

        for (r, row) in self.rows.iter().enumerate() {
            sheet.push_str(&format!(r#"<row r="{}">"#, r + 1));
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let reference = format!("{}{}", column_name(c + 1), r + 1);
                match self.strings {
                    Strings::Shared => {
                        let idx = shared.iter().position(|s| s == value).unwrap_or_else(|| {
                            shared.push(value.clone());
                            shared.len() - 1
                        });
                        sheet.push_str(&format!(r#"<c r="{reference}" t="s"><v>{idx}</v></c>"#));
                    }
                    Strings::Inline => {
                        sheet.push_str(&format!(
                            r#"<c r="{reference}" t="inlineStr"><is><t>{}</t></is></c>"#,
                            escape(value)
                        ));
                    }
                }
            }
            sheet.push_str("</row>");
        }
        sheet.push_str("</sheetData></worksheet>");

        let mut parts = vec![
            ("[Content_Types].xml".to_string(), CONTENT_TYPES.to_string()),
            ("xl/workbook.xml".to_string(), WORKBOOK.to_string()),
        ];
        if self.strings == Strings::Shared {
            let items: String = shared
                .iter()
                .map(|s| format!("<si><t>{}</t></si>", escape(s)))
                .collect();
            parts.push((
                "xl/sharedStrings.xml".to_string(),
                format!(r#"<sst xmlns="{MAIN_NS}" count="{0}" uniqueCount="{0}">{items}</sst>"#, shared.len()),
            ));
        }
        parts.push(("xl/worksheets/sheet1.xml".to_string(), sheet));
        parts.extend(self.extra_sheets);

        zip_parts(&parts)
    }
}

pub fn zip_parts(parts: &[(String, String)]) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();
        for (name, body) in parts {
            zip.start_file(name.as_str(), options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buffer
}

fn column_name(mut index: usize) -> String {
    let mut name = Vec::new();
    while index > 0 {
        name.push(b'A' + ((index - 1) % 26) as u8);
        index = (index - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
