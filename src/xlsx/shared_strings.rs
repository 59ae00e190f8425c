//! XLSX shared strings parsing.

use super::namespace::ScopedReader;
use crate::error::Result;
use quick_xml::events::Event;

/// Collects the text of a string item (`<si>` or `<is>`).
///
/// Text from every `<t>` below the item is joined with no separator, which
/// covers both plain items and rich text split into `<r>` runs. Phonetic
/// guides (`<rPh>`) are skipped.
#[derive(Debug, Default)]
pub(crate) struct RichText {
    text: String,
    in_t: bool,
    phonetic_depth: usize,
}

impl RichText {
    /// Track an element opening inside the item.
    pub fn open(&mut self, tag: &[u8]) {
        // Readings inside `rPh` are dropped, so a plain descendant `t` search
        // would yield more text than this for annotated items.
        match tag {
            b"t" if self.phonetic_depth == 0 => self.in_t = true,
            b"rPh" => self.phonetic_depth += 1,
            _ => {}
        }
    }

    /// Track an element closing inside the item.
    pub fn close(&mut self, tag: &[u8]) {
        match tag {
            b"t" => self.in_t = false,
            b"rPh" => self.phonetic_depth = self.phonetic_depth.saturating_sub(1),
            _ => {}
        }
    }

    pub fn push_text(&mut self, text: &str) {
        if self.in_t {
            self.text.push_str(text);
        }
    }

    /// Take the collected text and reset for the next item.
    pub fn finish(&mut self) -> String {
        self.in_t = false;
        self.phonetic_depth = 0;
        std::mem::take(&mut self.text)
    }
}

/// Shared strings table.
#[derive(Debug, Clone, Default)]
pub struct SharedStrings {
    /// All strings in order
    strings: Vec<String>,
}

impl SharedStrings {
    /// Parse shared strings from XML content.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut strings = Vec::new();
        let mut reader = ScopedReader::from_str(xml);

        let mut buf = Vec::new();
        let mut item: Option<RichText> = None;

        loop {
            let scoped = reader.read_event_into(&mut buf)?;
            match (&scoped.event, scoped.tag()) {
                (Event::Start(_), Some(b"si")) => item = Some(RichText::default()),
                (Event::Empty(_), Some(b"si")) => strings.push(String::new()),
                (Event::Start(_), Some(tag)) => {
                    if let Some(ref mut rich) = item {
                        rich.open(tag);
                    }
                }
                (Event::End(_), Some(b"si")) => {
                    if let Some(mut rich) = item.take() {
                        strings.push(rich.finish());
                    }
                }
                (Event::End(_), Some(tag)) => {
                    if let Some(ref mut rich) = item {
                        rich.close(tag);
                    }
                }
                (Event::Eof, _) => break,
                _ => {
                    if let (Some(text), Some(rich)) = (scoped.text(), item.as_mut()) {
                        rich.push_text(&text);
                    }
                }
            }
            buf.clear();
        }

        tracing::debug!(count = strings.len(), "parsed shared strings");
        Ok(Self { strings })
    }

    /// Get a string by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Resolve the `<v>` text of a shared-string cell.
    ///
    /// Anything that is not a valid index into the table resolves to an
    /// empty string.
    pub fn resolve(&self, raw_index: &str) -> String {
        raw_index
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|idx| self.get(idx))
            .unwrap_or_default()
            .to_string()
    }

    /// Get the count of shared strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
