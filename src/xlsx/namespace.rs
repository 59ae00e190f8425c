//! Namespace-agnostic element matching.
//!
//! Spreadsheet producers disagree on the main namespace (transitional vs.
//! strict SpreadsheetML, or none at all). The namespace of the root element is
//! taken as the document namespace and every later element is matched against
//! it by local name.

use crate::error::Result;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// The namespace declared by a document's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DocumentNamespace {
    uri: Option<Vec<u8>>,
}

impl DocumentNamespace {
    /// Take the namespace the root element resolved to; unqualified roots yield none.
    pub fn discover(root: &ResolveResult<'_>) -> Self {
        match root {
            ResolveResult::Bound(Namespace(uri)) => Self {
                uri: Some(uri.to_vec()),
            },
            _ => Self::default(),
        }
    }

    /// Whether an element resolved to this namespace.
    ///
    /// Elements bound to an undeclared prefix never match.
    pub fn contains(&self, resolved: &ResolveResult<'_>) -> bool {
        match (resolved, &self.uri) {
            (ResolveResult::Bound(Namespace(ns)), Some(uri)) => *ns == uri.as_slice(),
            (ResolveResult::Unbound, None) => true,
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn uri(&self) -> Option<&[u8]> {
        self.uri.as_deref()
    }
}

/// An event tagged with whether its element belongs to the document namespace.
pub(crate) struct ScopedEvent<'b> {
    pub event: Event<'b>,
    in_scope: bool,
}

impl ScopedEvent<'_> {
    /// Local name of a start, empty or end element in the document namespace.
    pub fn tag(&self) -> Option<&[u8]> {
        if !self.in_scope {
            return None;
        }
        match &self.event {
            Event::Start(e) | Event::Empty(e) => Some(e.local_name().into_inner()),
            Event::End(e) => Some(e.local_name().into_inner()),
            _ => None,
        }
    }

    /// Text content of a text or CDATA event.
    pub fn text(&self) -> Option<String> {
        match &self.event {
            Event::Text(e) => Some(e.unescape().unwrap_or_default().into_owned()),
            Event::CData(e) => Some(String::from_utf8_lossy(e).into_owned()),
            _ => None,
        }
    }
}

/// XML reader that discovers the document namespace from the root element.
pub(crate) struct ScopedReader<'x> {
    reader: NsReader<&'x [u8]>,
    namespace: Option<DocumentNamespace>,
}

impl<'x> ScopedReader<'x> {
    /// Create a reader over an XML string. Text is not trimmed.
    pub fn from_str(xml: &'x str) -> Self {
        Self {
            reader: NsReader::from_str(xml),
            namespace: None,
        }
    }

    /// Read the next event.
    pub fn read_event_into<'b>(&mut self, buf: &'b mut Vec<u8>) -> Result<ScopedEvent<'b>> {
        let (resolved, event) = self.reader.read_resolved_event_into(buf)?;
        let in_scope = match event {
            Event::Start(_) | Event::Empty(_) | Event::End(_) => self
                .namespace
                .get_or_insert_with(|| DocumentNamespace::discover(&resolved))
                .contains(&resolved),
            _ => false,
        };
        Ok(ScopedEvent { event, in_scope })
    }

    #[cfg(test)]
    pub fn namespace(&self) -> Option<&DocumentNamespace> {
        self.namespace.as_ref()
    }
}
