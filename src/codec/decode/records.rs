use std::iter::FusedIterator;

use crate::codec::header::{decode_header, HEADER_LEN};
use crate::codec::types::Record;

/// Iterator over the top-level records of a payload string.
///
/// Records are yielded in the order they appear. The first malformed record
/// (short header, non-digit header characters, or a declared length running
/// past the end of the input) ends the iteration and marks the iterator as
/// malformed; nothing after it is read.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    rest: &'a str,
    malformed: bool,
}

/// Returns an iterator over the top-level records of `data`.
pub fn records(data: &str) -> Records<'_> {
    Records { rest: data, malformed: false }
}

impl<'a> Records<'a> {
    /// True once a malformed record has been hit.
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    fn fail(&mut self, reason: &str) -> Option<Record<'a>> {
        tracing::debug!(remaining = self.rest.len(), reason, "malformed TLV record");
        self.malformed = true;
        self.rest = "";
        None
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((tag, length)) = decode_header(self.rest) else {
            return self.fail("invalid record header");
        };
        let end = HEADER_LEN + length;
        // `get` also rejects a length that splits a multi-byte character
        let Some(value) = self.rest.get(HEADER_LEN..end) else {
            return self.fail("declared length exceeds input");
        };

        tracing::trace!(tag, length, "read record");
        self.rest = &self.rest[end..];
        Some(Record { tag, value })
    }
}

impl FusedIterator for Records<'_> {}
