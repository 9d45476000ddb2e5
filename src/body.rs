//! Body line classification

use crate::protocol::{split_header, HeaderParts};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use tracing::trace;

/// One body line, read with the header syntax rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyLine<'a> {
    /// `key: value` line.
    Field {
        /// Name before the first `:`, trimmed.
        key: &'a str,
        /// Text after the first `:`, trimmed.
        value: &'a str,
    },
    /// Line without a delimiter, exactly as received.
    Content(&'a str),
}

impl<'a> BodyLine<'a> {
    /// Classify a raw body line. `None` means the line is unparsable and
    /// contributes nothing.
    pub fn parse(line: &'a str) -> Option<Self> {
        match split_header(line)? {
            HeaderParts::Pair(key, value) => Some(BodyLine::Field { key, value }),
            HeaderParts::Single(_) => Some(BodyLine::Content(line)),
        }
    }

    /// Key of a `Field` line.
    pub fn key(&self) -> Option<&'a str> {
        match self {
            BodyLine::Field { key, .. } => Some(*key),
            BodyLine::Content(_) => None,
        }
    }
}

/// Iterator over the parsable lines of a message body.
///
/// Returned by [`EslMessage::body_entries()`](crate::EslMessage::body_entries).
#[derive(Debug, Clone)]
pub struct BodyEntries<'a> {
    lines: std::slice::Iter<'a, String>,
}

impl<'a> BodyEntries<'a> {
    pub(crate) fn new(lines: &'a [String]) -> Self {
        Self {
            lines: lines.iter(),
        }
    }
}

impl<'a> Iterator for BodyEntries<'a> {
    type Item = BodyLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self
            .lines
            .by_ref()
        {
            match BodyLine::parse(line) {
                Some(entry) => return Some(entry),
                None => trace!(line = %line, "skipping unparsable body line"),
            }
        }
        None
    }
}

/// Parse a length value, tolerating surrounding whitespace.
///
/// Anything that is not a non-negative integer yields `None`.
pub(crate) fn parse_length(value: &str) -> Option<usize> {
    value
        .trim()
        .parse()
        .ok()
}

/// Percent-decode an event body value, keeping the raw text when it does not
/// decode to UTF-8.
pub(crate) fn decode_value(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}
