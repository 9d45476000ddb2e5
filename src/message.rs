//! Decoded ESL message

use crate::{
    body::{decode_value, parse_length, BodyEntries, BodyLine},
    constants::{CONTENT_KEY, HEADER_CONTENT_LENGTH, HEADER_CONTENT_TYPE, LINE_TERMINATOR},
    error::{EslError, EslResult},
    protocol::MessageType,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One ESL message: the header block plus the body as received, line by line.
///
/// Built once by the transport layer, read-only afterwards. Everything derived
/// from the body (parsed fields, nested frame length) is computed on demand.
///
/// ```
/// use freeswitch_esl_message::EslMessage;
///
/// let msg = EslMessage::builder()
///     .header("Content-Type", "text/event-plain")
///     .header("Content-Length", "41")
///     .body_line("Event-Name: BACKGROUND_JOB")
///     .body_line("Content-Length: 10")
///     .build();
///
/// assert_eq!(msg.content_length(), 41);
/// assert!(msg.has_nested_frame());
/// assert_eq!(msg.nested_frame_length(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EslMessage {
    headers: IndexMap<String, String>,
    body_lines: Vec<String>,
}

impl EslMessage {
    /// Create a message from a finished header map and body line sequence.
    pub fn new(headers: IndexMap<String, String>, body_lines: Vec<String>) -> Self {
        Self {
            headers,
            body_lines,
        }
    }

    /// Start building a message header by header.
    pub fn builder() -> EslMessageBuilder {
        EslMessageBuilder::default()
    }

    /// All headers, in the order they were received.
    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    /// Raw body lines, in order.
    pub fn body_lines(&self) -> &[String] {
        &self.body_lines
    }

    /// Body lines joined back into text.
    pub fn body_text(&self) -> String {
        self.body_lines
            .join(LINE_TERMINATOR)
    }

    /// `true` if the header is present (case-sensitive).
    pub fn has_header(&self, name: impl AsRef<str>) -> bool {
        self.headers
            .contains_key(name.as_ref())
    }

    /// Look up a header by name (case-sensitive).
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        self.headers
            .get(name.as_ref())
            .map(|s| s.as_str())
    }

    /// Value of a header the caller knows is present.
    ///
    /// Check with [`has_header()`](Self::has_header) first; an absent name is
    /// reported as [`EslError::HeaderNotFound`]. The value is returned exactly
    /// as stored.
    pub fn header_value(&self, name: impl AsRef<str>) -> EslResult<&str> {
        let name = name.as_ref();
        self.header(name)
            .ok_or_else(|| EslError::header_not_found(name))
    }

    /// `true` if the message declares a `Content-Length`.
    pub fn has_content_length(&self) -> bool {
        self.has_header(HEADER_CONTENT_LENGTH)
    }

    /// Declared body length in bytes.
    ///
    /// 0 when the header is absent or is not a non-negative integer.
    pub fn content_length(&self) -> usize {
        let Some(raw) = self.header(HEADER_CONTENT_LENGTH) else {
            return 0;
        };
        parse_length(raw).unwrap_or_else(|| {
            debug!(value = %raw, "malformed Content-Length header, treating as 0");
            0
        })
    }

    /// `Content-Type` header value, or `""` when absent.
    pub fn content_type(&self) -> &str {
        self.header(HEADER_CONTENT_TYPE)
            .unwrap_or_default()
    }

    /// Message classification derived from [`content_type()`](Self::content_type).
    pub fn message_type(&self) -> MessageType {
        MessageType::from_content_type(self.content_type())
    }

    /// Parsable body lines, classified. Unparsable lines are skipped.
    pub fn body_entries(&self) -> BodyEntries<'_> {
        BodyEntries::new(&self.body_lines)
    }

    /// Key/value view of the body.
    ///
    /// `key: value` lines map key to value. A line without a delimiter is
    /// stored whole under `__CONTENT__`. Later lines overwrite earlier ones
    /// with the same key, so only the last unlabeled line survives there; use
    /// [`content_lines()`](Self::content_lines) to get all of them.
    pub fn parse_body(&self) -> IndexMap<String, String> {
        self.collect_body(|value| value.to_string())
    }

    /// Like [`parse_body()`](Self::parse_body), with percent-decoded field
    /// values as used by `text/event-plain` bodies.
    pub fn parse_body_decoded(&self) -> IndexMap<String, String> {
        self.collect_body(|value| decode_value(value).into_owned())
    }

    fn collect_body(&self, field_value: impl Fn(&str) -> String) -> IndexMap<String, String> {
        let mut parsed = IndexMap::new();
        for entry in self.body_entries() {
            match entry {
                BodyLine::Field { key, value } => {
                    parsed.insert(key.to_string(), field_value(value));
                }
                BodyLine::Content(line) => {
                    parsed.insert(CONTENT_KEY.to_string(), line.to_string());
                }
            }
        }
        parsed
    }

    /// Every body line without a delimiter, in order.
    pub fn content_lines(&self) -> Vec<&str> {
        self.body_entries()
            .filter_map(|entry| match entry {
                BodyLine::Content(line) => Some(line),
                BodyLine::Field { .. } => None,
            })
            .collect()
    }

    /// Value of the first body line with the given key.
    pub fn body_field(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.body_entries()
            .find_map(|entry| match entry {
                BodyLine::Field { key, value } if key == name => Some(value),
                _ => None,
            })
    }

    /// `true` if a body line declares its own `Content-Length`, i.e. the body
    /// frames a second payload (e.g. `BACKGROUND_JOB` results).
    pub fn has_nested_frame(&self) -> bool {
        self.body_entries()
            .any(|entry| entry.key() == Some(HEADER_CONTENT_LENGTH))
    }

    /// Length of the nested payload from the first body `Content-Length` line.
    ///
    /// 0 when there is no such line or its value is not a non-negative integer.
    pub fn nested_frame_length(&self) -> usize {
        let Some(raw) = self.body_field(HEADER_CONTENT_LENGTH) else {
            return 0;
        };
        parse_length(raw).unwrap_or_else(|| {
            debug!(value = %raw, "malformed nested Content-Length, treating as 0");
            0
        })
    }
}

/// Headers as `name:value` lines, a blank line, the parsed body as
/// `key:value` lines, and a closing blank line. Diagnostics only.
impl fmt::Display for EslMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.headers {
            writeln!(f, "{}:{}", name, value)?;
        }
        writeln!(f)?;
        for (key, value) in self.parse_body() {
            writeln!(f, "{}:{}", key, value)?;
        }
        writeln!(f)
    }
}

/// Builder for [`EslMessage`], used by the transport layer while it reads the
/// header block and body.
#[derive(Debug, Default)]
pub struct EslMessageBuilder {
    headers: IndexMap<String, String>,
    body_lines: Vec<String>,
}

impl EslMessageBuilder {
    /// Add a header. A repeated name replaces the earlier value in place.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into(), value.into());
        self
    }

    /// Append one body line.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body_lines
            .push(line.into());
        self
    }

    /// Append several body lines.
    pub fn body_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body_lines
            .extend(
                lines
                    .into_iter()
                    .map(Into::into),
            );
        self
    }

    /// Finish the message.
    pub fn build(self) -> EslMessage {
        EslMessage::new(self.headers, self.body_lines)
    }
}
