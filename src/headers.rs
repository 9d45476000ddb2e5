//! Typed names for the headers this crate gives meaning to.

use crate::error::EslError;

/// Error returned when parsing an unrecognized framing header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFramingHeaderError(pub String);

impl std::fmt::Display for ParseFramingHeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown framing header: {}", self.0)
    }
}

impl std::error::Error for ParseFramingHeaderError {}

impl From<ParseFramingHeaderError> for EslError {
    fn from(err: ParseFramingHeaderError) -> Self {
        EslError::InvalidHeader { header: err.0 }
    }
}

define_header_enum! {
    error_type: ParseFramingHeaderError,
    /// Well-known ESL header names.
    ///
    /// Accepted anywhere a header name is, e.g.
    /// [`EslMessage::has_header()`](crate::EslMessage::has_header). Parsing
    /// ignores ASCII case, but message lookups stay exact-match.
    pub enum FramingHeader {
        /// Byte length of the body, or of a nested frame inside a body.
        ContentLength => "Content-Length",
        /// Body format hint, e.g. `text/event-plain`.
        ContentType => "Content-Type",
        /// Sent with `text/disconnect-notice`.
        ContentDisposition => "Content-Disposition",
        /// `+OK` / `-ERR` status of a `command/reply`.
        ReplyText => "Reply-Text",
        /// Correlates a `bgapi` reply with its `BACKGROUND_JOB` event.
        JobUuid => "Job-UUID",
        /// Event name inside an event body.
        EventName => "Event-Name",
    }
}
