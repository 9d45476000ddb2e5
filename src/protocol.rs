//! ESL line syntax and message classification

use crate::constants::{
    CONTENT_TYPE_API_RESPONSE, CONTENT_TYPE_AUTH_REQUEST, CONTENT_TYPE_COMMAND_REPLY,
    CONTENT_TYPE_DISCONNECT_NOTICE, CONTENT_TYPE_LOG_DATA, CONTENT_TYPE_TEXT_EVENT_JSON,
    CONTENT_TYPE_TEXT_EVENT_PLAIN, CONTENT_TYPE_TEXT_EVENT_XML, HEADER_DELIMITER,
};
use serde::{Deserialize, Serialize};

/// ESL message types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    /// Authentication request from server
    AuthRequest,
    /// Command reply
    CommandReply,
    /// API response
    ApiResponse,
    /// Event message
    Event,
    /// Disconnect notice
    Disconnect,
    /// Unknown or absent Content-Type
    Unknown(String),
}

impl MessageType {
    /// Classify a message from its Content-Type header value.
    pub fn from_content_type(content_type: &str) -> Self {
        match content_type {
            CONTENT_TYPE_AUTH_REQUEST => MessageType::AuthRequest,
            CONTENT_TYPE_COMMAND_REPLY => MessageType::CommandReply,
            CONTENT_TYPE_API_RESPONSE => MessageType::ApiResponse,
            CONTENT_TYPE_TEXT_EVENT_PLAIN
            | CONTENT_TYPE_TEXT_EVENT_JSON
            | CONTENT_TYPE_TEXT_EVENT_XML
            | CONTENT_TYPE_LOG_DATA => MessageType::Event,
            CONTENT_TYPE_DISCONNECT_NOTICE => MessageType::Disconnect,
            _ => MessageType::Unknown(content_type.to_string()),
        }
    }
}

/// Result of splitting one line with the header syntax rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderParts<'a> {
    /// `Name: Value`, both sides trimmed.
    Pair(&'a str, &'a str),
    /// No delimiter on the line; carries the line without its terminator.
    Single(&'a str),
}

/// Split a line at its first `:`, the way header lines are split.
///
/// Returns `None` for lines that cannot be read at all: empty or
/// whitespace-only lines and lines with an empty name (`": value"`).
/// A trailing `\r\n` or `\n` is ignored.
///
/// ```
/// use freeswitch_esl_message::{split_header, HeaderParts};
///
/// assert_eq!(
///     split_header("Job-UUID: 7f4d"),
///     Some(HeaderParts::Pair("Job-UUID", "7f4d"))
/// );
/// assert_eq!(split_header("+OK done"), Some(HeaderParts::Single("+OK done")));
/// assert_eq!(split_header("   "), None);
/// ```
pub fn split_header(line: &str) -> Option<HeaderParts<'_>> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    if line
        .trim()
        .is_empty()
    {
        return None;
    }

    match line.split_once(HEADER_DELIMITER) {
        Some((name, value)) => {
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(HeaderParts::Pair(name, value.trim()))
        }
        None => Some(HeaderParts::Single(line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_from_content_type() {
        assert_eq!(
            MessageType::from_content_type("auth/request"),
            MessageType::AuthRequest
        );
        assert_eq!(
            MessageType::from_content_type("command/reply"),
            MessageType::CommandReply
        );
        assert_eq!(
            MessageType::from_content_type("api/response"),
            MessageType::ApiResponse
        );
        for ct in [
            "text/event-plain",
            "text/event-json",
            "text/event-xml",
            "log/data",
        ] {
            assert_eq!(MessageType::from_content_type(ct), MessageType::Event);
        }
        assert_eq!(
            MessageType::from_content_type("text/disconnect-notice"),
            MessageType::Disconnect
        );
        assert_eq!(
            MessageType::from_content_type("text/rude-rejection"),
            MessageType::Unknown("text/rude-rejection".to_string())
        );
        assert_eq!(
            MessageType::from_content_type(""),
            MessageType::Unknown(String::new())
        );
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(
            split_header("Content-Length: 10"),
            Some(HeaderParts::Pair("Content-Length", "10"))
        );
    }

    #[test]
    fn test_split_without_space() {
        assert_eq!(
            split_header("Content-Type:api/response"),
            Some(HeaderParts::Pair("Content-Type", "api/response"))
        );
    }

    #[test]
    fn test_split_at_first_colon_only() {
        assert_eq!(
            split_header("variable_sip_uri: sip:1000@example.com:5060"),
            Some(HeaderParts::Pair(
                "variable_sip_uri",
                "sip:1000@example.com:5060"
            ))
        );
    }

    #[test]
    fn test_split_empty_value() {
        assert_eq!(
            split_header("Reply-Text:"),
            Some(HeaderParts::Pair("Reply-Text", ""))
        );
    }

    #[test]
    fn test_split_no_delimiter() {
        assert_eq!(
            split_header("hello world"),
            Some(HeaderParts::Single("hello world"))
        );
    }

    #[test]
    fn test_split_strips_crlf() {
        assert_eq!(
            split_header("Event-Name: HEARTBEAT\r\n"),
            Some(HeaderParts::Pair("Event-Name", "HEARTBEAT"))
        );
        assert_eq!(
            split_header("free text\r"),
            Some(HeaderParts::Single("free text"))
        );
    }

    #[test]
    fn test_split_unparsable() {
        assert_eq!(split_header(""), None);
        assert_eq!(split_header(" \t "), None);
        assert_eq!(split_header("\r\n"), None);
        assert_eq!(split_header(": orphan value"), None);
    }
}
