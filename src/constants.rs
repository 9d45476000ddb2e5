//! Protocol constants

/// Content-Type header values
pub const CONTENT_TYPE_AUTH_REQUEST: &str = "auth/request";
pub const CONTENT_TYPE_COMMAND_REPLY: &str = "command/reply";
pub const CONTENT_TYPE_API_RESPONSE: &str = "api/response";
pub const CONTENT_TYPE_TEXT_EVENT_PLAIN: &str = "text/event-plain";
pub const CONTENT_TYPE_TEXT_EVENT_JSON: &str = "text/event-json";
pub const CONTENT_TYPE_TEXT_EVENT_XML: &str = "text/event-xml";
pub const CONTENT_TYPE_LOG_DATA: &str = "log/data";
pub const CONTENT_TYPE_DISCONNECT_NOTICE: &str = "text/disconnect-notice";

/// Protocol framing header: body encoding hint.
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
/// Protocol framing header: body length in bytes.
///
/// Also marks a nested frame when it appears as a body line key.
pub const HEADER_CONTENT_LENGTH: &str = "Content-Length";

/// Parsed-body key for lines that carry no `key: value` delimiter.
pub const CONTENT_KEY: &str = "__CONTENT__";

/// Separator between a header name and its value.
pub const HEADER_DELIMITER: char = ':';

/// Line terminator used when rendering a message or joining body lines.
pub const LINE_TERMINATOR: &str = "\n";
