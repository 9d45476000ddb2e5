//! Decoded FreeSWITCH Event Socket Library (ESL) messages
//!
//! This crate holds the message model an ESL transport hands its consumers:
//! the header block of one message plus its body, already split into lines.
//! It provides typed header accessors and a key/value view of the body, and
//! detects the nested `Content-Length` frame carried by events such as
//! `BACKGROUND_JOB`.
//!
//! Socket reads and line splitting belong to the caller.
//!
//! # Example
//!
//! ```rust
//! use freeswitch_esl_message::{EslMessage, FramingHeader, MessageType};
//!
//! let msg = EslMessage::builder()
//!     .header("Content-Type", "text/event-plain")
//!     .header("Content-Length", "73")
//!     .body_lines([
//!         "Event-Name: BACKGROUND_JOB",
//!         "Job-UUID: 7f4db78a-17d7-11dd-b7a0-db4edd065621",
//!         "Content-Length: 40",
//!     ])
//!     .build();
//!
//! assert_eq!(msg.message_type(), MessageType::Event);
//! assert_eq!(msg.content_length(), 73);
//!
//! if msg.has_header(FramingHeader::ContentType) {
//!     assert_eq!(msg.header_value(FramingHeader::ContentType)?, "text/event-plain");
//! }
//!
//! let body = msg.parse_body();
//! assert_eq!(body["Event-Name"], "BACKGROUND_JOB");
//!
//! // the transport reads this many more bytes for the job result
//! assert_eq!(msg.nested_frame_length(), 40);
//! # Ok::<(), freeswitch_esl_message::EslError>(())
//! ```

#[macro_use]
mod macros;

pub mod body;
pub mod constants;
pub mod error;
pub mod headers;
pub mod message;
pub mod protocol;

pub use body::{BodyEntries, BodyLine};
pub use constants::CONTENT_KEY;
pub use error::{EslError, EslResult};
pub use headers::{FramingHeader, ParseFramingHeaderError};
pub use message::{EslMessage, EslMessageBuilder};
pub use protocol::{split_header, HeaderParts, MessageType};
