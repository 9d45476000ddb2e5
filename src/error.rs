//! Error types for ESL message decoding

use thiserror::Error;

/// Result alias used across the crate.
pub type EslResult<T> = Result<T, EslError>;

/// Errors surfaced by the message model.
///
/// Only caller misuse is reported. Malformed lengths and unparsable body
/// lines are absorbed into default values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EslError {
    /// A header value was requested for a name the message does not carry.
    #[error("header not found: {name}")]
    HeaderNotFound { name: String },

    /// A header name is not one of the recognized framing headers.
    #[error("invalid header: {header}")]
    InvalidHeader { header: String },
}

impl EslError {
    pub(crate) fn header_not_found(name: impl Into<String>) -> Self {
        EslError::HeaderNotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_not_found_display() {
        let err = EslError::header_not_found("X-Missing");
        assert_eq!(err.to_string(), "header not found: X-Missing");
    }

    #[test]
    fn invalid_header_display() {
        let err = EslError::InvalidHeader {
            header: "Bogus".into(),
        };
        assert_eq!(err.to_string(), "invalid header: Bogus");
    }
}
