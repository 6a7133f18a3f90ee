//! Error types for HTTP/1.1 request parsing.

use thiserror::Error;

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while parsing a request.
///
/// Every variant is fatal for the request being parsed: the driver aborts
/// and returns it to the caller. "Not enough data yet" is never an error;
/// parse calls signal it by consuming zero bytes.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed request line")]
    MalformedRequestLine,

    #[error("invalid character in method: {0:?}")]
    InvalidMethod(char),

    #[error("unsupported http version: {0}")]
    UnsupportedVersion(String),

    #[error("malformed header field line")]
    MalformedHeaderLine,

    #[error("invalid character in header name: {0:?}")]
    InvalidHeaderChar(char),

    #[error("invalid content-length: {0}")]
    InvalidContentLength(String),

    #[error("body ended after {got} of {expected} declared bytes")]
    IncompleteBody { expected: usize, got: usize },

    #[error("parse called on a completed request")]
    AlreadyDone,

    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
}
