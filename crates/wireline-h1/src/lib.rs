//! wireline-h1 — incremental HTTP/1.1 request parser.
//!
//! Consumes bytes from any blocking [`std::io::Read`] source — a TCP
//! connection, a pipe, an in-memory buffer — and produces a structured
//! [`Request`] without needing the whole message up front. A single read
//! may deliver a fragment of the request line, a fragment of a field line,
//! or several complete lines at once; the parser resumes wherever it left
//! off.
//!
//! # Architecture
//!
//! ```text
//! read_request(source)                         reader::read_request
//!   → grow/compact buffer, blocking reads
//!     → Request::parse(pending bytes)          request::Request
//!         Initialized → ParsingHeaders → ParsingBody → Done
//!           → Headers::parse(field lines)      headers::Headers
//! ```
//!
//! Body framing is `Content-Length` only; chunked transfer-encoding is not
//! supported. "Need more data" is signaled by a zero consumed count, never
//! by an error.
//!
//! # Example
//!
//! ```
//! use wireline_h1::read_request;
//!
//! let raw: &[u8] = b"GET /coffee HTTP/1.1\r\nHost: localhost\r\n\r\n";
//! let request = read_request(raw).unwrap();
//! assert_eq!(request.request_line.method, "GET");
//! assert_eq!(request.headers.get("Host"), Some("localhost"));
//! ```

pub mod error;
pub mod headers;
pub mod reader;
pub mod request;

pub use error::{ParseError, ParseResult};
pub use headers::Headers;
pub use reader::read_request;
pub use request::{ParserState, Request, RequestLine};
