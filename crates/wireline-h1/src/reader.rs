//! Blocking stream driver: feeds a byte source through the request parser.
//!
//! Owns the growable read buffer and the cursor separating valid pending
//! bytes from free space. One [`read_request`] call fully consumes one
//! request from the source:
//!
//! ```text
//! source.read() → buffer tail
//!   → Request::parse(pending) until zero consumed or Done
//!     → compact consumed bytes off the front
//! → repeat until Done or end-of-stream
//! ```
//!
//! End-of-stream is a valid early termination, not an error; the declared
//! `Content-Length` (if any) is still checked against what actually
//! arrived. Deadlines belong to the source — e.g. a caller sets
//! `TcpStream::set_read_timeout` and the timeout surfaces here as a read
//! error.

use std::io::Read;

use crate::error::{ParseError, ParseResult};
use crate::request::{ParserState, Request};

/// Starting buffer capacity; doubled whenever a read finds no free space.
const INITIAL_BUFFER_SIZE: usize = 1024;

/// Read one complete request from a blocking byte source.
///
/// Blocks until the request is complete, the source reports end-of-stream,
/// or an error occurs. Bytes past the end of the request (e.g. a pipelined
/// follow-up) are left unread in the source where possible, though bytes
/// already pulled into the internal buffer are discarded.
pub fn read_request<R: Read>(mut source: R) -> ParseResult<Request> {
    let mut buf = vec![0u8; INITIAL_BUFFER_SIZE];
    let mut read_to = 0;
    let mut request = Request::new();

    while request.state() != ParserState::Done {
        if read_to == buf.len() {
            tracing::trace!(capacity = buf.len() * 2, "growing read buffer");
            buf.resize(buf.len() * 2, 0);
        }

        let n = source.read(&mut buf[read_to..])?;
        if n == 0 {
            // End-of-stream: a request may legitimately end here.
            request.finish();
            break;
        }
        read_to += n;

        // One read can complete several stages; keep parsing until the
        // machine needs more data or the request is done.
        loop {
            let consumed = request.parse(&buf[..read_to])?;
            if consumed == 0 || request.state() == ParserState::Done {
                break;
            }
            buf.copy_within(consumed..read_to, 0);
            read_to -= consumed;
        }
    }

    if let Some(content_length) = request.headers.content_length()? {
        if request.body.len() < content_length {
            return Err(ParseError::IncompleteBody {
                expected: content_length,
                got: request.body.len(),
            });
        }
    }

    tracing::debug!(
        method = %request.request_line.method,
        target = %request.request_line.target,
        version = %request.request_line.version,
        headers = request.headers.len(),
        body_len = request.body.len(),
        "request parsed"
    );
    Ok(request)
}

// ── Tests ────────────────────────────────────────────────────────────
