//! All error types used in this crate

use std::collections::TryReserveError;

/// Any error reported while decompressing a Deflate64 stream.
///
/// All variants are fatal for the session that reported them: the failing
/// call discards its partial output and every later
/// [`decompress`](crate::Deflate64Decoder::decompress) call returns
/// [`Error::InvalidState`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a valid Deflate64 bitstream.
    #[error("bad deflate64 data: {msg}")]
    MalformedStream {
        /// Diagnostic reported by the inflate engine
        msg: String,
    },

    /// An allocation failed while growing the output buffer.
    #[error("out of memory growing output buffer: {0}")]
    OutOfMemory(#[from] TryReserveError),

    /// The session was used in a way that indicates a caller bug rather than
    /// bad input — currently, decompressing after a fatal error.
    ///
    /// Unlike [`Error::MalformedStream`], retrying with different input will
    /// not help; the session must be discarded and a new one constructed.
    #[error("invalid decoder state: {0}")]
    InvalidState(&'static str),
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        std::io::Error::other(e)
    }
}
