use std::io::{self, BufRead, BufReader, Read};

use tracing::trace;

use crate::Deflate64Decoder;

/// Decompresses a single Deflate64 stream from an inner reader.
///
/// Pulls compressed bytes from `R` on demand and serves the decompressed
/// stream through [`io::Read`]. `read` returns `Ok(0)` once the stream's
/// final block has been decoded, or once the inner reader runs dry —
/// truncated input looks like end-of-file here, so check [`Self::eof`] if
/// that matters. Decoder errors surface as [`io::Error`].
///
/// Compressed bytes past the end of the stream that arrived in the same
/// inner read are consumed along with it.
pub struct Deflate64Reader<R> {
    inner: R,
    decoder: Deflate64Decoder,
    pending: Vec<u8>,
    pos: usize,
}

impl<R: Read> Deflate64Reader<BufReader<R>> {
    /// Wrap `inner`, buffering its reads.
    pub fn new(inner: R) -> Self {
        Self::with_buf_read(BufReader::new(inner))
    }
}

impl<R: BufRead> Deflate64Reader<R> {
    /// Wrap an already-buffered reader.
    pub fn with_buf_read(inner: R) -> Self {
        Self {
            inner,
            decoder: Deflate64Decoder::new(),
            pending: Vec::new(),
            pos: 0,
        }
    }

    /// Whether the stream's final block has been decoded (decoded bytes may
    /// still be waiting to be read out).
    pub fn eof(&self) -> bool {
        self.decoder.eof()
    }

    /// Return the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BufRead> Read for Deflate64Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            if self.pos < self.pending.len() {
                let n = (self.pending.len() - self.pos).min(buf.len());
                buf[..n].copy_from_slice(&self.pending[self.pos..self.pos + n]);
                self.pos += n;
                return Ok(n);
            }

            if self.decoder.eof() {
                return Ok(0);
            }

            let input = self.inner.fill_buf()?;
            if input.is_empty() {
                // inner reader ran dry before the stream ended
                return Ok(0);
            }
            let n_in = input.len();
            let out = self.decoder.decompress(input)?;
            self.inner.consume(n_in);
            trace!(fed = n_in, produced = out.len(), "refilled from inner reader");

            self.pending = out;
            self.pos = 0;
        }
    }
}
