use tracing::trace;

use crate::{accumulator::OutputAccumulator, engine::Engine, error::Error};

/// A streaming Deflate64 decompression session.
///
/// Feed compressed bytes in chunks of any size; each call returns whatever
/// became decodable, and [`Self::eof`] reports whether the stream's final
/// block has been seen. A chunk that ends mid-stream just stalls the
/// decoder — the next call picks up exactly where this one left off:
///
/// ```
/// use deflate64_stream::Deflate64Decoder;
///
/// let mut decoder = Deflate64Decoder::new();
/// // an empty stream: one fixed-Huffman block holding only end-of-block
/// let out = decoder.decompress(&[0x03, 0x00])?;
/// assert!(out.is_empty());
/// assert!(decoder.eof());
/// # Ok::<_, deflate64_stream::Error>(())
/// ```
///
/// One session decodes one stream. `decompress` takes `&mut self`, so
/// concurrent calls on a single session are ruled out at compile time;
/// separate sessions share nothing and may run on any threads.
pub struct Deflate64Decoder {
    engine: Engine,
    eof: bool,
    poisoned: bool,
}

impl Default for Deflate64Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Deflate64Decoder {
    /// Size of the scratch region handed to the engine on each step.
    const SCRATCH_LEN: usize = 2048;

    /// Create a new session.
    ///
    /// This allocates the engine state including its 64 KiB sliding window;
    /// dropping the session releases both.
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            eof: false,
            poisoned: false,
        }
    }

    /// Whether the stream's final block has been fully decoded.
    ///
    /// `false` after a call that merely ran out of input; `true` only once a
    /// call observed the end of the stream.
    pub fn eof(&self) -> bool {
        self.eof
    }

    /// Decompress `chunk`, returning every byte that became decodable.
    ///
    /// `chunk` may be any length, including empty. Input that stops short of
    /// the end of the stream is not an error: the call returns what it could
    /// decode (possibly nothing) with [`Self::eof`] still `false`. Once the
    /// stream has ended, further calls return empty output without touching
    /// the engine; compressed bytes past the end of the stream are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedStream`] if the input violates the Deflate64
    /// format, [`Error::OutOfMemory`] if the output buffer cannot grow. A
    /// failed call discards its partial output and poisons the session:
    /// every later call returns [`Error::InvalidState`].
    pub fn decompress(&mut self, chunk: &[u8]) -> Result<Vec<u8>, Error> {
        if self.poisoned {
            return Err(Error::InvalidState("decompress called after a fatal error"));
        }

        match self.run(chunk) {
            Ok(out) => Ok(out),
            Err(e) => {
                self.poisoned = true;
                Err(e)
            }
        }
    }

    fn run(&mut self, chunk: &[u8]) -> Result<Vec<u8>, Error> {
        let mut acc = OutputAccumulator::default();
        if self.eof {
            trace!(chunk_len = chunk.len(), "decompress after stream end");
            return Ok(acc.finalize());
        }

        let mut scratch = [0u8; Self::SCRATCH_LEN];
        let mut consumed = 0;

        loop {
            let outcome = self.engine.step(&chunk[consumed..], &mut scratch)?;
            trace!(?outcome, consumed, produced = acc.len(), "stepped engine");

            consumed += outcome.bytes_read;
            if outcome.bytes_written > 0 {
                // the scratch region is reused next iteration, so copy
                acc.append(&scratch[..outcome.bytes_written])?;
            }

            if outcome.stream_end {
                self.eof = true;
                // the engine may still hold buffered output when it first
                // reports stream end; drain until a step writes nothing
                if outcome.bytes_written == 0 {
                    break;
                }
            } else if outcome.bytes_read == 0 && outcome.bytes_written == 0 {
                // stalled: no progress possible with what's left of this
                // chunk, more input is needed
                break;
            }
        }

        Ok(acc.finalize())
    }
}
