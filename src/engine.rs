//! Thin shim over the `deflate64` crate, which implements the bit-level
//! Huffman decode and back-reference copying. Everything above this module
//! only sees [`Engine::step`] and its outcome.

use deflate64::InflaterManaged;

use crate::error::Error;

/// Outcome of a single engine step.
#[derive(Default, Debug)]
pub(crate) struct StepOutcome {
    /// Number of bytes read from input
    pub bytes_read: usize,

    /// Number of bytes written to output
    pub bytes_written: usize,

    /// Whether the engine has decoded the stream's final block. The engine
    /// may still hold buffered output when this first turns true; keep
    /// stepping until a stream-end step writes nothing.
    pub stream_end: bool,
}

/// Handle to the inflate engine. The 64 KiB sliding window lives inside
/// [`InflaterManaged`], so boxing the inflater both keeps the session small
/// and pins the window for as long as the handle is alive; dropping the
/// handle releases the engine state and the window together.
pub(crate) struct Engine {
    inflater: Box<InflaterManaged>,
}

impl Engine {
    pub(crate) fn new() -> Self {
        Self {
            inflater: Box::new(InflaterManaged::new()),
        }
    }

    /// Run one bounded decode step: consume what the engine can from
    /// `in_buf`, write at most `out.len()` bytes of decompressed data.
    pub(crate) fn step(&mut self, in_buf: &[u8], out: &mut [u8]) -> Result<StepOutcome, Error> {
        tracing::trace!(
            in_buf_len = in_buf.len(),
            out_len = out.len(),
            remain_in_internal_buffer = self.inflater.available_output(),
            "step",
        );

        let res = self.inflater.inflate(in_buf, out);
        if res.data_error {
            return Err(Error::MalformedStream {
                msg: "invalid block or code in bitstream".into(),
            });
        }

        Ok(StepOutcome {
            bytes_read: res.bytes_consumed,
            bytes_written: res.bytes_written,
            stream_end: self.inflater.finished(),
        })
    }
}
