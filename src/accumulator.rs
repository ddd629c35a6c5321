use crate::error::Error;

/// Collects the output bursts of one decompress call into a single
/// contiguous buffer.
///
/// Growth is fallible (`try_reserve_exact`) so that a hostile compression
/// ratio surfaces as [`Error::OutOfMemory`] instead of aborting the process.
#[derive(Default)]
pub(crate) struct OutputAccumulator {
    bytes: Vec<u8>,
}

impl OutputAccumulator {
    /// Append one burst, preserving everything written so far.
    pub(crate) fn append(&mut self, burst: &[u8]) -> Result<(), Error> {
        self.bytes.try_reserve_exact(burst.len())?;
        self.bytes.extend_from_slice(burst);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Hand the accumulated bytes to the caller, sized exactly to what was
    /// written.
    pub(crate) fn finalize(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::OutputAccumulator;

    #[test]
    fn append_preserves_previous_bursts() {
        let mut acc = OutputAccumulator::default();
        acc.append(b"hello, ").unwrap();
        acc.append(b"").unwrap();
        acc.append(b"world").unwrap();
        assert_eq!(acc.len(), 12);
        assert_eq!(acc.finalize(), b"hello, world");
    }

    #[test]
    fn finalize_without_appends_is_empty() {
        let acc = OutputAccumulator::default();
        assert!(acc.finalize().is_empty());
    }
}
