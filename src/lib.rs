#![warn(missing_docs)]

//! Streaming decompression for Deflate64, the Deflate variant with a 64 KiB
//! sliding window (vs. 32 KiB) and wider length/distance codes, best known
//! as zip compression method 9.
//!
//! The bit-level Huffman/LZ77 automaton comes from the [deflate64
//! crate](https://crates.io/crates/deflate64); this crate wraps it in a
//! session that accepts compressed input in arbitrary-sized chunks:
//! construct one [`Deflate64Decoder`], call [`Deflate64Decoder::decompress`]
//! once per chunk, and collect each call's output. Input that stops short of
//! the end of the stream is not an error — the next call resumes where the
//! last one stalled, and [`Deflate64Decoder::eof`] flips to `true` once the
//! final block has been decoded.
//!
//! For `std::io` plumbing, [`Deflate64Reader`] adapts a session to
//! [`std::io::Read`].
//!
//! Decompression is CPU-bound and runs entirely on the calling thread; in
//! async contexts, put it on a blocking thread. This crate is decode-only
//! and knows nothing about zip containers, only the raw bitstream.

mod accumulator;
mod decoder;
mod engine;
pub mod error;
mod reader;

pub use decoder::Deflate64Decoder;
pub use error::Error;
pub use reader::Deflate64Reader;
