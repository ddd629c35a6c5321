use std::io::{self, Read};

use deflate64_stream::Deflate64Reader;

fn stored_block(data: &[u8], last: bool) -> Vec<u8> {
    let len = data.len() as u16;
    let mut block = vec![if last { 0x01 } else { 0x00 }];
    block.extend_from_slice(&len.to_le_bytes());
    block.extend_from_slice(&(!len).to_le_bytes());
    block.extend_from_slice(data);
    block
}

#[test_log::test]
fn read_whole_stream() {
    let payload = b"Sample content 1.\nSample content 2.\n";
    let stream = stored_block(payload, true);

    let mut reader = Deflate64Reader::new(&stream[..]);
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, payload);
    assert!(reader.eof());
}

#[test_log::test]
fn read_from_one_byte_inner_reads() {
    let payload: Vec<u8> = (0..5_000u32).map(|i| (i % 7) as u8).collect();
    let stream = stored_block(&payload, true);

    let mut reader = Deflate64Reader::new(OneByteReadWrapper(&stream[..]));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, payload);
    assert!(reader.eof());
}

#[test_log::test]
fn truncated_stream_reads_as_eof() {
    let stream = stored_block(b"0123456789", true);
    let truncated = &stream[..stream.len() - 4];

    let mut reader = Deflate64Reader::new(truncated);
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, b"012345");
    // the final block never completed
    assert!(!reader.eof());
}

#[test_log::test]
fn malformed_stream_surfaces_as_io_error() {
    let mut reader = Deflate64Reader::new(&[0xffu8; 10][..]);
    let mut out = Vec::new();
    let err = reader.read_to_end(&mut out).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
}

#[test_log::test]
fn into_inner_returns_the_wrapped_reader() {
    let stream = stored_block(b"abc", true);
    let mut reader = Deflate64Reader::new(&stream[..]);
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();

    let _inner = reader.into_inner();
    assert_eq!(out, b"abc");
}

struct OneByteReadWrapper<R>(R);

impl<R> io::Read for OneByteReadWrapper<R>
where
    R: io::Read,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(&mut buf[..1])
    }
}
