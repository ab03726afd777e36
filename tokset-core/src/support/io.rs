//! Buffered stream reads with an end-of-stream sentinel

use std::io::{ErrorKind, Read};

/// Returned by [`read_input`] once the stream has no more data
pub const END_OF_STREAM: i32 = -1;

/// Read up to `count` bytes from `reader` into `target[start..]`.
///
/// Returns the number of bytes read, [`END_OF_STREAM`] when the reader is
/// exhausted, or `0` without touching the reader when `target` is empty.
/// Interrupted reads are retried; other I/O errors are returned.
///
/// # Panics
///
/// Panics if `start + count` exceeds `target.len()`.
pub fn read_input<R: Read + ?Sized>(
    reader: &mut R,
    target: &mut [u8],
    start: usize,
    count: usize,
) -> std::io::Result<i32> {
    if target.is_empty() {
        return Ok(0);
    }

    let window = &mut target[start..start + count];
    let read = loop {
        match reader.read(window) {
            Ok(n) => break n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    };

    if read == 0 {
        return Ok(END_OF_STREAM);
    }
    // Windows larger than i32::MAX are not meaningful for this API
    Ok(i32::try_from(read).unwrap_or(i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_into_offset_window() {
        let mut reader = Cursor::new(b"hello".to_vec());
        let mut buf = [0u8; 8];

        assert_eq!(read_input(&mut reader, &mut buf, 2, 3).unwrap(), 3);
        assert_eq!(&buf[..5], b"\0\0hel");

        assert_eq!(read_input(&mut reader, &mut buf, 0, 8).unwrap(), 2);
        assert_eq!(&buf[..2], b"lo");
    }

    #[test]
    fn test_end_of_stream_sentinel() {
        let mut reader = Cursor::new(Vec::<u8>::new());
        let mut buf = [0u8; 4];
        assert_eq!(read_input(&mut reader, &mut buf, 0, 4).unwrap(), END_OF_STREAM);
    }

    #[test]
    fn test_empty_target_reads_nothing() {
        let mut reader = Cursor::new(b"data".to_vec());
        let mut buf: [u8; 0] = [];
        assert_eq!(read_input(&mut reader, &mut buf, 0, 0).unwrap(), 0);
        assert_eq!(reader.position(), 0);
    }
}
