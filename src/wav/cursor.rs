//! Forward-only cursor over a buffered byte source.

use std::io::{self, BufRead, Read};

use crate::{
    bytes,
    error::{MetaError, MetaResult},
    wav::chunks::{ChunkHeader, ChunkID},
};

/// A strictly forward streaming reader, matching the linear on-disk chunk
/// layout. The cursor counts every byte it consumes so bounded sub-regions
/// (such as a `LIST`/`INFO` body) can do their own length accounting, and
/// it never seeks backward.
#[derive(Debug)]
pub struct ChunkCursor<R: BufRead> {
    reader: R,
    consumed: u64,
}

impl<R: BufRead> ChunkCursor<R> {
    pub const fn new(reader: R) -> Self {
        ChunkCursor {
            reader,
            consumed: 0,
        }
    }

    /// Total bytes consumed since construction. Monotonically increasing.
    #[inline]
    pub const fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// True while the underlying source reports unread bytes.
    pub fn has_more(&mut self) -> MetaResult<bool> {
        Ok(!self.reader.fill_buf()?.is_empty())
    }

    /// Fill `buf` completely or fail with `Truncated`.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> MetaResult<()> {
        match self.reader.read_exact(buf) {
            Ok(()) => {
                self.consumed += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(MetaError::truncated(buf.len() as u64, self.consumed))
            }
            Err(e) => Err(MetaError::Io(e)),
        }
    }

    /// Read exactly `n` bytes into a fresh buffer.
    ///
    /// The buffer grows as bytes arrive rather than being pre-sized, so a
    /// hostile length prefix cannot force a large allocation up front.
    pub fn read_vec(&mut self, n: u64) -> MetaResult<Vec<u8>> {
        let mut buf = Vec::new();
        let copied = (&mut self.reader).take(n).read_to_end(&mut buf)? as u64;
        self.consumed += copied;
        if copied < n {
            return Err(MetaError::truncated(n - copied, self.consumed));
        }
        Ok(buf)
    }

    /// Read a 4-byte chunk identifier. No check that the bytes are
    /// printable; RIFF tags are compared byte-for-byte.
    pub fn read_id(&mut self) -> MetaResult<ChunkID> {
        let mut id = [0u8; 4];
        self.read_exact(&mut id)?;
        Ok(ChunkID::new(&id))
    }

    pub fn read_u16_le(&mut self) -> MetaResult<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(bytes::u16_le(&buf, 0))
    }

    pub fn read_u32_le(&mut self) -> MetaResult<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(bytes::u32_le(&buf, 0))
    }

    /// Read one chunk header: 4-byte tag followed by the u32 body size.
    pub fn read_header(&mut self) -> MetaResult<ChunkHeader> {
        let id = self.read_id()?;
        let size = self.read_u32_le()?;
        Ok(ChunkHeader { id, size })
    }

    /// Advance past `n` bytes without buffering them.
    ///
    /// Fails with `Truncated` if the source ends first; the bytes drained
    /// up to that point still count as consumed.
    pub fn skip(&mut self, n: u64) -> MetaResult<()> {
        let copied = io::copy(&mut (&mut self.reader).take(n), &mut io::sink())?;
        self.consumed += copied;
        if copied < n {
            return Err(MetaError::truncated(n - copied, self.consumed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cursor_over(bytes: &[u8]) -> ChunkCursor<Cursor<&[u8]>> {
        ChunkCursor::new(Cursor::new(bytes))
    }

    #[test]
    fn test_read_exact_advances_consumed() {
        let mut cur = cursor_over(&[1, 2, 3, 4, 5]);
        let mut buf = [0u8; 3];
        cur.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(cur.bytes_consumed(), 3);
    }

    #[test]
    fn test_read_exact_short_source_is_truncated() {
        let mut cur = cursor_over(&[1, 2]);
        let mut buf = [0u8; 4];
        let err = cur.read_exact(&mut buf).unwrap_err();
        assert!(matches!(err, MetaError::Truncated { .. }));
    }

    #[test]
    fn test_read_id_and_scalars() {
        let mut data = Vec::new();
        data.extend_from_slice(b"fmt ");
        data.extend_from_slice(&16u32.to_le_bytes());
        data.extend_from_slice(&7u16.to_le_bytes());

        let mut cur = cursor_over(&data);
        assert_eq!(cur.read_id().unwrap(), ChunkID::new(b"fmt "));
        assert_eq!(cur.read_u32_le().unwrap(), 16);
        assert_eq!(cur.read_u16_le().unwrap(), 7);
        assert_eq!(cur.bytes_consumed(), 10);
    }

    #[test]
    fn test_skip_counts_and_positions() {
        let mut cur = cursor_over(&[0; 10]);
        cur.skip(6).unwrap();
        assert_eq!(cur.bytes_consumed(), 6);
        assert!(cur.has_more().unwrap());
        cur.skip(4).unwrap();
        assert!(!cur.has_more().unwrap());
    }

    #[test]
    fn test_skip_past_end_is_truncated() {
        let mut cur = cursor_over(&[0; 4]);
        let err = cur.skip(9).unwrap_err();
        match err {
            MetaError::Truncated { needed, offset } => {
                assert_eq!(needed, 5);
                assert_eq!(offset, 4);
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn test_read_vec_exact_and_short() {
        let mut cur = cursor_over(b"hello world");
        assert_eq!(cur.read_vec(5).unwrap(), b"hello");
        assert!(matches!(
            cur.read_vec(100).unwrap_err(),
            MetaError::Truncated { .. }
        ));
    }

    #[test]
    fn test_has_more_on_empty_source() {
        let mut cur = cursor_over(&[]);
        assert!(!cur.has_more().unwrap());
        assert_eq!(cur.bytes_consumed(), 0);
    }
}
