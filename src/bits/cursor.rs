/*
# Byte Cursor Module

 Sequential, bounds-checked read access over an in-memory byte buffer.
 Used by the BIF parser to walk the fixed header and the index table.

 Key components:
 - `ByteCursor::read_u8()`, `ByteCursor::read_u32()` with position tracking
 - `ByteCursor::skip()` for reserved regions
 - Every read past the end of the buffer yields `BifError::TruncatedInput`
*/

use crate::errors::BifError;

/// Read a 32-bit little endian value from a byte slice advancing the position.
pub fn read_u32_le(data: &[u8], pos: &mut usize) -> Option<u32> {
    if data.len() < 4 || *pos > data.len() - 4 {
        return None;
    }
    let v = u32::from_le_bytes([data[*pos], data[*pos + 1], data[*pos + 2], data[*pos + 3]]);
    *pos += 4;
    Some(v)
}

/// Stateful reader over a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes between the current position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Read-only view of the whole underlying buffer, independent of position.
    pub fn buffer(&self) -> &'a [u8] {
        self.data
    }

    /// Read one byte and advance by 1.
    pub fn read_u8(&mut self) -> Result<u8, BifError> {
        self.ensure(1)?;
        let b = self.data[self.pos];
        self.pos += 1;
        Ok(b)
    }

    /// Advance by `n` bytes without reading them.
    pub fn skip(&mut self, n: usize) -> Result<(), BifError> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    /// Read four bytes and compose them as `b0 | b1 << 8 | b2 << 16 | b3 << 24`.
    ///
    /// The first byte read is the least significant one (little endian), which is
    /// how every integer field of a BIF file is stored.
    pub fn read_u32(&mut self) -> Result<u32, BifError> {
        let start = self.pos;
        read_u32_le(self.data, &mut self.pos).ok_or(BifError::TruncatedInput {
            position: start,
            needed: 4,
            available: self.data.len().saturating_sub(start),
        })
    }

    fn ensure(&self, needed: usize) -> Result<(), BifError> {
        if needed > self.remaining() {
            return Err(BifError::TruncatedInput {
                position: self.pos,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{read_u32_le, ByteCursor};
    use crate::errors::BifError;
    use proptest::prelude::*;

    #[test]
    fn test_read_sequence() {
        let data = [0x89u8, 0x01, 0x00, 0x00, 0x00, 0xaa, 0xbb];
        let mut c = ByteCursor::new(&data);
        assert_eq!(c.read_u8().unwrap(), 0x89);
        assert_eq!(c.read_u32().unwrap(), 1);
        assert_eq!(c.position(), 5);
        assert_eq!(c.remaining(), 2);
        c.skip(2).unwrap();
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.buffer().len(), 7);
    }

    #[test]
    fn test_first_byte_is_least_significant() {
        let data = [0x78u8, 0x56, 0x34, 0x12];
        let mut c = ByteCursor::new(&data);
        assert_eq!(c.read_u32().unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_truncated_read_reports_position() {
        let data = [0u8; 6];
        let mut c = ByteCursor::new(&data);
        c.skip(4).unwrap();
        assert_eq!(
            c.read_u32(),
            Err(BifError::TruncatedInput {
                position: 4,
                needed: 4,
                available: 2,
            })
        );
        // A failed read does not move the cursor.
        assert_eq!(c.position(), 4);
    }

    #[test]
    fn test_skip_past_end() {
        let data = [0u8; 10];
        let mut c = ByteCursor::new(&data);
        assert!(matches!(
            c.skip(44),
            Err(BifError::TruncatedInput { needed: 44, .. })
        ));
        assert!(ByteCursor::new(&[]).read_u8().is_err());
    }

    proptest! {
        #[test]
        fn prop_read_u32_matches_le_bytes(bytes in any::<[u8; 4]>()) {
            let mut c = ByteCursor::new(&bytes);
            prop_assert_eq!(c.read_u32().unwrap(), u32::from_le_bytes(bytes));
        }

        #[test]
        fn prop_reads_never_panic(data in proptest::collection::vec(any::<u8>(), 0..32), ops in proptest::collection::vec(0u8..3, 0..16)) {
            let mut c = ByteCursor::new(&data);
            for op in ops {
                let before = c.position();
                let result = match op {
                    0 => c.read_u8().map(|_| ()),
                    1 => c.read_u32().map(|_| ()),
                    _ => c.skip(3),
                };
                if result.is_err() {
                    prop_assert_eq!(c.position(), before);
                }
                prop_assert!(c.position() <= data.len());
            }
        }

        #[test]
        fn prop_slice_reader_bounds(data in proptest::collection::vec(any::<u8>(), 0..12), start in 0usize..16) {
            let mut pos = start;
            match read_u32_le(&data, &mut pos) {
                Some(_) => prop_assert_eq!(pos, start + 4),
                None => prop_assert_eq!(pos, start),
            }
        }
    }
}
