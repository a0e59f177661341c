//! Read cursor over an immutable byte buffer
//!
//! All decoding in this crate consumes a [`BufferView`]: an offset+length window
//! over shared, read-only backing storage. Views never copy the underlying bytes;
//! copying the view itself (`Copy`) yields an independent cursor, which is what
//! entity factories use to peek a header before re-decoding from the start.

use crate::error::{CodecError, Result};

/// A bounded, forward-only read cursor over a byte slice.
///
/// `shift` advances past bytes, `shrink` splits off a bounded sub-view so that a
/// length-prefixed sub-region can be decoded without over-reading into the next
/// entity. Concurrent views over the same backing buffer are safe by
/// construction since no view ever writes to source storage.
#[derive(Debug, Clone, Copy)]
pub struct BufferView<'a> {
    bytes: &'a [u8],
}

impl<'a> BufferView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BufferView { bytes }
    }

    /// Number of bytes left in this view.
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Advances the cursor by exactly `n` bytes and returns the bytes skipped.
    pub fn shift(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.bytes.len() < n {
            return Err(CodecError::InsufficientBytes {
                needed: n,
                remaining: self.bytes.len(),
            });
        }
        let (front, rest) = self.bytes.split_at(n);
        self.bytes = rest;
        Ok(front)
    }

    /// Splits off a sub-view bounded to exactly the next `n` bytes, advancing
    /// this view past them. Decoding inside the sub-view cannot over-read into
    /// whatever follows the sub-region.
    pub fn shrink(&mut self, n: usize) -> Result<BufferView<'a>> {
        Ok(BufferView::new(self.shift(n)?))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.shift(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.shift(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.shift(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.shift(8)?;
        Ok(u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads a fixed-size byte array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.shift(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        Ok(array)
    }

    /// Reads a fixed-width reserved field and fails if it is not literally zero.
    pub fn read_reserved_u8(&mut self, name: &'static str) -> Result<()> {
        match self.read_u8()? {
            0 => Ok(()),
            value => Err(CodecError::NonZeroReservedField {
                name,
                value: u64::from(value),
            }),
        }
    }

    /// Reads a 4-byte reserved field and fails if it is not literally zero.
    pub fn read_reserved_u32(&mut self, name: &'static str) -> Result<()> {
        match self.read_u32()? {
            0 => Ok(()),
            value => Err(CodecError::NonZeroReservedField {
                name,
                value: u64::from(value),
            }),
        }
    }
}
