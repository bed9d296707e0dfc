//! Byte cursor primitives for binlog row data.
//!
//! The free functions are slice-in, slice-out: every read returns the value
//! together with the unread remainder, and a failed read leaves the caller's
//! slice untouched. The integer readers take fixed-size arrays, so the width
//! is checked once when the bytes are sliced off.

use crate::error::{Error, Result};
use crate::protocol::types::{FieldDescriptor, TemporalValue};
use bytes::Bytes;
use tracing::{event, Level};

/// Split `n` bytes off the front of `data`.
#[track_caller]
pub fn read_slice(data: &[u8], n: usize) -> Result<(&[u8], &[u8])> {
    if data.len() < n {
        event!(Level::DEBUG, needed = n, available = data.len(), "truncated buffer");
        return Err(Error::truncated(n, data.len()));
    }
    Ok(data.split_at(n))
}

/// Split a fixed-size array off the front of `data`.
#[track_caller]
pub fn read_array<const N: usize>(data: &[u8]) -> Result<(&[u8; N], &[u8])> {
    match data.split_first_chunk::<N>() {
        Some(split) => Ok(split),
        None => {
            event!(Level::DEBUG, needed = N, available = data.len(), "truncated buffer");
            Err(Error::truncated(N, data.len()))
        }
    }
}

/// Unsigned little-endian 24-bit integer, bytes composed low to high.
pub fn le_u24(b: &[u8; 3]) -> u32 {
    u32::from(b[0]) | u32::from(b[1]) << 8 | u32::from(b[2]) << 16
}

/// Unsigned little-endian 32-bit integer.
pub fn le_u32(b: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*b)
}

/// Unsigned little-endian 64-bit integer.
pub fn le_u64(b: &[u8; 8]) -> u64 {
    u64::from_le_bytes(*b)
}

/// Signed big-endian 8-bit integer.
pub fn be_i8(b: &[u8; 1]) -> i8 {
    i8::from_be_bytes(*b)
}

/// Signed big-endian 16-bit integer.
pub fn be_i16(b: &[u8; 2]) -> i16 {
    i16::from_be_bytes(*b)
}

/// Signed big-endian 24-bit integer, sign-extended to 32 bits.
pub fn be_i24(b: &[u8; 3]) -> i32 {
    // Place the 24 bits at the top of an i32 and shift back arithmetically.
    i32::from_be_bytes([b[0], b[1], b[2], 0]) >> 8
}

/// Unsigned big-endian 24-bit integer.
pub fn be_u24(b: &[u8; 3]) -> u32 {
    u32::from(b[0]) << 16 | u32::from(b[1]) << 8 | u32::from(b[2])
}

/// Signed big-endian 32-bit integer.
pub fn be_i32(b: &[u8; 4]) -> i32 {
    i32::from_be_bytes(*b)
}

/// Unsigned big-endian 32-bit integer.
pub fn be_u32(b: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*b)
}

/// Unsigned big-endian 40-bit integer.
pub fn be_u40(b: &[u8; 5]) -> u64 {
    u64::from_be_bytes([0, 0, 0, b[0], b[1], b[2], b[3], b[4]])
}

/// A positioned reader over the row image of a binlog event.
///
/// Wraps the shared `Bytes` handed over by the event layer and advances past
/// each decoded column.
pub struct ReadBuffer {
    data: Bytes,
    pos: usize,
}

impl ReadBuffer {
    /// Create a new read buffer from bytes.
    pub fn new(data: Bytes) -> Self {
        Self { data, pos: 0 }
    }

    /// Get the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the remaining bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if the buffer has at least `n` bytes remaining.
    pub fn has_remaining(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    /// Get a slice of the remaining data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    /// Skip `n` bytes, e.g. a non-temporal column decoded elsewhere.
    #[track_caller]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        read_slice(self.as_slice(), n)?;
        self.pos += n;
        Ok(())
    }

    /// Read raw bytes.
    #[track_caller]
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        read_slice(self.as_slice(), n)?;
        let bytes = self.data.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(bytes)
    }

    /// Decode one column value with `descriptor` and advance past it.
    ///
    /// On error the position is left where it was.
    pub fn read_value(&mut self, descriptor: &FieldDescriptor) -> Result<TemporalValue> {
        let before = self.remaining();
        let (value, rest) = descriptor.parse_value(self.as_slice())?;
        self.pos += before - rest.len();
        Ok(value)
    }
}
