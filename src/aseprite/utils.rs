//! Low-level byte reading utilities.
//!
//! Every length in the container is untrusted, so reads return `None`
//! instead of panicking when the requested span is out of bounds.

use byteorder::{ByteOrder, LittleEndian};

/// Borrow `len` bytes starting at `offset`, if they are all present.
pub fn slice_at(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    data.get(offset..end)
}

/// Read a little-endian u16.
pub fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    slice_at(data, offset, 2).map(LittleEndian::read_u16)
}

/// Read a little-endian u32.
pub fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    slice_at(data, offset, 4).map(LittleEndian::read_u32)
}

/// Forward-only cursor over a byte slice.
///
/// Each `take_*` either consumes the requested bytes or leaves the cursor
/// untouched and returns `None`.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let bytes = slice_at(self.data, self.pos, len)?;
        self.pos += len;
        Some(bytes)
    }

    pub fn skip(&mut self, len: usize) -> Option<()> {
        self.take(len).map(|_| ())
    }

    pub fn take_u8(&mut self) -> Option<u8> {
        self.take(1).map(|b| b[0])
    }

    pub fn take_u16(&mut self) -> Option<u16> {
        self.take(2).map(LittleEndian::read_u16)
    }
}
