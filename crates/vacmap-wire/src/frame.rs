use crate::error::WireError;

/// Bounds-checked cursor over a borrowed byte buffer.
///
/// Every map payload is decoded through one of these: the decoder
/// creates a reader per decode call, the strategies consume primitive
/// fixed-width values from it, and it is discarded when the call
/// returns. The reader never owns the bytes and never copies them.
///
/// Invariant: `0 <= position() <= len`. A read advances the cursor by
/// exactly the bytes it consumed; a read that would run past the end
/// fails with [`WireError::BufferUnderrun`] and leaves the cursor
/// unchanged. That last part matters — the classifier probes a buffer
/// and falls back to a different interpretation of the same bytes, so
/// a failed probe must not eat anything.
///
/// ```text
///   let mut r = FrameReader::new(&payload);
///   let magic = r.read_u16_be()?;
///   let version = r.read_u8()?;
///   // r.rest() is now the strategy-specific body
/// ```
#[derive(Clone, Debug)]
pub struct FrameReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FrameReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True when the cursor has consumed the whole buffer.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Current cursor offset from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total buffer length, independent of the cursor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The unread tail of the buffer.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Move the cursor to an absolute offset.
    ///
    /// The room scan uses this for its single-byte resync: rewind to
    /// the failed candidate's start, then step one byte forward.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::SeekOutOfBounds`] if `pos > len`. `pos == len`
    /// is allowed (cursor at end).
    pub fn set_position(&mut self, pos: usize) -> Result<(), WireError> {
        if pos > self.buf.len() {
            return Err(WireError::SeekOutOfBounds {
                offset: pos,
                len: self.buf.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    /// Consume exactly `width` bytes, or fail without advancing.
    fn take(&mut self, width: usize) -> Result<&'a [u8], WireError> {
        if self.remaining() < width {
            return Err(WireError::BufferUnderrun {
                offset: self.pos,
                needed: width,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + width];
        self.pos += width;
        Ok(slice)
    }

    /// Read one unsigned byte.
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if the buffer is exhausted.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    /// Read a little-endian `u16`.
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn read_u16_le(&mut self) -> Result<u16, WireError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Read a big-endian `u16`.
    ///
    /// The header magic is compared in big-endian form — that keeps the
    /// constant readable against a hex dump (`AA 00` on the wire is
    /// `0xAA00` in the source).
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn read_u16_be(&mut self) -> Result<u16, WireError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    /// Read a little-endian signed `i16` — the coordinate unit.
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn read_i16_le(&mut self) -> Result<i16, WireError> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    /// Read a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// [`WireError::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn read_u32_le(&mut self) -> Result<u32, WireError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}
