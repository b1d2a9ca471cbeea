use crate::error::WireError;
use crate::frame::FrameReader;

// Quick note on the magic values: the format is reverse-engineered, and
// the markers below are the only header patterns observed in captured
// payloads. 0xAA is the vendor's section marker byte; 0x1F 0x8B is the
// standard gzip signature. The magic is compared in big-endian form so
// the constants read the same as a hex dump of the wire.

/// Path-class magic: payload body is a traversal path (coordinate list).
pub const MAGIC_PATH: u16 = 0xAA00;

/// Path-class magic, byte-swapped variant seen on some firmware.
pub const MAGIC_PATH_SWAPPED: u16 = 0x00AA;

/// Room-class magic: payload body is a sequence of rectangle records.
pub const MAGIC_ROOMS: u16 = 0xAA55;

/// Room-class magic, byte-swapped variant.
pub const MAGIC_ROOMS_SWAPPED: u16 = 0x55AA;

/// Gzip signature — the payload is a compressed sub-payload.
pub const MAGIC_GZIP: u16 = 0x1F8B;

/// Total header size in bytes (fixed): 2-byte magic + 1-byte version.
pub const HEADER_SIZE: usize = 3;

/// Map payload header — the first 3 bytes of every payload.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────┐
/// │ Offset │ Size    │ Description                      │
/// ├────────┼─────────┼──────────────────────────────────┤
/// │ 0x00   │ 2 bytes │ Magic (compared big-endian)      │
/// │ 0x02   │ 1 byte  │ Version (firmware-dependent)     │
/// └────────┴─────────┴──────────────────────────────────┘
/// ```
///
/// Unlike a documented format, an unrecognized magic is *not* a parse
/// error here — classification happens downstream, and unknown headers
/// degrade to an unclassified result. This type only fails when the
/// buffer is too short to hold a header at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapHeader {
    pub magic: u16,
    pub version: u8,
}

impl MapHeader {
    /// Parse a header from the reader, consuming exactly
    /// [`HEADER_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::BufferUnderrun`] if fewer than 3 bytes
    /// remain. The magic read may succeed while the version read fails;
    /// the caller can observe how far the cursor got.
    pub fn read_from(r: &mut FrameReader<'_>) -> Result<Self, WireError> {
        let magic = r.read_u16_be()?;
        let version = r.read_u8()?;
        Ok(Self { magic, version })
    }

    /// Display form of the magic, e.g. `"0xaa00"`.
    #[must_use]
    pub fn magic_hex(&self) -> String {
        format!("{:#06x}", self.magic)
    }
}
