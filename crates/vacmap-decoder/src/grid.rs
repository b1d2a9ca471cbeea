use std::io::{self, Write};

use vacmap_wire::FrameReader;

/// Bytes skipped between the dimension words and the first pixel.
/// Observed layouts keep a 16-byte header regardless of grid size.
pub const GRID_HEADER_LEN: usize = 16;

/// Upper bound (exclusive) on either grid dimension. Matches the path
/// plausibility bound: a consumer-device map never approaches 10000
/// cells on a side, so larger values mean we misread the layout.
pub const MAX_GRID_DIM: u32 = 10_000;

/// A candidate occupancy grid found inside a payload.
///
/// Probing is heuristic like everything else in this decoder: two
/// u32 LE dimension words at offsets 0 and 4, a 16-byte header, then
/// one byte per cell row-major. [`GridBitmap::detect`] only claims a
/// grid when the dimensions are plausible and the buffer actually
/// holds `width * height` pixel bytes past the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBitmap<'a> {
    pub width: u32,
    pub height: u32,
    pixels: &'a [u8],
}

impl<'a> GridBitmap<'a> {
    /// Probe `bytes` for a grid layout. `None` means the heuristic
    /// did not fire — never an error, the caller just has no grid.
    #[must_use]
    pub fn detect(bytes: &'a [u8]) -> Option<Self> {
        let mut r = FrameReader::new(bytes);
        let width = r.read_u32_le().ok()?;
        let height = r.read_u32_le().ok()?;

        if width == 0 || height == 0 || width >= MAX_GRID_DIM || height >= MAX_GRID_DIM {
            return None;
        }

        let cells = usize::try_from(u64::from(width) * u64::from(height)).ok()?;
        let body = bytes.get(GRID_HEADER_LEN..)?;
        if body.len() < cells {
            return None;
        }

        Some(Self {
            width,
            height,
            pixels: &body[..cells],
        })
    }

    /// Row-major cell bytes, exactly `width * height` of them.
    #[must_use]
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Write the grid as a binary PGM (P5) image, one gray byte per
    /// cell, maxval 255. The output opens in any netpbm-aware viewer,
    /// which is the quickest way to eyeball whether the probe found a
    /// real floor map or noise.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from `out`.
    pub fn write_pgm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "P5\n{} {}\n255\n", self.width, self.height)?;
        out.write_all(self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_payload(width: u32, height: u32, fill: u8) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&width.to_le_bytes());
        buf.extend_from_slice(&height.to_le_bytes());
        buf.resize(GRID_HEADER_LEN, 0);
        buf.resize(GRID_HEADER_LEN + (width * height) as usize, fill);
        buf
    }

    #[test]
    fn detects_plausible_grid() {
        let buf = grid_payload(8, 4, 0x7F);
        let grid = GridBitmap::detect(&buf).unwrap();
        assert_eq!((grid.width, grid.height), (8, 4));
        assert_eq!(grid.pixels().len(), 32);
        assert!(grid.pixels().iter().all(|&b| b == 0x7F));
    }

    #[test]
    fn rejects_zero_and_oversized_dimensions() {
        assert!(GridBitmap::detect(&grid_payload(0, 4, 0)).is_none());

        let mut buf = Vec::new();
        buf.extend_from_slice(&MAX_GRID_DIM.to_le_bytes());
        buf.extend_from_slice(&2u32.to_le_bytes());
        buf.resize(64, 0);
        assert!(GridBitmap::detect(&buf).is_none());
    }

    #[test]
    fn rejects_buffer_too_short_for_cells() {
        let mut buf = grid_payload(8, 4, 0);
        buf.truncate(buf.len() - 1);
        assert!(GridBitmap::detect(&buf).is_none());
    }

    #[test]
    fn rejects_buffer_shorter_than_dimension_words() {
        assert!(GridBitmap::detect(&[0x08, 0x00, 0x00]).is_none());
    }

    #[test]
    fn trailing_bytes_past_the_cells_are_ignored() {
        let mut buf = grid_payload(2, 2, 0xFF);
        buf.extend_from_slice(&[0xDE, 0xAD]);
        let grid = GridBitmap::detect(&buf).unwrap();
        assert_eq!(grid.pixels(), &[0xFF; 4]);
    }

    #[test]
    fn pgm_output_has_netpbm_header() {
        let buf = grid_payload(3, 2, 0x40);
        let grid = GridBitmap::detect(&buf).unwrap();

        let mut out = Vec::new();
        grid.write_pgm(&mut out).unwrap();
        assert_eq!(&out[..10], b"P5\n3 2\n255");
        assert_eq!(out.len(), 11 + 6);
    }
}
