use serde::Serialize;

use crate::coordinate::Coordinate;

/// A candidate 4-point group failed the rectangle test.
///
/// Never surfaced through the public decode API — the room scan
/// consumes it and resyncs one byte forward instead.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// The 4 corners did not contain exactly 2 distinct x values and
    /// 2 distinct y values.
    #[error("corners are not an axis-aligned rectangle ({distinct_x} distinct x, {distinct_y} distinct y)")]
    NotAxisAligned { distinct_x: usize, distinct_y: usize },
}

/// An axis-aligned rectangular room boundary.
///
/// Only constructible through [`Room::from_corners`], which enforces
/// the rectangle invariant: exactly 2 distinct x values and exactly 2
/// distinct y values across the 4 corner points. That test is both
/// necessary and sufficient for an axis-aligned rectangle (corner
/// order and degenerate duplicates included), and it is the sole
/// validity signal the undocumented format gives us.
///
/// `corners` preserves the wire order for consumers that care about
/// it; the external JSON shape carries only bounds and area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: u32,
    pub min_x: i16,
    pub max_x: i16,
    pub min_y: i16,
    pub max_y: i16,
    #[serde(skip)]
    pub corners: [Coordinate; 4],
    pub area: u32,
}

impl Room {
    /// Validate 4 corner points and build a room.
    ///
    /// # Errors
    ///
    /// [`RoomError::NotAxisAligned`] unless the points have exactly 2
    /// distinct x values and exactly 2 distinct y values.
    pub fn from_corners(id: u32, corners: [Coordinate; 4]) -> Result<Self, RoomError> {
        let distinct_x = distinct_count(corners.map(|c| c.x));
        let distinct_y = distinct_count(corners.map(|c| c.y));

        if distinct_x != 2 || distinct_y != 2 {
            return Err(RoomError::NotAxisAligned {
                distinct_x,
                distinct_y,
            });
        }

        let min_x = corners.iter().map(|c| c.x).min().unwrap_or(0);
        let max_x = corners.iter().map(|c| c.x).max().unwrap_or(0);
        let min_y = corners.iter().map(|c| c.y).min().unwrap_or(0);
        let max_y = corners.iter().map(|c| c.y).max().unwrap_or(0);

        // Bounds span at most the full i16 range, so the product fits u32.
        let width = u32::from(max_x.abs_diff(min_x));
        let height = u32::from(max_y.abs_diff(min_y));

        Ok(Self {
            id,
            min_x,
            max_x,
            min_y,
            max_y,
            corners,
            area: width * height,
        })
    }

    /// Width of the bounding box in local units.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.max_x.abs_diff(self.min_x)
    }

    /// Height of the bounding box in local units.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.max_y.abs_diff(self.min_y)
    }
}

/// Count distinct values among 4 without allocating.
fn distinct_count(values: [i16; 4]) -> usize {
    let mut seen = [0i16; 4];
    let mut n = 0;
    for v in values {
        if !seen[..n].contains(&v) {
            seen[n] = v;
            n += 1;
        }
    }
    n
}
