use vacmap_types::{Coordinate, PathSegment};
use vacmap_wire::FrameReader;

/// Bytes per coordinate pair on the wire: two i16 LE values.
pub const COORD_PAIR_LEN: usize = 4;

/// Open plausibility bound on either axis, in local units.
///
/// Captured traversal paths stay well inside ±10 m (assuming mm), so a
/// value at or beyond this bound almost certainly means the scan ran
/// past the real end of the path section into trailing garbage or the
/// next section. Out-of-range pairs are dropped, not treated as a
/// stop signal — plausible data has been observed after garbage runs.
pub const PLAUSIBLE_BOUND: i16 = 10_000;

/// Extract a traversal path from the reader's remaining bytes.
///
/// Reads one `(i16 LE, i16 LE)` pair per 4 bytes until fewer than 4
/// bytes remain, keeping only pairs where both axes pass the
/// plausibility filter. Never fails; an all-garbage body simply
/// produces an empty path.
#[must_use]
pub fn decode_path(r: &mut FrameReader<'_>) -> PathSegment {
    let mut path = PathSegment::new();

    while r.remaining() >= COORD_PAIR_LEN {
        // Guarded by the loop condition; these reads cannot underrun.
        let Ok(x) = r.read_i16_le() else { break };
        let Ok(y) = r.read_i16_le() else { break };

        if plausible(x) && plausible(y) {
            path.push(Coordinate::new(x, y));
        }
    }

    path
}

fn plausible(value: i16) -> bool {
    -PLAUSIBLE_BOUND < value && value < PLAUSIBLE_BOUND
}
