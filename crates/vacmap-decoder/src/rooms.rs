use vacmap_types::{Coordinate, Room};
use vacmap_wire::FrameReader;

/// Bytes per candidate room record: 4 corner pairs × 4 bytes.
pub const ROOM_RECORD_LEN: usize = 16;

/// Scan the reader's remaining bytes for rectangle room records.
///
/// A candidate is 4 consecutive `(i16 LE, i16 LE)` corner pairs. It is
/// accepted iff the corners pass the axis-aligned rectangle test
/// (exactly 2 distinct x values and 2 distinct y values); accepted
/// rooms get sequential ids in scan order.
///
/// Recovery is asymmetric by design: acceptance advances the cursor by
/// the full 16-byte record, rejection rewinds to one byte past the
/// candidate's start and retries. The format carries no discovered
/// record separator or length prefix, so single-byte resync is the
/// only mechanism found that realigns on valid records after noise.
/// This may be papering over a framing rule we simply haven't found —
/// keep the behavior until there is new evidence about the real wire
/// format.
///
/// The scan ends when fewer than 16 bytes remain (no candidate can
/// form). Each iteration advances the cursor by at least one byte, so
/// the scan is linear in the body length.
#[must_use]
pub fn decode_rooms(r: &mut FrameReader<'_>) -> Vec<Room> {
    let mut rooms = Vec::new();
    let mut next_id = 0u32;

    while r.remaining() >= ROOM_RECORD_LEN {
        let start = r.position();

        let Some(corners) = read_corners(r) else { break };

        if let Ok(room) = Room::from_corners(next_id, corners) {
            rooms.push(room);
            next_id += 1;
            // Cursor already sits one full record forward.
        } else if r.set_position(start + 1).is_err() {
            break;
        }
    }

    rooms
}

/// Read one 4-corner candidate. Guarded by the caller's remaining()
/// check; `None` is unreachable in practice but kept over a panic.
fn read_corners(r: &mut FrameReader<'_>) -> Option<[Coordinate; 4]> {
    let mut corners = [Coordinate::default(); 4];
    for corner in &mut corners {
        let x = r.read_i16_le().ok()?;
        let y = r.read_i16_le().ok()?;
        *corner = Coordinate::new(x, y);
    }
    Some(corners)
}
