#![no_main]

use libfuzzer_sys::fuzz_target;
use vacmap_decoder::rooms::decode_rooms;
use vacmap_wire::FrameReader;

// Fuzz target: the room record scan.
//
// The single-byte resync on rejection makes this the decoder's only
// loop with a nontrivial termination argument; this target catches
// any input that stalls the cursor or panics the rectangle test.
fuzz_target!(|data: &[u8]| {
    let mut r = FrameReader::new(data);
    let rooms = decode_rooms(&mut r);

    // Ids are sequential from 0 in scan order.
    for (i, room) in rooms.iter().enumerate() {
        assert_eq!(room.id as usize, i);
    }
});
