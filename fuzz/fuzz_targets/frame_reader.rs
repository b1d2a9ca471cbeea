#![no_main]

use libfuzzer_sys::fuzz_target;
use vacmap_wire::{FrameReader, MapHeader};

// Fuzz target: bounds-checked cursor reads.
//
// Every read either returns data or a structured underrun error;
// out-of-bounds slicing panics would surface here.
fuzz_target!(|data: &[u8]| {
    let mut r = FrameReader::new(data);
    let _ = MapHeader::read_from(&mut r);

    while !r.at_end() {
        let before = r.position();
        if r.read_u32_le().is_err() && r.read_u16_le().is_err() && r.read_u8().is_err() {
            break;
        }
        assert!(r.position() > before);
    }
});
