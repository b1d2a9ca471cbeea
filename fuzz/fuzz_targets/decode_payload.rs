#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: the full decode pipeline.
//
// decode_bytes must never panic and never error — arbitrary input
// degrades to an unclassified model. This target catches:
// - Panics in the classifier or strategy decoders
// - Unbounded recursion through nested compression layers
// - Decompression bombs blowing past the inflate cap
fuzz_target!(|data: &[u8]| {
    let model = vacmap_decoder::decode_bytes(data);
    assert_eq!(model.raw_size, data.len());
});
