//! Golden regression tests: a captured device payload pinned to its
//! exact decode output.
//!
//! The heuristics here are a best-effort reading of an undocumented
//! wire format, so the one thing the suite must never allow is a
//! silent drift in what a known capture decodes to. Any change to the
//! header rules, the plausibility filter, or the serialization shape
//! shows up as a snapshot diff and has to be accepted deliberately.

use vacmap_decoder::decode_base64;
use vacmap_tests::CAPTURED_PATH_B64;
use vacmap_types::{Coordinate, Strategy};

#[test]
fn captured_path_payload_decodes_to_pinned_model() {
    let model = decode_base64(CAPTURED_PATH_B64).expect("capture is valid base64");

    assert_eq!(model.magic, Some(0xAA00));
    assert_eq!(model.version, Some(1));
    assert_eq!(model.strategy, vec![Strategy::Path]);
    assert_eq!(model.raw_size, 121);
    assert!(model.rooms.is_empty());
    assert_eq!(
        model.path.points(),
        &[
            Coordinate::new(5911, 170),
            Coordinate::new(1307, 1024),
            Coordinate::new(1530, 1024),
            Coordinate::new(-7168, -2562),
            Coordinate::new(768, 277),
        ]
    );
}

#[test]
fn captured_path_payload_json_snapshot() {
    let model = decode_base64(CAPTURED_PATH_B64).expect("capture is valid base64");
    let json = serde_json::to_string_pretty(&model).expect("model serializes");

    insta::assert_snapshot!(json, @r#"
    {
      "magic": "0xaa00",
      "version": 1,
      "type": "path",
      "rooms": [],
      "path": [
        [
          5911,
          170
        ],
        [
          1307,
          1024
        ],
        [
          1530,
          1024
        ],
        [
          -7168,
          -2562
        ],
        [
          768,
          277
        ]
      ],
      "raw_size": 121,
      "header_hex_preview": "aa00011717aa00032901002aaa005c1b0500040116033203950332039501d801"
    }
    "#);
}

#[test]
fn captured_payload_survives_a_compression_wrap() {
    // The same capture, gzip-wrapped, must come out identical apart
    // from the outer-layer metadata.
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD as BASE64;

    let raw = BASE64
        .decode(CAPTURED_PATH_B64)
        .expect("capture is valid base64");
    let direct = vacmap_decoder::decode_bytes(&raw);
    let wrapped = vacmap_decoder::decode_bytes(&vacmap_tests::gzip(&raw));

    assert_eq!(wrapped.path, direct.path);
    assert_eq!(
        wrapped.strategy,
        vec![Strategy::Compressed, Strategy::Path]
    );
    assert_eq!(wrapped.magic, Some(0x1F8B));
}
