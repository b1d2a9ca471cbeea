//! Shared fixtures for the vacmap integration tests and benchmarks.
//!
//! Everything here builds payload *bytes*, never models — the point of
//! the suite is pushing realistic wire input through the full decode
//! pipeline.

use std::io::Write as _;

use flate2::Compression;
use flate2::write::GzEncoder;

/// A real map payload captured from a device status dump (DPS 15),
/// base64 as transported. Decodes to a version-1 path payload whose
/// plausibility filter keeps exactly 5 of 29 coordinate pairs.
pub const CAPTURED_PATH_B64: &str = "qgABFxeqAAMpAQAqqgBcGwUABAEWAzIDlQMyA5UB2AEWAdgABAW+ArAHIAKwByAAxAW+AMQABP4q/+UAQP/lAED+vf4q/r0ABP+1/KECivyhAor6Bf+1+gUABADk/vUBrv71Aa7+KgDk/iqQqgACEwATqgADFQEAFg==";

/// Build a path payload: `0xAA00` magic, given version, then the
/// coordinate pairs as i16 LE.
#[must_use]
pub fn path_payload(version: u8, pairs: &[(i16, i16)]) -> Vec<u8> {
    let mut buf = vec![0xAA, 0x00, version];
    for &(x, y) in pairs {
        buf.extend_from_slice(&x.to_le_bytes());
        buf.extend_from_slice(&y.to_le_bytes());
    }
    buf
}

/// Build a rooms payload: `0xAA55` magic, version 1, then one 16-byte
/// record per rectangle, corners in CCW order from the origin corner.
#[must_use]
pub fn rooms_payload(rects: &[(i16, i16, i16, i16)]) -> Vec<u8> {
    let mut buf = vec![0xAA, 0x55, 0x01];
    for &(min_x, min_y, max_x, max_y) in rects {
        for (x, y) in [
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
        ] {
            buf.extend_from_slice(&x.to_le_bytes());
            buf.extend_from_slice(&y.to_le_bytes());
        }
    }
    buf
}

/// Gzip-wrap a payload the way compressed captures arrive.
///
/// # Panics
///
/// Panics on encoder failure, which `Vec` sinks do not produce.
#[must_use]
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data).expect("write to Vec cannot fail");
    enc.finish().expect("finish to Vec cannot fail")
}
