use std::borrow::Cow;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use vacmap_types::{MapModel, UnclassifiedReason};
use vacmap_wire::FrameReader;

use crate::classifier::{Classification, classify};
use crate::decompression::inflate;
use crate::error::DecodeError;
use crate::path::decode_path;
use crate::rooms::decode_rooms;

/// How many compression layers a single decode will peel.
///
/// Captured payloads are compressed at most once; a deeper nesting is
/// either an encoder bug or a crafted bomb. The cap keeps recursion
/// bounded either way — the layer at the cap is reported as
/// unclassified with a decompression-failed reason rather than
/// inflated.
const MAX_COMPRESSION_DEPTH: usize = 4;

/// Decode a base64 transport string into a [`MapModel`].
///
/// Surrounding ASCII whitespace is tolerated because payloads lifted
/// from status dumps usually carry a trailing newline. Base64 is the
/// only fallible step; see [`decode_bytes`] for the byte-level policy.
///
/// # Errors
///
/// Returns [`DecodeError::Base64`] when the trimmed input is not
/// standard-alphabet base64.
pub fn decode_base64(input: &str) -> Result<MapModel, DecodeError> {
    let bytes = BASE64.decode(input.trim())?;
    Ok(decode_bytes(&bytes))
}

/// Decode a raw payload into a [`MapModel`]. Never fails: a payload
/// the heuristics cannot place comes back as an unclassified model
/// with a hex preview instead of an error.
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> MapModel {
    decode_layer(bytes, 0)
}

/// Peel compression layers off a payload without decoding the result.
///
/// Inflates while the buffer carries the gzip signature, up to the
/// same depth cap as [`decode_bytes`]. Stops at the first layer that
/// fails to inflate and returns whatever was reached — callers probing
/// for structure (e.g. a grid layout) want the innermost bytes, not a
/// verdict about the compression.
#[must_use]
pub fn peel_compression(bytes: &[u8]) -> Cow<'_, [u8]> {
    let mut current = Cow::Borrowed(bytes);
    for _ in 0..MAX_COMPRESSION_DEPTH {
        if !current.starts_with(&[0x1F, 0x8B]) {
            break;
        }
        match inflate(&current) {
            Ok(inner) => current = Cow::Owned(inner),
            Err(_) => break,
        }
    }
    current
}

fn decode_layer(bytes: &[u8], depth: usize) -> MapModel {
    let mut r = FrameReader::new(bytes);

    match classify(&mut r) {
        Classification::Path(header) => MapModel::path(header, decode_path(&mut r), bytes),
        Classification::Rooms(header) => MapModel::rooms(header, decode_rooms(&mut r), bytes),
        Classification::Compressed(header) => {
            if depth >= MAX_COMPRESSION_DEPTH {
                return MapModel::unclassified(
                    Some(header.magic),
                    Some(header.version),
                    UnclassifiedReason::DecompressionFailed,
                    bytes,
                );
            }
            // The gzip stream spans the whole buffer, header included.
            match inflate(bytes) {
                Ok(inner) => decode_layer(&inner, depth + 1).wrap_compressed(header, bytes),
                Err(_) => MapModel::unclassified(
                    Some(header.magic),
                    Some(header.version),
                    UnclassifiedReason::DecompressionFailed,
                    bytes,
                ),
            }
        }
        Classification::Unknown(header) => MapModel::unclassified(
            Some(header.magic),
            Some(header.version),
            UnclassifiedReason::UnrecognizedFormat,
            bytes,
        ),
        Classification::Truncated { magic } => MapModel::unclassified(
            magic,
            None,
            UnclassifiedReason::TruncatedHeader,
            bytes,
        ),
    }
}
