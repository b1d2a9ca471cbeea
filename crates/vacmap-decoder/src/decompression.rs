// Inflate wrapper for the compression layer.
//
// Payloads carrying the 0x1F8B signature are inflated as a whole —
// the signature sits at offset 0, so the header bytes the classifier
// peeked at are part of the compressed stream, not a prefix to strip.
// Gzip is tried first (it owns the magic), then raw zlib, because the
// reference tooling for this device fed the same buffers to a zlib
// inflater and some firmware revisions are suspected of doing the
// same mislabeling in reverse.

use std::io::Read;

use flate2::read::{GzDecoder, ZlibDecoder};

/// Cap on inflated output. Real map payloads inflate to a few hundred
/// KiB at most; anything past this is a decompression bomb, not a map.
pub(crate) const MAX_INFLATED_SIZE: usize = 64 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub(crate) enum InflateError {
    /// Neither gzip nor zlib could parse the stream.
    #[error("stream is neither valid gzip nor valid zlib: {0}")]
    Corrupt(std::io::Error),

    /// The stream inflated past [`MAX_INFLATED_SIZE`].
    #[error("inflated size exceeds {limit}-byte limit")]
    TooLarge { limit: usize },
}

/// Inflate `data` with gzip, falling back to zlib.
pub(crate) fn inflate(data: &[u8]) -> Result<Vec<u8>, InflateError> {
    match inflate_with(GzDecoder::new(data)) {
        Ok(out) => Ok(out),
        Err(InflateError::TooLarge { limit }) => Err(InflateError::TooLarge { limit }),
        Err(InflateError::Corrupt(_)) => inflate_with(ZlibDecoder::new(data)),
    }
}

fn inflate_with<R: Read>(decoder: R) -> Result<Vec<u8>, InflateError> {
    let mut out = Vec::new();
    let mut limited = decoder.take(MAX_INFLATED_SIZE as u64 + 1);
    limited
        .read_to_end(&mut out)
        .map_err(InflateError::Corrupt)?;

    if out.len() > MAX_INFLATED_SIZE {
        return Err(InflateError::TooLarge {
            limit: MAX_INFLATED_SIZE,
        });
    }
    Ok(out)
}
