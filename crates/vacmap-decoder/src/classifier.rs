use vacmap_types::Strategy;
use vacmap_wire::{FrameReader, MapHeader};

/// The classifier's verdict on a payload header.
///
/// A closed set matched exhaustively by the decoder — adding a wire
/// format means adding a variant here, an arm in [`classify`], and the
/// strategy implementation, nothing else. `Unknown` and `Truncated`
/// are verdicts, not errors: the format is underspecified, so a header
/// we cannot place degrades to an unclassified result instead of
/// aborting the decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Path-class magic — body is a coordinate list.
    Path(MapHeader),
    /// Room-class magic — body is a run of 16-byte rectangle records.
    Rooms(MapHeader),
    /// Gzip signature — the whole buffer is a compressed sub-payload.
    Compressed(MapHeader),
    /// A complete header whose magic matches no known strategy.
    Unknown(MapHeader),
    /// Fewer than 3 bytes — not even a complete header. The magic is
    /// kept when at least its 2 bytes were readable.
    Truncated { magic: Option<u16> },
}

/// Inspect the header bytes and select a decode strategy.
///
/// Consumes the 3-byte header from the reader on success, leaving the
/// cursor at the strategy-specific body. On `Truncated` the cursor
/// sits after whatever prefix was readable.
#[must_use]
pub fn classify(r: &mut FrameReader<'_>) -> Classification {
    let Ok(magic) = r.read_u16_be() else {
        return Classification::Truncated { magic: None };
    };
    let Ok(version) = r.read_u8() else {
        return Classification::Truncated { magic: Some(magic) };
    };

    let header = MapHeader { magic, version };
    match Strategy::from_magic(magic) {
        Strategy::Path => Classification::Path(header),
        Strategy::Rooms => Classification::Rooms(header),
        Strategy::Compressed => Classification::Compressed(header),
        Strategy::Unclassified => Classification::Unknown(header),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_path_magic() {
        let buf = [0xAA, 0x00, 0x01, 0x17, 0x17];
        let mut r = FrameReader::new(&buf);
        let verdict = classify(&mut r);
        assert_eq!(
            verdict,
            Classification::Path(MapHeader {
                magic: 0xAA00,
                version: 1,
            })
        );
        // Cursor sits at the body.
        assert_eq!(r.position(), 3);
    }

    #[test]
    fn classifies_swapped_path_magic() {
        let buf = [0x00, 0xAA, 0x02];
        let mut r = FrameReader::new(&buf);
        assert!(matches!(classify(&mut r), Classification::Path(_)));
    }

    #[test]
    fn classifies_room_magics() {
        for head in [[0xAA, 0x55, 0x01], [0x55, 0xAA, 0x01]] {
            let mut r = FrameReader::new(&head);
            assert!(
                matches!(classify(&mut r), Classification::Rooms(_)),
                "header {head:02x?}"
            );
        }
    }

    #[test]
    fn classifies_gzip_magic() {
        let buf = [0x1F, 0x8B, 0x08, 0x00];
        let mut r = FrameReader::new(&buf);
        let verdict = classify(&mut r);
        assert_eq!(
            verdict,
            Classification::Compressed(MapHeader {
                magic: 0x1F8B,
                version: 0x08,
            })
        );
    }

    #[test]
    fn unknown_magic_is_a_verdict_not_an_error() {
        let buf = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut r = FrameReader::new(&buf);
        assert_eq!(
            classify(&mut r),
            Classification::Unknown(MapHeader {
                magic: 0xDEAD,
                version: 0xBE,
            })
        );
    }

    #[test]
    fn truncation_keeps_partial_magic() {
        let mut empty = FrameReader::new(&[]);
        assert_eq!(classify(&mut empty), Classification::Truncated { magic: None });

        let two = [0xAA, 0x00];
        let mut r = FrameReader::new(&two);
        assert_eq!(
            classify(&mut r),
            Classification::Truncated {
                magic: Some(0xAA00),
            }
        );
    }
}
