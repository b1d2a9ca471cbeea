use serde::Serialize;
use vacmap_wire::header;

/// Decode strategies — the closed set of interpretations the
/// classifier can select.
///
/// Each variant maps to the header magic values observed in captured
/// payloads. The set is closed on purpose: adding a strategy means
/// adding a variant here and an arm in the classifier, nothing else.
///
/// ```text
/// ┌────────────────┬──────────────┬──────────────────────────────┐
/// │ Magic          │ Variant      │ Body interpretation          │
/// ├────────────────┼──────────────┼──────────────────────────────┤
/// │ 0xAA00, 0x00AA │ Path         │ i16 LE coordinate pairs      │
/// │ 0xAA55, 0x55AA │ Rooms        │ 16-byte rectangle records    │
/// │ 0x1F8B         │ Compressed   │ zlib/gzip sub-payload        │
/// │ anything else  │ Unclassified │ kept raw for offline study   │
/// └────────────────┴──────────────┴──────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Path,
    Rooms,
    Compressed,
    Unclassified,
}

impl Strategy {
    /// Map a header magic to a strategy.
    ///
    /// Unrecognized values classify as `Unclassified` — the format is
    /// underspecified, so an unknown magic is data to keep, not an
    /// error to raise.
    #[must_use]
    pub fn from_magic(magic: u16) -> Self {
        match magic {
            header::MAGIC_PATH | header::MAGIC_PATH_SWAPPED => Self::Path,
            header::MAGIC_ROOMS | header::MAGIC_ROOMS_SWAPPED => Self::Rooms,
            header::MAGIC_GZIP => Self::Compressed,
            _ => Self::Unclassified,
        }
    }

    /// Lowercase display label, as used in the external JSON `type`
    /// field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Rooms => "rooms",
            Self::Compressed => "compressed",
            Self::Unclassified => "unclassified",
        }
    }

    /// Join a strategy chain into its display form, outermost layer
    /// first: `[Compressed, Path]` → `"compressed→path"`.
    #[must_use]
    pub fn chain_label(chain: &[Self]) -> String {
        let mut out = String::new();
        for (i, strategy) in chain.iter().enumerate() {
            if i > 0 {
                out.push('→');
            }
            out.push_str(strategy.label());
        }
        out
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a payload ended up unclassified.
///
/// Carried on the [`crate::MapModel`] so callers can tell a truly
/// unknown header apart from a truncated or corrupt one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnclassifiedReason {
    /// Header bytes matched no known strategy.
    UnrecognizedFormat,
    /// Fewer than 3 bytes — not even a complete header.
    TruncatedHeader,
    /// Compression magic matched but inflating the buffer failed.
    DecompressionFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_magics_map_to_strategies() {
        let cases = [
            (0xAA00, Strategy::Path),
            (0x00AA, Strategy::Path),
            (0xAA55, Strategy::Rooms),
            (0x55AA, Strategy::Rooms),
            (0x1F8B, Strategy::Compressed),
        ];
        for (magic, expected) in cases {
            assert_eq!(
                Strategy::from_magic(magic),
                expected,
                "magic {magic:#06x}"
            );
        }
    }

    #[test]
    fn unknown_magic_degrades_to_unclassified() {
        assert_eq!(Strategy::from_magic(0x0000), Strategy::Unclassified);
        assert_eq!(Strategy::from_magic(0xDEAD), Strategy::Unclassified);
        assert_eq!(Strategy::from_magic(0xFFFF), Strategy::Unclassified);
    }

    #[test]
    fn chain_label_joins_layers() {
        assert_eq!(Strategy::chain_label(&[Strategy::Path]), "path");
        assert_eq!(
            Strategy::chain_label(&[Strategy::Compressed, Strategy::Path]),
            "compressed→path"
        );
        assert_eq!(
            Strategy::chain_label(&[
                Strategy::Compressed,
                Strategy::Compressed,
                Strategy::Rooms
            ]),
            "compressed→compressed→rooms"
        );
    }
}
