use serde::Serialize;
use serde::ser::Serializer;

use vacmap_wire::MapHeader;

use crate::path::PathSegment;
use crate::room::Room;
use crate::strategy::{Strategy, UnclassifiedReason};

/// How many leading bytes the hex preview keeps.
const PREVIEW_LEN: usize = 32;

/// The result of decoding one map payload.
///
/// Aggregates the classifier metadata (magic, version, raw size, hex
/// preview) with whatever the selected strategy produced. Built once
/// per decode call and never mutated afterwards — it has no interior
/// mutability, so sharing one across threads is safe.
///
/// `rooms` and `path` are both always present; the strategy that did
/// not run simply leaves its collection empty. `strategy` records the
/// full classification chain, outermost layer first, so a payload that
/// inflated into a path reads `[Compressed, Path]`.
///
/// The serialized JSON shape:
///
/// ```text
/// {
///   "magic": "0xaa00",           // or null when no header was read
///   "version": 1,
///   "type": "compressed→path",   // strategy chain
///   "rooms": [{"id", "min_x", "max_x", "min_y", "max_y", "area"}, ...],
///   "path": [[x, y], ...],
///   "raw_size": 121,
///   "header_hex_preview": "aa000117..."
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapModel {
    #[serde(serialize_with = "serialize_magic")]
    pub magic: Option<u16>,
    pub version: Option<u8>,
    #[serde(rename = "type", serialize_with = "serialize_chain")]
    pub strategy: Vec<Strategy>,
    pub rooms: Vec<Room>,
    pub path: PathSegment,
    pub raw_size: usize,
    pub header_hex_preview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnclassifiedReason>,
}

impl MapModel {
    /// A path-class result.
    #[must_use]
    pub fn path(header: MapHeader, path: PathSegment, raw: &[u8]) -> Self {
        Self {
            magic: Some(header.magic),
            version: Some(header.version),
            strategy: vec![Strategy::Path],
            rooms: Vec::new(),
            path,
            raw_size: raw.len(),
            header_hex_preview: hex_preview(raw),
            reason: None,
        }
    }

    /// A room-class result.
    #[must_use]
    pub fn rooms(header: MapHeader, rooms: Vec<Room>, raw: &[u8]) -> Self {
        Self {
            magic: Some(header.magic),
            version: Some(header.version),
            strategy: vec![Strategy::Rooms],
            rooms,
            path: PathSegment::new(),
            raw_size: raw.len(),
            header_hex_preview: hex_preview(raw),
            reason: None,
        }
    }

    /// A degraded result: the payload could not be interpreted, but
    /// its metadata (as much of it as was readable) and a hex preview
    /// are kept for offline study.
    #[must_use]
    pub fn unclassified(
        magic: Option<u16>,
        version: Option<u8>,
        reason: UnclassifiedReason,
        raw: &[u8],
    ) -> Self {
        Self {
            magic,
            version,
            strategy: vec![Strategy::Unclassified],
            rooms: Vec::new(),
            path: PathSegment::new(),
            raw_size: raw.len(),
            header_hex_preview: hex_preview(raw),
            reason: Some(reason),
        }
    }

    /// Re-root an inner decode under a compression layer.
    ///
    /// The metadata fields are rewritten to describe the *outer*
    /// payload — the bytes the caller actually supplied — while the
    /// structural results (rooms, path, degradation reason) carry over
    /// from the inner decode. `Compressed` is prepended to the chain.
    #[must_use]
    pub fn wrap_compressed(mut self, outer: MapHeader, outer_raw: &[u8]) -> Self {
        self.magic = Some(outer.magic);
        self.version = Some(outer.version);
        self.strategy.insert(0, Strategy::Compressed);
        self.raw_size = outer_raw.len();
        self.header_hex_preview = hex_preview(outer_raw);
        self
    }

    /// Number of decoded rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Sum of all room areas in squared local units.
    #[must_use]
    pub fn total_area(&self) -> u64 {
        self.rooms.iter().map(|r| u64::from(r.area)).sum()
    }

    /// Total area in m², assuming millimeter local units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_area_m2(&self) -> f64 {
        self.total_area() as f64 / 1_000_000.0
    }

    /// Display form of the strategy chain, e.g. `"compressed→path"`.
    #[must_use]
    pub fn strategy_label(&self) -> String {
        Strategy::chain_label(&self.strategy)
    }
}

/// Hex of the first 32 payload bytes (or the whole payload when
/// shorter), for logging and offline study of unknown formats.
fn hex_preview(raw: &[u8]) -> String {
    hex::encode(&raw[..raw.len().min(PREVIEW_LEN)])
}

fn serialize_magic<S: Serializer>(magic: &Option<u16>, s: S) -> Result<S::Ok, S::Error> {
    match magic {
        Some(value) => s.serialize_str(&format!("{value:#06x}")),
        None => s.serialize_none(),
    }
}

fn serialize_chain<S: Serializer>(chain: &[Strategy], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&Strategy::chain_label(chain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    fn header(magic: u16, version: u8) -> MapHeader {
        MapHeader { magic, version }
    }

    #[test]
    fn path_model_keeps_metadata() {
        let raw = [0xAA, 0x00, 0x01, 0x10, 0x00, 0x20, 0x00];
        let path: PathSegment = [(16, 32)].into_iter().map(Coordinate::from).collect();
        let model = MapModel::path(header(0xAA00, 1), path, &raw);

        assert_eq!(model.magic, Some(0xAA00));
        assert_eq!(model.version, Some(1));
        assert_eq!(model.strategy, vec![Strategy::Path]);
        assert_eq!(model.raw_size, 7);
        assert_eq!(model.header_hex_preview, "aa000110002000");
        assert!(model.rooms.is_empty());
        assert!(model.reason.is_none());
    }

    #[test]
    fn preview_truncates_at_32_bytes() {
        let raw = [0xAB; 100];
        let model =
            MapModel::unclassified(None, None, UnclassifiedReason::UnrecognizedFormat, &raw);
        assert_eq!(model.header_hex_preview.len(), 64); // 32 bytes, 2 hex chars each
        assert_eq!(model.raw_size, 100);
    }

    #[test]
    fn area_summaries() {
        let rooms = vec![
            Room::from_corners(
                0,
                [(0, 0), (1000, 0), (1000, 2000), (0, 2000)].map(Coordinate::from),
            )
            .unwrap(),
            Room::from_corners(
                1,
                [(0, 0), (3000, 0), (3000, 1000), (0, 1000)].map(Coordinate::from),
            )
            .unwrap(),
        ];
        let model = MapModel::rooms(header(0xAA55, 1), rooms, &[0xAA, 0x55, 0x01]);

        assert_eq!(model.room_count(), 2);
        assert_eq!(model.total_area(), 2_000_000 + 3_000_000);
        assert!((model.total_area_m2() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrap_compressed_rewrites_outer_metadata() {
        let inner_raw = [0xAA, 0x00, 0x01, 0x10, 0x00, 0x20, 0x00];
        let outer_raw = [0x1F, 0x8B, 0x08, 0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00];
        let path: PathSegment = [(16, 32)].into_iter().map(Coordinate::from).collect();

        let inner = MapModel::path(header(0xAA00, 1), path, &inner_raw);
        let model = inner.wrap_compressed(header(0x1F8B, 0x08), &outer_raw);

        assert_eq!(model.magic, Some(0x1F8B));
        assert_eq!(model.strategy, vec![Strategy::Compressed, Strategy::Path]);
        assert_eq!(model.strategy_label(), "compressed→path");
        assert_eq!(model.raw_size, outer_raw.len());
        assert_eq!(model.path.len(), 1);
    }

    #[test]
    fn json_shape_matches_external_contract() {
        let raw = [0xAA, 0x00, 0x01, 0x10, 0x00, 0x20, 0x00];
        let path: PathSegment = [(16, 32)].into_iter().map(Coordinate::from).collect();
        let model = MapModel::path(header(0xAA00, 1), path, &raw);

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "magic": "0xaa00",
                "version": 1,
                "type": "path",
                "rooms": [],
                "path": [[16, 32]],
                "raw_size": 7,
                "header_hex_preview": "aa000110002000",
            })
        );
    }

    #[test]
    fn unclassified_json_keeps_reason_and_null_magic() {
        let model = MapModel::unclassified(
            None,
            None,
            UnclassifiedReason::TruncatedHeader,
            &[0xAA],
        );
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["magic"], serde_json::Value::Null);
        assert_eq!(json["type"], "unclassified");
        assert_eq!(json["reason"], "truncated_header");
    }
}
