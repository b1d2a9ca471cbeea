use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A signed 16-bit `(x, y)` pair in local distance units.
///
/// The vendor never documents the unit; captured payloads are
/// consistent with millimeters, which is what the area conversion on
/// [`crate::MapModel`] assumes. Stored as raw `i16` exactly as read
/// from the wire — no scaling happens in the decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i16,
    pub y: i16,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl From<(i16, i16)> for Coordinate {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

// Serialized as a bare `[x, y]` pair — the external JSON shape uses
// coordinate arrays, not `{"x": .., "y": ..}` objects.
impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.x)?;
        pair.serialize_element(&self.y)?;
        pair.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_pair() {
        let c = Coordinate::new(-7168, 2562);
        assert_eq!(serde_json::to_string(&c).unwrap(), "[-7168,2562]");
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Coordinate::from((3, -4)), Coordinate::new(3, -4));
    }
}
