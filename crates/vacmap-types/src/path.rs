use serde::Serialize;

use crate::coordinate::Coordinate;

/// An ordered sequence of coordinates — the device's traversal path.
///
/// Order is significant (it is the order the device visited the
/// points) and the segment may legitimately be empty: a path-class
/// payload whose every candidate pair failed the plausibility filter
/// still decodes, just to nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathSegment(Vec<Coordinate>);

impl PathSegment {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a point in traversal order.
    pub fn push(&mut self, point: Coordinate) {
        self.0.push(point);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }
}

impl FromIterator<Coordinate> for PathSegment {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PathSegment {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
