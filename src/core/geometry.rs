use serde::{Deserialize, Serialize};

/// `[longitude, latitude]` in degrees.
pub type Position = [f64; 2];

/// Closed ring of positions; the first position is repeated at the end.
pub type Ring = Vec<Position>;

/// Polygonal boundary geometry of one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Polygons as ring lists, outer ring first.
    #[must_use]
    pub fn polygons(&self) -> &[Vec<Ring>] {
        match self {
            Self::Polygon(rings) => std::slice::from_ref(rings),
            Self::MultiPolygon(polygons) => polygons,
        }
    }

    /// Iterates every ring (outer and holes) of every polygon.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons().iter().flatten()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings().all(Vec::is_empty)
    }

    /// Longitude/latitude bounding box as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> Option<(Position, Position)> {
        let mut positions = self.rings().flatten();
        let first = *positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| {
            (
                [min[0].min(p[0]), min[1].min(p[1])],
                [max[0].max(p[0]), max[1].max(p[1])],
            )
        }))
    }
}
