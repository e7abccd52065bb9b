use geo::{Contains, Coord, LineString, MultiPolygon, Point, Polygon};

use crate::core::{AlbersProjection, Geometry, Ring, ScreenPoint};

/// Region outline in surface pixels, one polygon per source polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedShape {
    pub polygons: MultiPolygon<f64>,
}

impl Default for ProjectedShape {
    fn default() -> Self {
        Self {
            polygons: MultiPolygon::new(Vec::new()),
        }
    }
}

impl ProjectedShape {
    /// Projects every polygon of `geometry`, dropping points that do not
    /// project to finite coordinates and rings left with fewer than three
    /// points. A polygon whose outer ring is dropped is dropped whole.
    #[must_use]
    pub fn project(geometry: &Geometry, projection: &AlbersProjection) -> Self {
        let polygons = geometry
            .polygons()
            .iter()
            .filter_map(|rings| {
                let mut projected = rings.iter().map(|ring| project_ring(ring, projection));
                let exterior = projected.next().flatten()?;
                Some(Polygon::new(exterior, projected.flatten().collect()))
            })
            .collect();
        Self {
            polygons: MultiPolygon::new(polygons),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.0.is_empty()
    }

    pub fn merge(&mut self, other: Self) {
        self.polygons.0.extend(other.polygons.0);
    }

    /// Interior containment; holes and boundaries are outside.
    #[must_use]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        self.polygons.contains(&Point::new(point.x, point.y))
    }

    /// Closed rings in pixel space, each polygon's exterior before its holes.
    #[must_use]
    pub fn screen_rings(&self) -> Vec<Vec<ScreenPoint>> {
        self.polygons
            .iter()
            .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
            .map(|ring| {
                ring.coords()
                    .map(|coord| ScreenPoint::new(coord.x, coord.y))
                    .collect()
            })
            .collect()
    }

    /// SVG path data: `M x,y L x,y ... Z` per ring.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        for ring in self.screen_rings() {
            for (index, point) in ring.iter().enumerate() {
                out.push(if index == 0 { 'M' } else { 'L' });
                out.push_str(&format_coordinate(point.x));
                out.push(',');
                out.push_str(&format_coordinate(point.y));
            }
            out.push('Z');
        }
        out
    }
}

fn project_ring(ring: &Ring, projection: &AlbersProjection) -> Option<LineString<f64>> {
    let coords: Vec<Coord<f64>> = ring
        .iter()
        .filter_map(|[lon, lat]| projection.project(*lon, *lat))
        .map(|point| Coord { x: point.x, y: point.y })
        .collect();
    (coords.len() >= 3).then(|| LineString::new(coords))
}

fn format_coordinate(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use geo::{LineString, MultiPolygon, Polygon};

    use super::ProjectedShape;
    use crate::core::ScreenPoint;

    fn square(x0: f64, y0: f64, size: f64) -> LineString<f64> {
        LineString::from(vec![
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
            (x0, y0),
        ])
    }

    #[test]
    fn containment_respects_holes() {
        let shape = ProjectedShape {
            polygons: MultiPolygon::new(vec![Polygon::new(
                square(0.0, 0.0, 10.0),
                vec![square(4.0, 4.0, 2.0)],
            )]),
        };
        assert!(shape.contains(ScreenPoint::new(1.0, 1.0)));
        assert!(!shape.contains(ScreenPoint::new(5.0, 5.0)));
        assert!(!shape.contains(ScreenPoint::new(11.0, 5.0)));
        assert_eq!(shape.screen_rings().len(), 2);
    }

    #[test]
    fn merged_shapes_hit_every_part() {
        let mut shape = ProjectedShape {
            polygons: MultiPolygon::new(vec![Polygon::new(square(0.0, 0.0, 2.0), vec![])]),
        };
        shape.merge(ProjectedShape {
            polygons: MultiPolygon::new(vec![Polygon::new(square(10.0, 0.0, 2.0), vec![])]),
        });
        assert!(shape.contains(ScreenPoint::new(1.0, 1.0)));
        assert!(shape.contains(ScreenPoint::new(11.0, 1.0)));
        assert!(!shape.contains(ScreenPoint::new(6.0, 1.0)));
    }

    #[test]
    fn svg_path_data_closes_each_ring() {
        let shape = ProjectedShape {
            polygons: MultiPolygon::new(vec![Polygon::new(
                LineString::from(vec![(0.0, 0.0), (1.23456, 0.0), (0.0, 2.0)]),
                vec![],
            )]),
        };
        assert_eq!(shape.to_svg_path_data(), "M0,0L1.235,0L0,2L0,0Z");
    }
}
