//! Boundary decoding: TopoJSON topologies and GeoJSON feature collections.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::core::format::format_number;
use crate::core::{Geometry, Position, Region, Ring};
use crate::error::{AtlasError, AtlasResult};

/// Property holding the join key.
pub const KEY_PROPERTY: &str = "STATE";
/// Property holding the display name.
pub const NAME_PROPERTY: &str = "name";

type Properties = Map<String, Value>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum BoundaryDocument {
    Topology {
        #[serde(default)]
        transform: Option<TopoTransform>,
        arcs: Vec<Vec<Vec<f64>>>,
        objects: IndexMap<String, TopoObject>,
    },
    FeatureCollection {
        features: Vec<GeoFeature>,
    },
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct TopoTransform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum TopoObject {
    GeometryCollection {
        geometries: Vec<TopoObject>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        properties: Properties,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        properties: Properties,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
struct GeoFeature {
    #[serde(default)]
    geometry: Option<GeoGeometry>,
    #[serde(default)]
    properties: Option<Properties>,
}

#[derive(Debug, Deserialize)]
struct GeoGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// Decodes boundary text into regions with empty value maps.
///
/// `object_name` selects the topology object; when `None` the first object is
/// used. Features without a key property are skipped.
pub fn parse_boundary_regions(text: &str, object_name: Option<&str>) -> AtlasResult<Vec<Region>> {
    let document: BoundaryDocument = serde_json::from_str(text)
        .map_err(|e| AtlasError::InvalidData(format!("failed to parse boundary json: {e}")))?;

    let features = match document {
        BoundaryDocument::Topology {
            transform,
            arcs,
            objects,
        } => {
            let arcs = decode_arcs(&arcs, transform)?;
            let object = match object_name {
                Some(name) => objects.get(name).ok_or_else(|| {
                    AtlasError::InvalidData(format!("topology has no object named `{name}`"))
                })?,
                None => objects
                    .values()
                    .next()
                    .ok_or_else(|| AtlasError::InvalidData("topology has no objects".to_owned()))?,
            };
            let mut features = Vec::new();
            collect_topo_features(object, &arcs, &mut features)?;
            features
        }
        BoundaryDocument::FeatureCollection { features } => features
            .into_iter()
            .filter_map(|feature| {
                let geometry = feature.geometry?.into_geometry().transpose()?;
                Some(geometry.map(|g| (g, feature.properties.unwrap_or_default())))
            })
            .collect::<AtlasResult<Vec<_>>>()?,
    };

    let mut regions = Vec::with_capacity(features.len());
    for (geometry, properties) in features {
        let Some(key) = properties.get(KEY_PROPERTY).and_then(property_text) else {
            warn!("skipping boundary feature without a `{KEY_PROPERTY}` property");
            continue;
        };
        let name = properties
            .get(NAME_PROPERTY)
            .and_then(property_text)
            .unwrap_or_else(|| key.clone());
        regions.push(Region::new(key, name, geometry));
    }
    debug!(regions = regions.len(), "decoded boundary regions");
    Ok(regions)
}

impl GeoGeometry {
    fn into_geometry(self) -> AtlasResult<Option<Geometry>> {
        match self.kind.as_str() {
            "Polygon" => {
                let rings: Vec<Vec<Vec<f64>>> = coordinates(self.coordinates)?;
                Ok(Some(Geometry::Polygon(to_rings(rings)?)))
            }
            "MultiPolygon" => {
                let polygons: Vec<Vec<Vec<Vec<f64>>>> = coordinates(self.coordinates)?;
                Ok(Some(Geometry::MultiPolygon(
                    polygons
                        .into_iter()
                        .map(to_rings)
                        .collect::<AtlasResult<_>>()?,
                )))
            }
            other => {
                debug!(kind = other, "skipping unsupported feature geometry");
                Ok(None)
            }
        }
    }
}

fn coordinates<T: serde::de::DeserializeOwned>(value: Value) -> AtlasResult<T> {
    serde_json::from_value(value)
        .map_err(|e| AtlasError::InvalidData(format!("malformed geometry coordinates: {e}")))
}

fn to_rings(rings: Vec<Vec<Vec<f64>>>) -> AtlasResult<Vec<Ring>> {
    rings
        .into_iter()
        .map(|ring| ring.iter().map(|p| to_position(p)).collect())
        .collect()
}

fn to_position(raw: &[f64]) -> AtlasResult<Position> {
    match raw {
        [x, y, ..] => Ok([*x, *y]),
        _ => Err(AtlasError::InvalidData(
            "positions need at least two coordinates".to_owned(),
        )),
    }
}

/// Decodes every arc to absolute positions, undoing quantization and delta
/// encoding when the topology carries a transform.
fn decode_arcs(
    arcs: &[Vec<Vec<f64>>],
    transform: Option<TopoTransform>,
) -> AtlasResult<Vec<Vec<Position>>> {
    arcs.iter()
        .map(|arc| {
            let (mut x, mut y) = (0.0, 0.0);
            arc.iter()
                .map(|raw| {
                    let [px, py] = to_position(raw)?;
                    Ok(match transform {
                        Some(t) => {
                            x += px;
                            y += py;
                            [x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1]]
                        }
                        None => [px, py],
                    })
                })
                .collect()
        })
        .collect()
}

/// Joins arcs into one ring; a negative index `!i` walks arc `i` backwards.
fn stitch_ring(arcs: &[Vec<Position>], indices: &[i64]) -> AtlasResult<Ring> {
    let mut points: Ring = Vec::new();
    for &index in indices {
        let (arc_index, reversed) = if index < 0 {
            ((!index) as usize, true)
        } else {
            (index as usize, false)
        };
        let arc = arcs
            .get(arc_index)
            .ok_or_else(|| AtlasError::InvalidData(format!("arc index {index} out of range")))?;
        // Consecutive arcs share their junction point.
        points.pop();
        if reversed {
            points.extend(arc.iter().rev());
        } else {
            points.extend(arc.iter());
        }
    }
    if let Some(first) = points.first().copied() {
        while points.len() < 4 {
            points.push(first);
        }
    }
    Ok(points)
}

fn collect_topo_features(
    object: &TopoObject,
    arcs: &[Vec<Position>],
    out: &mut Vec<(Geometry, Properties)>,
) -> AtlasResult<()> {
    match object {
        TopoObject::GeometryCollection { geometries } => {
            for geometry in geometries {
                collect_topo_features(geometry, arcs, out)?;
            }
        }
        TopoObject::Polygon {
            arcs: rings,
            properties,
        } => {
            let rings = rings
                .iter()
                .map(|ring| stitch_ring(arcs, ring))
                .collect::<AtlasResult<_>>()?;
            out.push((Geometry::Polygon(rings), properties.clone()));
        }
        TopoObject::MultiPolygon {
            arcs: polygons,
            properties,
        } => {
            let polygons = polygons
                .iter()
                .map(|rings| {
                    rings
                        .iter()
                        .map(|ring| stitch_ring(arcs, ring))
                        .collect::<AtlasResult<Vec<_>>>()
                })
                .collect::<AtlasResult<_>>()?;
            out.push((Geometry::MultiPolygon(polygons), properties.clone()));
        }
        TopoObject::Unsupported => {
            debug!("skipping unsupported topology geometry");
        }
    }
    Ok(())
}

/// Text form of a key or name property; numbers use their shortest decimal form.
fn property_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => format_number(f),
            _ => n.to_string(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_arcs, stitch_ring, TopoTransform};

    #[test]
    fn quantized_arcs_are_delta_decoded() {
        let arcs = vec![vec![vec![10.0, 20.0], vec![1.0, 0.0], vec![0.0, 2.0]]];
        let transform = TopoTransform {
            scale: [0.5, 0.25],
            translate: [-100.0, 30.0],
        };
        let decoded = decode_arcs(&arcs, Some(transform)).expect("decode");
        assert_eq!(
            decoded[0],
            vec![[-95.0, 35.0], [-94.5, 35.0], [-94.5, 35.5]]
        );
    }

    #[test]
    fn stitched_rings_drop_shared_junctions_and_reverse_negative_arcs() {
        let arcs = vec![
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
            vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        ];
        let ring = stitch_ring(&arcs, &[0, !1]).expect("ring");
        assert_eq!(
            ring,
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]
        );
    }
}
