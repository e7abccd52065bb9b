use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{AlbersProjection, ProjectedShape, Region, Viewport};
use crate::error::AtlasResult;

use super::AtlasEngineConfig;

/// Projected outline of every region sharing one key.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub key: String,
    pub name: String,
    pub shape: ProjectedShape,
}

/// Albers projection centered on the map surface.
pub fn map_projection(config: &AtlasEngineConfig) -> AtlasResult<AlbersProjection> {
    let Viewport { width, height } = config.map_viewport();
    AlbersProjection::new(
        config.map.projection,
        (f64::from(width) / 2.0, f64::from(height) / 2.0),
    )
}

/// Projects every region, merging features that repeat a key into one
/// multi-ring shape.
#[must_use]
pub fn project_regions(
    regions: &[Region],
    projection: &AlbersProjection,
) -> IndexMap<String, RegionShape> {
    let mut shapes: IndexMap<String, RegionShape> = IndexMap::with_capacity(regions.len());
    for region in regions {
        let projected = ProjectedShape::project(&region.geometry, projection);
        if projected.is_empty() {
            warn!(key = %region.key, "region has no drawable rings");
        }
        match shapes.get_mut(&region.key) {
            Some(existing) => {
                debug!(key = %region.key, "merging repeated region key");
                existing.shape.merge(projected);
            }
            None => {
                shapes.insert(
                    region.key.clone(),
                    RegionShape {
                        key: region.key.clone(),
                        name: region.name.clone(),
                        shape: projected,
                    },
                );
            }
        }
    }
    shapes
}
