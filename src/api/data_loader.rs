use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::core::{Observation, Region, parse_boundary_regions, parse_observations};
use crate::error::{AtlasError, AtlasResult, DataSourceKind};

/// Where one input payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    /// Payload already in memory, e.g. bundled fixtures or a host download.
    Inline(String),
}

impl DataSource {
    #[must_use]
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    #[must_use]
    pub fn inline(text: impl Into<String>) -> Self {
        Self::Inline(text.into())
    }

    fn read(&self, kind: DataSourceKind) -> AtlasResult<Cow<'_, str>> {
        match self {
            Self::Inline(text) => Ok(Cow::Borrowed(text)),
            Self::Path(path) => fs::read_to_string(path).map(Cow::Owned).map_err(|e| {
                AtlasError::load(kind, format!("failed to read `{}`: {e}", path.display()))
            }),
        }
    }
}

/// Both parsed payloads, not yet joined.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasData {
    pub observations: Vec<Observation>,
    pub regions: Vec<Region>,
}

/// Loads and parses the tabular and boundary sources.
///
/// With the `parallel-load` feature both sources load on separate rayon
/// workers and are joined before returning. A failure of either aborts the
/// whole load and names the failing source.
pub fn load_atlas_data(
    tabular: &DataSource,
    boundary: &DataSource,
    topology_object: Option<&str>,
) -> AtlasResult<AtlasData> {
    info!("loading atlas data");
    let (observations, regions) = load_both(tabular, boundary, topology_object);

    let observations = observations.inspect_err(|err| error!(error = %err, "tabular load failed"))?;
    let regions = regions.inspect_err(|err| error!(error = %err, "boundary load failed"))?;

    info!(
        observations = observations.len(),
        regions = regions.len(),
        "atlas data loaded"
    );
    Ok(AtlasData {
        observations,
        regions,
    })
}

#[cfg(feature = "parallel-load")]
fn load_both(
    tabular: &DataSource,
    boundary: &DataSource,
    topology_object: Option<&str>,
) -> (AtlasResult<Vec<Observation>>, AtlasResult<Vec<Region>>) {
    rayon::join(
        || load_observations(tabular),
        || load_regions(boundary, topology_object),
    )
}

#[cfg(not(feature = "parallel-load"))]
fn load_both(
    tabular: &DataSource,
    boundary: &DataSource,
    topology_object: Option<&str>,
) -> (AtlasResult<Vec<Observation>>, AtlasResult<Vec<Region>>) {
    (
        load_observations(tabular),
        load_regions(boundary, topology_object),
    )
}

pub fn load_observations(source: &DataSource) -> AtlasResult<Vec<Observation>> {
    let kind = DataSourceKind::Tabular;
    let text = source.read(kind)?;
    debug!(bytes = text.len(), "read tabular source");
    parse_observations(&text).map_err(|err| tag_source(kind, err))
}

pub fn load_regions(source: &DataSource, topology_object: Option<&str>) -> AtlasResult<Vec<Region>> {
    let kind = DataSourceKind::Boundary;
    let text = source.read(kind)?;
    debug!(bytes = text.len(), "read boundary source");
    parse_boundary_regions(&text, topology_object).map_err(|err| tag_source(kind, err))
}

fn tag_source(kind: DataSourceKind, err: AtlasError) -> AtlasError {
    match err {
        AtlasError::Load { .. } => err,
        other => AtlasError::load(kind, other.to_string()),
    }
}
