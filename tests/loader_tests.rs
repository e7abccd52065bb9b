use std::path::PathBuf;

use fencing_atlas::api::{DataSource, load_atlas_data, load_observations, load_regions};
use fencing_atlas::core::Attribute;
use fencing_atlas::error::{AtlasError, DataSourceKind};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_both_fixture_sources() {
    let data = load_atlas_data(
        &DataSource::path(fixture("fencing_sample.csv")),
        &DataSource::path(fixture("states_sample.topojson")),
        Some("USAstates"),
    )
    .expect("fixtures should load");

    let keys: Vec<&str> = data.observations.iter().map(|o| o.state.as_str()).collect();
    assert_eq!(keys, vec!["06", "36", "48", "12", "99"]);
    assert_eq!(data.regions.len(), 5);
    assert_eq!(
        data.observations[0].value(Attribute::StatePopulation),
        39_536_653.0
    );
}

#[test]
fn unparseable_cells_load_as_nan() {
    let observations = load_observations(&DataSource::path(fixture("fencing_sample.csv")))
        .expect("csv should load");
    let florida = observations
        .iter()
        .find(|o| o.state == "12")
        .expect("florida row");
    assert!(florida.value(Attribute::LondonOlympians).is_nan());
    assert_eq!(florida.finite_value(Attribute::LondonOlympians), None);
    assert_eq!(florida.finite_value(Attribute::RioOlympians), Some(0.0));
}

#[test]
fn missing_tabular_file_names_the_tabular_source() {
    let err = load_atlas_data(
        &DataSource::path(fixture("does_not_exist.csv")),
        &DataSource::path(fixture("states_sample.topojson")),
        None,
    )
    .expect_err("missing csv must fail");
    assert!(matches!(
        err,
        AtlasError::Load {
            kind: DataSourceKind::Tabular,
            ..
        }
    ));
}

#[test]
fn malformed_boundary_names_the_boundary_source() {
    let err = load_atlas_data(
        &DataSource::path(fixture("fencing_sample.csv")),
        &DataSource::inline("{ not json"),
        None,
    )
    .expect_err("broken boundary must fail");
    assert!(matches!(
        err,
        AtlasError::Load {
            kind: DataSourceKind::Boundary,
            ..
        }
    ));
    assert!(err.to_string().starts_with("failed to load boundary data"));
}

#[test]
fn csv_without_key_column_is_a_tabular_load_error() {
    let err = load_observations(&DataSource::inline("NAME,Rio 2016 Olympians\nx,1\n"))
        .expect_err("STATE column is required");
    assert!(matches!(
        err,
        AtlasError::Load {
            kind: DataSourceKind::Tabular,
            ..
        }
    ));
}

#[test]
fn unknown_topology_object_is_rejected() {
    let err = load_regions(
        &DataSource::path(fixture("states_sample.topojson")),
        Some("counties"),
    )
    .expect_err("object must exist");
    assert!(err.to_string().contains("counties"));
}
