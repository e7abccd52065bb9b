use fencing_atlas::core::{Geometry, parse_boundary_regions};

const TOPOLOGY: &str = include_str!("fixtures/states_sample.topojson");
const FEATURES: &str = include_str!("fixtures/states_sample.geojson");

#[test]
fn topology_regions_keep_keys_names_and_skip_lines() {
    let regions = parse_boundary_regions(TOPOLOGY, Some("USAstates")).expect("topology");
    let keys: Vec<(&str, &str)> = regions
        .iter()
        .map(|r| (r.key.as_str(), r.name.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("06", "California"),
            ("36", "New York"),
            ("48", "Texas"),
            ("12", "Florida"),
            ("27", "Minnesota"),
        ]
    );
    assert!(regions.iter().all(|r| r.values.is_empty()));
}

#[test]
fn split_arcs_stitch_into_one_closed_ring() {
    let regions = parse_boundary_regions(TOPOLOGY, None).expect("topology");
    let Geometry::Polygon(rings) = &regions[0].geometry else {
        panic!("california should be a polygon");
    };
    assert_eq!(
        rings[0],
        vec![
            [-124.0, 32.0],
            [-114.0, 32.0],
            [-114.0, 42.0],
            [-124.0, 42.0],
            [-124.0, 32.0],
        ]
    );
}

#[test]
fn negative_arc_index_walks_the_arc_backwards() {
    let regions = parse_boundary_regions(TOPOLOGY, None).expect("topology");
    let texas = &regions[2];
    let Geometry::Polygon(rings) = &texas.geometry else {
        panic!("texas should be a polygon");
    };
    assert_eq!(rings[0][1], [-94.0, 26.0]);
    assert_eq!(rings[0].first(), rings[0].last());
}

#[test]
fn multipolygon_objects_decode() {
    let regions = parse_boundary_regions(TOPOLOGY, None).expect("topology");
    let florida = &regions[3];
    assert!(matches!(&florida.geometry, Geometry::MultiPolygon(polygons) if polygons.len() == 1));
    let (min, max) = florida.geometry.bounds().expect("bounds");
    assert_eq!(min, [-87.0, 25.0]);
    assert_eq!(max, [-80.0, 31.0]);
}

#[test]
fn feature_collection_converts_numeric_keys_and_drops_unkeyed_features() {
    let regions = parse_boundary_regions(FEATURES, None).expect("features");
    let keys: Vec<&str> = regions.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["06", "36"]);
    assert!(matches!(regions[1].geometry, Geometry::MultiPolygon(_)));
}

#[test]
fn name_falls_back_to_key() {
    let text = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"STATE":"53"},
         "geometry":{"type":"Polygon","coordinates":[[[-124,46],[-117,46],[-117,49],[-124,46]]]}}
    ]}"#;
    let regions = parse_boundary_regions(text, None).expect("features");
    assert_eq!(regions[0].name, "53");
}

#[test]
fn non_boundary_json_is_rejected() {
    assert!(parse_boundary_regions(r#"{"type":"Feature"}"#, None).is_err());
    assert!(parse_boundary_regions("[]", None).is_err());
}
