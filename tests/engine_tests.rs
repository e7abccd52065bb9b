use approx::assert_relative_eq;
use fencing_atlas::api::{AtlasEngine, AtlasEngineConfig, AtlasSnapshot, DataSource};
use fencing_atlas::core::{Attribute, ElementId, SurfaceKind};
use fencing_atlas::error::AtlasError;
use fencing_atlas::render::{Color, NullRenderer};

const TOPOLOGY: &str = include_str!("fixtures/states_sample.topojson");
const TWO_STATES_CSV: &str = "STATE,State Population in 2017,Number of USFA Sanctioned Clubs\n\
06,39000000,80\n\
36,19000000,120\n";

fn two_state_engine() -> AtlasEngine<NullRenderer> {
    AtlasEngine::from_sources(
        NullRenderer::default(),
        AtlasEngineConfig::default(),
        &DataSource::inline(TWO_STATES_CSV),
        &DataSource::inline(TOPOLOGY),
    )
    .expect("engine init")
}

fn hex(text: &str) -> Color {
    Color::from_hex(text).expect("valid color")
}

#[test]
fn initial_population_view_matches_two_state_layout() {
    let engine = two_state_engine();

    assert_eq!(engine.attribute(), Attribute::StatePopulation);
    assert_eq!(engine.color_scale().breakpoints(), &[39_000_000.0]);
    assert_eq!(engine.vertical_scale().domain(), (0.0, 39_000_000.0));
    assert_eq!(engine.bar_order(), vec!["06", "36"]);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.map_fills["06"], hex("#FDBE85"));
    assert_eq!(snapshot.map_fills["36"], hex("#FFE3CC"));
    for key in ["48", "12", "27"] {
        assert_eq!(snapshot.map_fills[key], hex("#CCCCCC"), "region {key}");
    }
    assert_eq!(snapshot.top_axis_label.as_deref(), Some("35000K"));

    let california = snapshot.bars["06"];
    assert_relative_eq!(california.x, 25.0);
    assert_relative_eq!(california.width, 257.5);
    assert_relative_eq!(california.height, 290.0);
    assert_relative_eq!(california.y, 5.0);

    let new_york = snapshot.bars["36"];
    assert_relative_eq!(new_york.x, 283.5);
    assert_relative_eq!(new_york.height, 290.0 * 19.0 / 39.0, epsilon = 1e-9);
    assert_relative_eq!(
        new_york.y,
        290.0 - 290.0 * 19.0 / 39.0 + 5.0,
        epsilon = 1e-9
    );
}

#[test]
fn join_report_lists_regions_without_data() {
    let engine = two_state_engine();
    let report = engine.join_report();
    assert_eq!(report.matched, 2);
    assert!(report.unmatched_observations.is_empty());
    assert_eq!(report.regions_without_data, vec!["48", "12", "27"]);
}

#[test]
fn construction_does_not_draw_until_render() {
    let mut engine = two_state_engine();
    assert_eq!(engine.renderer().frames_rendered, 0);

    engine.render().expect("render");
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 2);
    let map = renderer.last_map.expect("map frame");
    assert_eq!(map.paths, 5);
    let chart = renderer.last_chart.expect("chart frame");
    assert_eq!(chart.rects, 3);
    assert!(!engine.is_animating());
}

#[test]
fn switching_attribute_resorts_bars_and_rebuilds_classes() {
    let mut engine = two_state_engine();
    engine
        .set_attribute(Attribute::ClubCount)
        .expect("attribute change");
    engine.finish_transitions().expect("finish");

    assert_eq!(engine.bar_order(), vec!["36", "06"]);
    assert_eq!(engine.color_scale().breakpoints(), &[120.0]);
    assert_eq!(engine.vertical_scale().domain(), (0.0, 120.0));
    assert_eq!(engine.selector().chosen(), Some(Attribute::ClubCount));

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.map_fills["36"], hex("#FDBE85"));
    assert_eq!(snapshot.map_fills["06"], hex("#FFE3CC"));
    assert_eq!(snapshot.top_axis_label.as_deref(), Some("120"));
}

#[test]
fn switching_back_restores_the_original_view() {
    let mut engine = two_state_engine();
    let before = engine.snapshot();

    engine
        .set_attribute(Attribute::ClubCount)
        .expect("first change");
    engine.finish_transitions().expect("finish");
    engine
        .set_attribute(Attribute::StatePopulation)
        .expect("second change");
    engine.finish_transitions().expect("finish");

    let after = engine.snapshot();
    assert_eq!(after.breakpoints, before.breakpoints);
    assert_eq!(after.bar_order, before.bar_order);
    assert_eq!(after.map_fills, before.map_fills);
    assert_eq!(after.bars, before.bars);
}

#[test]
fn attribute_without_numeric_values_falls_back_to_unit_domain() {
    let mut engine = two_state_engine();
    engine
        .set_attribute(Attribute::RioOlympians)
        .expect("attribute change");
    engine.finish_transitions().expect("finish");

    assert!(engine.color_scale().breakpoints().is_empty());
    assert_eq!(engine.vertical_scale().domain(), (0.0, 1.0));
    assert_eq!(engine.bar_order(), vec!["06", "36"]);
    let snapshot = engine.snapshot();
    assert!(snapshot.bars.values().all(|bar| bar.height == 0.0));
    assert!(snapshot.map_fills.values().all(|fill| *fill == hex("#CCCCCC")));
}

#[test]
fn placeholder_and_unknown_labels_keep_the_current_selection() {
    let mut engine = two_state_engine();
    let err = engine
        .select_attribute_label("Select Attribute")
        .expect_err("placeholder is disabled");
    assert!(matches!(err, AtlasError::PlaceholderSelected));

    let err = engine
        .select_attribute_label("Saber Medals")
        .expect_err("unknown label");
    assert!(matches!(err, AtlasError::UnknownAttribute(_)));

    assert_eq!(engine.attribute(), Attribute::StatePopulation);
    assert_eq!(engine.selector().displayed_label(), "Select Attribute");

    engine
        .select_attribute_label("Number of USFA Sanctioned Clubs")
        .expect("valid label");
    assert_eq!(engine.attribute(), Attribute::ClubCount);
    assert_eq!(
        engine.selector().displayed_label(),
        "Number of USFA Sanctioned Clubs"
    );
}

#[test]
fn repeated_tabular_keys_keep_the_first_row() {
    let csv = "STATE,State Population in 2017\n06,10\n06,99\n36,5\n";
    let engine = AtlasEngine::from_sources(
        NullRenderer::default(),
        AtlasEngineConfig::default(),
        &DataSource::inline(csv),
        &DataSource::inline(TOPOLOGY),
    )
    .expect("engine init");

    assert_eq!(engine.observations().len(), 2);
    assert_eq!(engine.bar_order(), vec!["06", "36"]);
    assert_eq!(engine.vertical_scale().domain(), (0.0, 10.0));
}

#[test]
fn initial_attribute_comes_from_config() {
    let config = AtlasEngineConfig::default().with_initial_attribute(Attribute::ClubCount);
    let engine = AtlasEngine::from_sources(
        NullRenderer::default(),
        config,
        &DataSource::inline(TWO_STATES_CSV),
        &DataSource::inline(TOPOLOGY),
    )
    .expect("engine init");
    assert_eq!(engine.attribute(), Attribute::ClubCount);
    assert_eq!(engine.bar_order(), vec!["36", "06"]);
    assert!(!engine.is_animating());
}

#[test]
fn snapshot_json_contract_round_trips() {
    let mut engine = two_state_engine();
    engine
        .pointer_enter(
            &ElementId::map("06"),
            fencing_atlas::core::ScreenPoint::new(300.0, 400.0),
        )
        .expect("enter");

    let snapshot = engine.snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("snapshot serializes");
    assert!(json.contains("\"schema_version\": 1"));
    let restored = AtlasSnapshot::from_json_compat_str(&json).expect("snapshot parses");
    assert_eq!(restored, snapshot);

    let bare = serde_json::to_string(&snapshot).expect("bare snapshot");
    assert_eq!(
        AtlasSnapshot::from_json_compat_str(&bare).expect("bare parses"),
        snapshot
    );
}

#[test]
fn scenes_expose_both_surfaces_in_draw_order() {
    let engine = two_state_engine();
    let map_keys = engine.scene(SurfaceKind::Map).keys_in_order();
    assert_eq!(map_keys, vec!["06", "36", "48", "12", "27"]);
    assert_eq!(engine.scene(SurfaceKind::Chart).len(), 2);
}
