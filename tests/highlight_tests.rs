use fencing_atlas::api::{AtlasEngine, AtlasEngineConfig, DataSource, ElementShape};
use fencing_atlas::core::{ElementId, ScreenPoint, SurfaceKind};
use fencing_atlas::error::AtlasError;
use fencing_atlas::interaction::HoverState;
use fencing_atlas::render::{Color, NullRenderer, StrokeStyle};

const TOPOLOGY: &str = include_str!("fixtures/states_sample.topojson");
const CSV: &str = include_str!("fixtures/fencing_sample.csv");

fn engine() -> AtlasEngine<NullRenderer> {
    AtlasEngine::from_sources(
        NullRenderer::default(),
        AtlasEngineConfig::default(),
        &DataSource::inline(CSV),
        &DataSource::inline(TOPOLOGY),
    )
    .expect("engine init")
}

/// Vertex average of the first projected ring; inside for the convex
/// fixture shapes.
fn inside_point(engine: &AtlasEngine<NullRenderer>, key: &str) -> ScreenPoint {
    let element = engine
        .scene(SurfaceKind::Map)
        .get(&ElementId::map(key))
        .expect("map element");
    let ElementShape::Region(shape) = &element.shape else {
        panic!("map element should be a region");
    };
    let rings = shape.screen_rings();
    let ring = &rings[0];
    let points = &ring[..ring.len() - 1];
    let count = points.len() as f64;
    ScreenPoint::new(
        points.iter().map(|p| p.x).sum::<f64>() / count,
        points.iter().map(|p| p.y).sum::<f64>() / count,
    )
}

#[test]
fn hovering_a_state_highlights_shape_and_bar() {
    let mut engine = engine();
    let point = inside_point(&engine, "06");

    let hit = engine
        .pointer_move(SurfaceKind::Map, point)
        .expect("pointer move");
    assert_eq!(hit, Some(ElementId::map("06")));

    let highlight = StrokeStyle::new(Color::WHITE, 3.0);
    assert_eq!(
        engine.element_stroke(&ElementId::map("06")),
        Some(highlight)
    );
    assert_eq!(
        engine.element_stroke(&ElementId::bar("06")),
        Some(highlight)
    );
    assert_eq!(
        engine.hover_state(),
        &HoverState::Highlighted {
            key: "06".to_owned()
        }
    );

    let label = engine.info_label().expect("label visible");
    assert_eq!(label.title, "39536653");
    assert_eq!(label.subtitle, "State Population in 2017");
    assert_eq!(label.name, "California");
}

#[test]
fn leaving_restores_each_resting_stroke_exactly() {
    let mut engine = engine();
    let shape = ElementId::map("36");
    let bar = ElementId::bar("36");
    let map_resting = engine.element_stroke(&shape).expect("map stroke");
    let bar_resting = engine.element_stroke(&bar).expect("bar stroke");
    assert_eq!(map_resting, StrokeStyle::new(Color::BLACK, 0.5));
    assert_eq!(bar_resting, StrokeStyle::none());

    engine
        .pointer_enter(&bar, ScreenPoint::new(400.0, 200.0))
        .expect("enter");
    assert_ne!(engine.element_stroke(&shape), Some(map_resting));

    engine.pointer_leave().expect("leave");
    assert_eq!(engine.element_stroke(&shape), Some(map_resting));
    assert_eq!(engine.element_stroke(&bar), Some(bar_resting));
    assert_eq!(engine.hover_state(), &HoverState::Normal);
    assert!(engine.info_label().is_none());
}

#[test]
fn moving_between_states_switches_the_highlight() {
    let mut engine = engine();
    let california = inside_point(&engine, "06");
    let texas = inside_point(&engine, "48");

    engine
        .pointer_move(SurfaceKind::Map, california)
        .expect("enter california");
    engine
        .pointer_move(SurfaceKind::Map, texas)
        .expect("enter texas");

    assert_eq!(
        engine.element_stroke(&ElementId::map("06")),
        Some(StrokeStyle::new(Color::BLACK, 0.5))
    );
    assert_eq!(
        engine.element_stroke(&ElementId::bar("48")),
        Some(StrokeStyle::new(Color::WHITE, 3.0))
    );
    assert_eq!(engine.info_label().map(|l| l.name.as_str()), Some("Texas"));
}

#[test]
fn pointer_off_every_shape_leaves() {
    let mut engine = engine();
    let point = inside_point(&engine, "06");
    engine
        .pointer_move(SurfaceKind::Map, point)
        .expect("enter");

    let hit = engine
        .pointer_move(SurfaceKind::Map, ScreenPoint::new(-50.0, -50.0))
        .expect("leave");
    assert_eq!(hit, None);
    assert_eq!(engine.hover_state(), &HoverState::Normal);
}

#[test]
fn bars_are_hit_tested_in_chart_space() {
    let mut engine = engine();
    // Tallest bar sits in the first slot.
    let hit = engine
        .pointer_move(SurfaceKind::Chart, ScreenPoint::new(40.0, 200.0))
        .expect("pointer move");
    assert_eq!(hit, Some(ElementId::bar("06")));
    assert_eq!(
        engine.element_stroke(&ElementId::map("06")),
        Some(StrokeStyle::new(Color::WHITE, 3.0))
    );

    let label = engine.info_label().expect("label");
    assert_eq!(label.surface, SurfaceKind::Chart);
    assert_eq!(label.position, ScreenPoint::new(50.0, 825.0));
}

#[test]
fn label_follows_pointer_within_the_same_element() {
    let mut engine = engine();
    let id = ElementId::bar("06");
    engine
        .pointer_enter(&id, ScreenPoint::new(40.0, 200.0))
        .expect("enter");
    engine
        .pointer_move_label(SurfaceKind::Chart, ScreenPoint::new(60.0, 220.0))
        .expect("move");
    let label = engine.info_label().expect("label");
    assert_eq!(label.position, ScreenPoint::new(70.0, 845.0));
}

#[test]
fn label_mirrors_near_the_right_edge_and_drops_near_the_top() {
    let mut engine = engine();
    engine
        .pointer_enter(&ElementId::map("36"), ScreenPoint::new(1150.0, 40.0))
        .expect("enter");
    let label = engine.info_label().expect("label");
    assert_eq!(label.position, ScreenPoint::new(940.0, 65.0));
}

#[test]
fn missing_value_reads_no_data() {
    let mut engine = engine();
    engine
        .set_attribute(fencing_atlas::core::Attribute::LondonOlympians)
        .expect("attribute");
    engine
        .pointer_enter(&ElementId::map("12"), ScreenPoint::new(300.0, 300.0))
        .expect("enter");
    let label = engine.info_label().expect("label");
    assert_eq!(label.title, "No data");
    assert_eq!(label.name, "Florida");

    engine
        .pointer_enter(&ElementId::map("27"), ScreenPoint::new(300.0, 300.0))
        .expect("enter minnesota");
    assert_eq!(
        engine.info_label().map(|l| l.title.as_str()),
        Some("No data")
    );
}

#[test]
fn label_text_follows_attribute_changes_under_hover() {
    let mut engine = engine();
    engine
        .pointer_enter(&ElementId::map("36"), ScreenPoint::new(300.0, 300.0))
        .expect("enter");
    engine
        .set_attribute(fencing_atlas::core::Attribute::RioOlympians)
        .expect("attribute");
    let label = engine.info_label().expect("label");
    assert_eq!(label.title, "6");
    assert_eq!(label.subtitle, "Rio 2016 Olympians");
    assert_eq!(
        engine.element_stroke(&ElementId::bar("36")),
        Some(StrokeStyle::new(Color::WHITE, 3.0))
    );
}

#[test]
fn entering_an_unknown_element_is_an_error() {
    let mut engine = engine();
    let err = engine
        .pointer_enter(&ElementId::map("72"), ScreenPoint::new(0.0, 0.0))
        .expect_err("no such element");
    assert!(matches!(err, AtlasError::UnknownElement(_)));
    assert_eq!(engine.hover_state(), &HoverState::Normal);
}
