use approx::assert_relative_eq;
use fencing_atlas::api::{
    AtlasEngineConfig, ChartMetrics, axis_ticks, bar_geometry, sort_bar_order, vertical_scale,
};
use fencing_atlas::core::{Attribute, Observation, format_axis_tick};

fn metrics() -> ChartMetrics {
    ChartMetrics::from_config(&AtlasEngineConfig::default())
}

fn populations(values: &[(&str, f64)]) -> Vec<Observation> {
    values
        .iter()
        .map(|(key, value)| Observation::new(*key).with_value(Attribute::StatePopulation, *value))
        .collect()
}

#[test]
fn default_metrics_match_the_chart_surface() {
    let metrics = metrics();
    assert_eq!(metrics.inner_width, 517.0);
    assert_eq!(metrics.inner_height, 290.0);
    assert_eq!(metrics.baseline, 290.0);
    assert_eq!(metrics.left_padding, 25.0);
}

#[test]
fn bars_sort_descending_with_stable_ties() {
    let observations = populations(&[("01", 5.0), ("02", 9.0), ("03", 5.0), ("04", 12.0)]);
    assert_eq!(
        sort_bar_order(&observations, Attribute::StatePopulation),
        vec![3, 1, 0, 2]
    );
}

#[test]
fn two_bar_geometry_matches_hand_computed_layout() {
    let metrics = metrics();
    let observations = populations(&[("06", 39_000_000.0), ("36", 19_000_000.0)]);
    let scale = vertical_scale(&observations, Attribute::StatePopulation, metrics).expect("scale");
    assert_eq!(scale.domain(), (0.0, 39_000_000.0));
    assert_eq!(scale.range(), (290.0, 0.0));

    let first = bar_geometry(metrics, 0, 2, Some(39_000_000.0), scale);
    assert_relative_eq!(first.x, 25.0);
    assert_relative_eq!(first.width, 257.5);
    assert_relative_eq!(first.height, 290.0);
    assert_relative_eq!(first.y, 5.0);

    let second = bar_geometry(metrics, 1, 2, Some(19_000_000.0), scale);
    assert_relative_eq!(second.x, 283.5);
    assert_relative_eq!(second.width, 257.5);
}

#[test]
fn missing_value_draws_a_flat_bar_at_the_baseline() {
    let metrics = metrics();
    let observations = populations(&[("06", 100.0)]);
    let scale = vertical_scale(&observations, Attribute::StatePopulation, metrics).expect("scale");
    let bar = bar_geometry(metrics, 1, 2, None, scale);
    assert_eq!(bar.height, 0.0);
    assert_relative_eq!(bar.y, 295.0);
}

#[test]
fn negative_values_clamp_to_zero_height() {
    let metrics = metrics();
    let observations = populations(&[("06", 100.0), ("36", -50.0)]);
    let scale = vertical_scale(&observations, Attribute::StatePopulation, metrics).expect("scale");
    let bar = bar_geometry(metrics, 1, 2, Some(-50.0), scale);
    assert_eq!(bar.height, 0.0);
}

#[test]
fn axis_ticks_sit_below_the_top_padding() {
    let metrics = metrics();
    let observations = populations(&[("06", 39_000_000.0)]);
    let scale = vertical_scale(&observations, Attribute::StatePopulation, metrics).expect("scale");
    let ticks = axis_ticks(scale, metrics, 10);

    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["0", "5000K", "10000K", "15000K", "20000K", "25000K", "30000K", "35000K"]
    );
    assert_relative_eq!(ticks[0].y, 295.0);
    assert_relative_eq!(
        ticks[7].y,
        290.0 - 290.0 * 35.0 / 39.0 + 5.0,
        epsilon = 1e-9
    );
}

#[test]
fn per_capita_ticks_stay_unscaled() {
    assert_eq!(format_axis_tick(0.0002), "0.0002");
    assert_eq!(format_axis_tick(0.00005), "0.00005");
    assert_eq!(format_axis_tick(999.5), "999.5");
    assert_eq!(format_axis_tick(1500.0), "1.5K");
    assert_eq!(format_axis_tick(2_000_000.0), "2000K");
}

#[test]
fn values_past_the_domain_max_draw_no_bar() {
    let metrics = metrics();
    let observations = populations(&[("06", 100.0)]);
    let scale = vertical_scale(&observations, Attribute::StatePopulation, metrics).expect("scale");
    let bar = bar_geometry(metrics, 0, 1, Some(250.0), scale);
    assert_eq!(bar.height, 0.0);
    assert!(bar.y >= 0.0);
}
