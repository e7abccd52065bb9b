use fencing_atlas::api::{AtlasEngineConfig, ChartMetrics, bar_geometry, vertical_scale};
use fencing_atlas::core::{
    Attribute, LinearScale, Observation, ckmeans, format_axis_tick, natural_breakpoints,
};
use proptest::prelude::*;

fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1.0e8, 1..60)
}

proptest! {
    #[test]
    fn breakpoints_are_sorted_bounded_and_drawn_from_input(values in values_strategy()) {
        let breaks = natural_breakpoints(&values, 5).expect("breaks");
        let all_equal = values.iter().all(|v| *v == values[0]);
        if values.len() >= 5 && !all_equal {
            prop_assert_eq!(breaks.len(), 4);
        } else {
            prop_assert!(breaks.len() < values.len().max(1));
        }
        prop_assert!(breaks.windows(2).all(|w| w[0] <= w[1]));
        for b in &breaks {
            prop_assert!(values.contains(b));
        }
    }

    #[test]
    fn classification_is_deterministic_and_order_independent(values in values_strategy()) {
        let first = natural_breakpoints(&values, 5).expect("breaks");
        let mut reversed = values.clone();
        reversed.reverse();
        let second = natural_breakpoints(&reversed, 5).expect("breaks");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn clusters_partition_the_sorted_input(values in values_strategy(), k in 1usize..6) {
        prop_assume!(k <= values.len());
        let clusters = ckmeans(&values, k).expect("clusters");
        let flattened: Vec<f64> = clusters.iter().flatten().copied().collect();
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        prop_assert_eq!(flattened, sorted);
        prop_assert!(clusters.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn bar_heights_stay_within_the_plot(
        values in prop::collection::vec(prop::option::of(-10.0f64..1.0e7), 1..52),
    ) {
        let metrics = ChartMetrics::from_config(&AtlasEngineConfig::default());
        let observations: Vec<Observation> = values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let observation = Observation::new(format!("{i:02}"));
                match value {
                    Some(v) => observation.with_value(Attribute::TournamentCount, *v),
                    None => observation,
                }
            })
            .collect();
        let scale = vertical_scale(&observations, Attribute::TournamentCount, metrics)
            .expect("scale");
        for (index, observation) in observations.iter().enumerate() {
            let bar = bar_geometry(
                metrics,
                index,
                observations.len(),
                observation.finite_value(Attribute::TournamentCount),
                scale,
            );
            prop_assert!(bar.height >= 0.0);
            prop_assert!(bar.height <= metrics.baseline + 1e-9);
            prop_assert!(bar.y >= 0.0);
            prop_assert!(bar.width >= 0.0);
        }
    }

    #[test]
    fn tick_labels_use_thousands_at_or_above_one_thousand(step in 1u32..1000, scale in 0u32..4) {
        let value = f64::from(step) * 10f64.powi(scale as i32);
        let label = format_axis_tick(value);
        if value >= 1000.0 {
            prop_assert!(label.ends_with('K'));
        } else {
            prop_assert!(!label.ends_with('K'));
        }
        prop_assert!(!label.ends_with('M'));
    }

    #[test]
    fn ticks_are_ascending_and_inside_the_domain(max in 1.0f64..1.0e9) {
        let scale = LinearScale::new((0.0, max), (290.0, 0.0)).expect("scale");
        let ticks = scale.ticks(10);
        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(ticks.iter().all(|t| *t >= 0.0 && *t <= max * (1.0 + 1e-12)));
    }
}
