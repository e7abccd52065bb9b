use fencing_atlas::core::{
    Attribute, ClassPalette, ColorScale, Observation, ckmeans, natural_breakpoints,
};
use fencing_atlas::render::Color;

#[test]
fn ckmeans_groups_the_reference_sequence() {
    let values = [-1.0, 2.0, -1.0, 2.0, 4.0, 5.0, 6.0, -1.0, 2.0, -1.0];
    let clusters = ckmeans(&values, 3).expect("clusters");
    assert_eq!(
        clusters,
        vec![
            vec![-1.0, -1.0, -1.0, -1.0],
            vec![2.0, 2.0, 2.0],
            vec![4.0, 5.0, 6.0],
        ]
    );
}

#[test]
fn ckmeans_separates_well_spaced_groups() {
    let values = [1.0, 1.1, 1.2, 10.0, 10.5, 50.0, 51.0, 52.0, 100.0, 1000.0];
    let clusters = ckmeans(&values, 5).expect("clusters");
    assert_eq!(clusters.len(), 5);
    assert_eq!(clusters[0], vec![1.0, 1.1, 1.2]);
    assert_eq!(clusters[4], vec![1000.0]);
}

#[test]
fn identical_values_form_one_cluster() {
    let clusters = ckmeans(&[3.0, 3.0, 3.0], 2).expect("clusters");
    assert_eq!(clusters, vec![vec![3.0, 3.0, 3.0]]);
    assert!(
        natural_breakpoints(&[3.0, 3.0, 3.0], 5)
            .expect("breaks")
            .is_empty()
    );
}

#[test]
fn ckmeans_rejects_impossible_requests() {
    assert!(ckmeans(&[1.0, 2.0], 0).is_err());
    assert!(ckmeans(&[1.0, 2.0], 3).is_err());
    assert!(ckmeans(&[1.0, f64::NAN], 1).is_err());
}

#[test]
fn breakpoints_are_lower_bounds_of_upper_clusters() {
    let values = [-1.0, 2.0, -1.0, 2.0, 4.0, 5.0, 6.0, -1.0, 2.0, -1.0];
    assert_eq!(
        natural_breakpoints(&values, 3).expect("breaks"),
        vec![2.0, 4.0]
    );
}

#[test]
fn fewer_values_than_classes_yield_fewer_breakpoints() {
    assert_eq!(
        natural_breakpoints(&[19.0, 39.0], 5).expect("breaks"),
        vec![39.0]
    );
    assert!(natural_breakpoints(&[], 5).expect("breaks").is_empty());
}

#[test]
fn mostly_zero_columns_still_yield_four_breakpoints() {
    let values = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
    let breaks = natural_breakpoints(&values, 5).expect("breaks");
    assert_eq!(breaks, vec![1.0, 1.0, 2.0, 2.0]);

    let scale = ColorScale::new(&breaks, ClassPalette::default()).expect("scale");
    assert_eq!(scale.class_index(0.0), Some(0));
    assert_eq!(scale.class_index(2.0), Some(4));
}

#[test]
fn value_on_a_breakpoint_takes_the_upper_class() {
    let palette = ClassPalette::default();
    let scale = ColorScale::new(&[10.0, 20.0], palette.clone()).expect("scale");
    assert_eq!(scale.class_index(9.999), Some(0));
    assert_eq!(scale.class_index(10.0), Some(1));
    assert_eq!(scale.class_index(20.0), Some(2));
    assert_eq!(scale.color_for(Some(20.0)), palette.classes[2]);
    assert_eq!(scale.color_for(None), palette.no_data);
    assert_eq!(scale.color_for(Some(f64::NAN)), palette.no_data);
}

#[test]
fn scale_from_observations_skips_missing_values() {
    let observations = vec![
        Observation::new("06").with_value(Attribute::MemberCount, 5800.0),
        Observation::new("36").with_value(Attribute::MemberCount, 4100.0),
        Observation::new("12"),
        Observation::new("48").with_value(Attribute::MemberCount, f64::NAN),
    ];
    let scale =
        ColorScale::natural_breaks(&observations, Attribute::MemberCount, ClassPalette::default())
            .expect("scale");
    assert_eq!(scale.breakpoints(), &[5800.0]);
    assert_eq!(
        scale.color_for(Some(4100.0)),
        Color::from_rgb8(0xFF, 0xE3, 0xCC)
    );
}

#[test]
fn color_scale_validates_breakpoints() {
    let palette = ClassPalette::default();
    assert!(ColorScale::new(&[5.0, 1.0], palette.clone()).is_err());
    assert!(ColorScale::new(&[f64::INFINITY], palette.clone()).is_err());
    assert!(ColorScale::new(&[1.0, 2.0, 3.0, 4.0, 5.0], palette).is_err());
}
