use carbon_charts::core::{
    DataRecord, FieldSelector, FillPalette, PieLayout, build_slices, project_wedges,
};
use proptest::prelude::*;

fn records_from(counts: &[f64]) -> Vec<DataRecord> {
    counts
        .iter()
        .enumerate()
        .map(|(i, count)| {
            DataRecord::new()
                .with("category", format!("C{i}"))
                .with("count", *count)
        })
        .collect()
}

fn selectors() -> (FieldSelector, FieldSelector) {
    (
        FieldSelector::single("count").expect("count"),
        FieldSelector::single("category").expect("label"),
    )
}

proptest! {
    #[test]
    fn slices_tile_circle_contiguously(
        counts in proptest::collection::vec(0.0f64..1_000.0, 1..48)
    ) {
        prop_assume!(counts.iter().sum::<f64>() > 0.0);
        let (count_field, label_field) = selectors();
        let slices = build_slices(
            &records_from(&counts),
            &count_field,
            &label_field,
            &FillPalette::default(),
        )
        .expect("slices");

        prop_assert_eq!(slices.len(), counts.len());
        prop_assert_eq!(slices[0].start_angle_deg, 0.0);
        for pair in slices.windows(2) {
            prop_assert_eq!(pair[1].start_angle_deg, pair[0].end_angle_deg);
        }
        let swept: f64 = slices.iter().map(|slice| slice.sweep_angle_deg()).sum();
        prop_assert!((swept - 360.0).abs() <= 1e-6);
        for slice in &slices {
            prop_assert!(slice.start_angle_deg.is_finite());
            prop_assert!(slice.end_angle_deg.is_finite());
            prop_assert!(slice.sweep_angle_deg() >= 0.0);
        }
    }

    #[test]
    fn large_arc_flag_tracks_half_circle(
        counts in proptest::collection::vec(0.0f64..1_000.0, 1..16)
    ) {
        prop_assume!(counts.iter().sum::<f64>() > 0.0);
        let (count_field, label_field) = selectors();
        let slices = build_slices(
            &records_from(&counts),
            &count_field,
            &label_field,
            &FillPalette::default(),
        )
        .expect("slices");

        for slice in &slices {
            prop_assert_eq!(slice.sweeps_more_than_half, slice.sweep_angle_deg() > 180.0);
        }
    }

    #[test]
    fn slices_and_wedges_are_deterministic(
        counts in proptest::collection::vec(0.5f64..100.0, 1..24)
    ) {
        let (count_field, label_field) = selectors();
        let palette = FillPalette::new(["blue", "purple", "teal"]).expect("palette");
        let records = records_from(&counts);
        let first = build_slices(&records, &count_field, &label_field, &palette).expect("first");
        let second = build_slices(&records, &count_field, &label_field, &palette).expect("second");
        prop_assert_eq!(&first, &second);

        let layout = PieLayout::new(120.0, 120.0, 100.0).expect("layout");
        let first_wedges = project_wedges(&first, layout).expect("first wedges");
        let second_wedges = project_wedges(&second, layout).expect("second wedges");
        prop_assert_eq!(first_wedges, second_wedges);
    }
}
