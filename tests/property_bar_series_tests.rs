use carbon_charts::core::{DataRecord, FieldSelector, build_bars, compute_scale};
use proptest::prelude::*;

fn records_from(values: &[f64]) -> Vec<DataRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            DataRecord::new()
                .with("month", format!("M{i}"))
                .with("projects", *value)
        })
        .collect()
}

proptest! {
    #[test]
    fn scale_matches_maximum_and_ignores_order(
        values in proptest::collection::vec(0.0f64..10_000.0, 1..64),
        rotate_by in 0usize..64
    ) {
        let fields = FieldSelector::single("projects").expect("selector");
        let records = records_from(&values);
        let scale = compute_scale(&records, &fields).expect("scale");

        let expected = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(scale.max_value(), expected);

        let mut rotated = records.clone();
        let len = rotated.len();
        rotated.rotate_left(rotate_by % len);
        rotated.reverse();
        let rotated_scale = compute_scale(&rotated, &fields).expect("rotated scale");
        prop_assert_eq!(rotated_scale.max_value(), scale.max_value());
    }

    #[test]
    fn bar_heights_stay_in_percent_range(
        values in proptest::collection::vec(-1_000.0f64..1_000.0, 0..64),
        window in 0usize..16
    ) {
        let records = records_from(&values);
        let value_fields = FieldSelector::single("projects").expect("selector");
        let label_fields = FieldSelector::single("month").expect("selector");
        let bars = build_bars(&records, &value_fields, &label_fields, window).expect("bars");

        for bar in &bars {
            prop_assert!(bar.height_percent.is_finite());
            prop_assert!((0.0..=100.0).contains(&bar.height_percent));
        }
    }

    #[test]
    fn bar_window_is_trailing_slice_in_order(
        values in proptest::collection::vec(0.0f64..500.0, 0..64),
        window in 0usize..80
    ) {
        let records = records_from(&values);
        let value_fields = FieldSelector::single("projects").expect("selector");
        let label_fields = FieldSelector::single("month").expect("selector");
        let bars = build_bars(&records, &value_fields, &label_fields, window).expect("bars");

        let expected_len = window.min(records.len());
        prop_assert_eq!(bars.len(), expected_len);
        let offset = records.len() - expected_len;
        for (position, bar) in bars.iter().enumerate() {
            prop_assert_eq!(bar.index, position);
            prop_assert_eq!(&bar.label, &format!("M{}", offset + position));
            prop_assert_eq!(bar.value, values[offset + position]);
        }
    }

    #[test]
    fn bar_builds_are_deterministic(
        values in proptest::collection::vec(0.0f64..500.0, 0..32),
        window in 0usize..16
    ) {
        let records = records_from(&values);
        let value_fields = FieldSelector::single("projects").expect("selector");
        let label_fields = FieldSelector::single("month").expect("selector");
        let first = build_bars(&records, &value_fields, &label_fields, window).expect("first");
        let second = build_bars(&records, &value_fields, &label_fields, window).expect("second");
        prop_assert_eq!(first, second);
    }
}
