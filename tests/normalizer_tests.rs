use approx::assert_abs_diff_eq;
use carbon_charts::core::{
    DEGENERATE_SCALE_DIVISOR, DataRecord, FieldSelector, FieldValue, compute_scale,
};
use carbon_charts::error::ChartError;

fn monthly(month: &str, projects: f64) -> DataRecord {
    DataRecord::new().with("month", month).with("projects", projects)
}

#[test]
fn scale_is_maximum_of_resolved_values() {
    let records = vec![monthly("Jan", 5.0), monthly("Feb", 8.0), monthly("Mar", 12.0)];
    let fields = FieldSelector::single("projects").expect("selector");

    let scale = compute_scale(&records, &fields).expect("scale");
    assert_eq!(scale.max_value(), 12.0);
    assert_eq!(scale.divisor(), 12.0);
    assert_eq!(scale.record_count(), 3);
    assert!(!scale.is_degenerate());
}

#[test]
fn scale_uses_fallback_field_for_mixed_shapes() {
    let records = vec![
        monthly("Jan", 5.0),
        DataRecord::new().with("week", "W1").with("total", 40.0),
        DataRecord::new().with("week", "W2"),
    ];
    let fields = FieldSelector::new(["projects", "total"]).expect("selector");

    let scale = compute_scale(&records, &fields).expect("scale");
    assert_eq!(scale.max_value(), 40.0);
}

#[test]
fn empty_sequence_uses_sentinel_divisor() {
    let fields = FieldSelector::single("projects").expect("selector");
    let scale = compute_scale(&[], &fields).expect("scale");

    assert_eq!(scale.max_value(), 0.0);
    assert!(scale.is_degenerate());
    assert_eq!(scale.divisor(), DEGENERATE_SCALE_DIVISOR);
}

#[test]
fn all_zero_sequence_never_divides_by_zero() {
    let records = vec![DataRecord::new().with("x", 0.0)];
    let fields = FieldSelector::single("x").expect("selector");
    let scale = compute_scale(&records, &fields).expect("scale");

    assert!(scale.is_degenerate());
    let percent = scale.percent_of(0.0);
    assert!(percent.is_finite());
    assert_eq!(percent, 0.0);
}

#[test]
fn percent_of_clamps_to_unit_range() {
    let records = vec![monthly("Jan", 10.0)];
    let fields = FieldSelector::single("projects").expect("selector");
    let scale = compute_scale(&records, &fields).expect("scale");

    assert_eq!(scale.percent_of(25.0), 100.0);
    assert_eq!(scale.percent_of(-3.0), 0.0);
    assert_abs_diff_eq!(scale.percent_of(2.5), 25.0, epsilon = 1e-12);
}

#[test]
fn text_value_in_candidate_field_is_invalid_input() {
    let records = vec![DataRecord::new().with("projects", "many")];
    let fields = FieldSelector::single("projects").expect("selector");

    let err = compute_scale(&records, &fields).expect_err("text must be rejected");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn non_finite_value_is_invalid_input() {
    let records = vec![DataRecord::new().with("projects", FieldValue::Number(f64::NAN))];
    let fields = FieldSelector::single("projects").expect("selector");

    let err = compute_scale(&records, &fields).expect_err("nan must be rejected");
    assert!(format!("{err}").contains("finite"));
}
