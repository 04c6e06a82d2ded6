use carbon_charts::core::{DataRecord, FieldValue};
use carbon_charts::error::ChartError;
use rust_decimal::Decimal;

#[test]
fn parses_heterogeneous_record_sequence() {
    let json = r#"[
        {"month": "Jan", "projects": 5},
        {"week": "W2", "total": 12.5, "note": null},
        {"risk": "Low", "count": 25, "color": "green"}
    ]"#;

    let records = DataRecord::parse_sequence_json(json).expect("records");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].get("projects"), Some(&FieldValue::Number(5.0)));
    assert_eq!(records[0].get("month"), Some(&FieldValue::Text("Jan".to_owned())));
    assert_eq!(records[1].get("note"), Some(&FieldValue::Null));
    assert_eq!(records[2].get("color").and_then(FieldValue::as_text), Some("green"));

    let names: Vec<&str> = records[2].iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["risk", "count", "color"]);
}

#[test]
fn non_array_payload_is_invalid_input() {
    let err = DataRecord::parse_sequence_json(r#"{"month": "Jan"}"#).expect_err("object");
    assert!(matches!(err, ChartError::InvalidInput(_)));
    assert!(format!("{err}").contains("json array"));
}

#[test]
fn non_object_element_is_invalid_input() {
    let err = DataRecord::parse_sequence_json("[1, 2]").expect_err("numbers");
    assert!(format!("{err}").contains("record 0 must be a json object"));
}

#[test]
fn nested_values_are_invalid_input() {
    let err = DataRecord::parse_sequence_json(r#"[{"month": ["Jan"]}]"#).expect_err("nested");
    assert!(format!("{err}").contains("record 0 is malformed"));
}

#[test]
fn decimal_tonnage_converts_to_number() {
    let value = FieldValue::from_decimal(Decimal::new(12_345, 2), "credits").expect("decimal");
    let number = value.as_number().expect("number");
    assert!((number - 123.45).abs() <= 1e-9);
}

#[test]
fn records_collect_from_pairs() {
    let record: DataRecord = [("month", FieldValue::from("Feb")), ("projects", 8.0.into())]
        .into_iter()
        .collect();
    assert_eq!(record.len(), 2);
    assert_eq!(record.get("projects").and_then(FieldValue::as_number), Some(8.0));
}

#[test]
fn integer_values_convert_exactly() {
    let record = DataRecord::new().with("projects", 5).with("credits", i32::MAX);
    assert_eq!(record.get("projects"), Some(&FieldValue::Number(5.0)));
    assert_eq!(
        record.get("credits").and_then(FieldValue::as_number),
        Some(2_147_483_647.0)
    );
}

#[test]
fn parsed_records_keep_source_field_order() {
    let json = r#"[{"zeta": 1, "alpha": 2, "month": "Jan", "beta": 3}]"#;
    let records = DataRecord::parse_sequence_json(json).expect("records");
    let names: Vec<&str> = records[0].iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["zeta", "alpha", "month", "beta"]);
}
