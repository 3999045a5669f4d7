//! Tests for CSV/JSON export round-trips

use crate::error::ExportError;
use crate::export::{CSV_HEADER, parse_csv, parse_json, to_csv, to_json};
use crate::model::ParameterSet;

fn awkward_set() -> ParameterSet {
    // Values chosen to exercise non-terminating binary fractions.
    ParameterSet {
        r: 0.1,
        alpha: 1.3,
        theta: 2.7,
        s: 9.999,
        q: 0.30000000000000004,
        a: 5.5,
        e: 1.0 / 3.0,
        m: 8.25,
        dn: 0.7,
        beta: 4.9,
    }
}

#[test]
fn json_round_trip_is_exact() {
    let set = awkward_set();
    let result = 1234.56789;

    let text = to_json(&set, result);
    let (parsed_set, parsed_result) = parse_json(&text).unwrap();

    assert_eq!(parsed_set, set);
    assert_eq!(parsed_result, result);
}

#[test]
fn csv_round_trip_is_exact() {
    let set = awkward_set();
    let result = 6500.0;

    let text = to_csv(&set, result);
    let (parsed_set, parsed_result) = parse_csv(&text).unwrap();

    assert_eq!(parsed_set, set);
    assert_eq!(parsed_result, result);
}

#[test]
fn csv_has_one_header_and_one_data_row() {
    let text = to_csv(&ParameterSet::demo(), 6500.0);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1].split(',').count(), 11);
}

#[test]
fn json_values_are_single_element_arrays() {
    let text = to_json(&ParameterSet::demo(), 6500.0);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 11);
    for (key, entry) in object {
        let array = entry
            .as_array()
            .unwrap_or_else(|| panic!("{key} should map to an array"));
        assert_eq!(array.len(), 1);
        assert!(array[0].is_f64() || array[0].is_i64() || array[0].is_u64());
    }

    // Keys follow canonical column order, result last.
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["R", "alpha", "theta", "S", "Q", "A", "E", "M", "Dn", "beta", "C"]
    );
}

#[test]
fn parse_rejects_missing_fields() {
    assert_eq!(
        parse_json(r#"{"R": [1.0]}"#),
        Err(ExportError::MissingField("alpha"))
    );

    let truncated = "R,alpha,theta\n1,2,3\n";
    assert_eq!(parse_csv(truncated), Err(ExportError::MissingField("S")));
}

#[test]
fn parse_rejects_malformed_input() {
    assert!(matches!(parse_json("not json"), Err(ExportError::Json(_))));
    assert!(matches!(parse_csv(""), Err(ExportError::Csv(_))));

    let bad_row = format!("{CSV_HEADER}\n1,2,3\n");
    assert!(matches!(parse_csv(&bad_row), Err(ExportError::Csv(_))));
}
