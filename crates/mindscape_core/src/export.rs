//! CSV/JSON serialization of a parameter set and its result.
//!
//! The JSON shape is `{ "R": [5.0], ..., "beta": [1.0], "C": [13000.0] }` —
//! one single-element array per column, keys in canonical parameter order
//! followed by `C`. The CSV shape is one header row and one data row with
//! the same columns. Both round-trip exactly: values are written with their
//! shortest round-trippable representation.
//!
//! This module deals in strings only; writing files is the caller's concern.

use serde_json::{Map, Number, Value, json};

use crate::error::ExportError;
use crate::model::{Parameter, ParameterSet};

/// CSV header row, canonical column order.
pub const CSV_HEADER: &str = "R,alpha,theta,S,Q,A,E,M,Dn,beta,C";

/// Key used for the computed result column.
pub const RESULT_KEY: &str = "C";

/// Serialize to the exported JSON shape.
pub fn to_json(set: &ParameterSet, result: f64) -> String {
    let mut object = Map::new();
    for parameter in Parameter::ALL {
        object.insert(parameter.key().to_string(), json!([set.get(parameter)]));
    }
    object.insert(RESULT_KEY.to_string(), json!([result]));
    Value::Object(object).to_string()
}

/// Serialize to the exported CSV shape (header row plus one data row).
pub fn to_csv(set: &ParameterSet, result: f64) -> String {
    let mut row: Vec<String> = Parameter::ALL
        .iter()
        .map(|&p| format_number(set.get(p)))
        .collect();
    row.push(format_number(result));
    format!("{CSV_HEADER}\n{}\n", row.join(","))
}

/// Parse the exported JSON shape back into a set and result.
pub fn parse_json(text: &str) -> Result<(ParameterSet, f64), ExportError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ExportError::Json(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| ExportError::Json("expected a top-level object".to_string()))?;

    let field = |key: &'static str| -> Result<f64, ExportError> {
        let entry = object.get(key).ok_or(ExportError::MissingField(key))?;
        entry
            .as_array()
            .and_then(|a| a.first())
            .and_then(Value::as_f64)
            .ok_or_else(|| ExportError::Json(format!("{key:?} is not a one-element number array")))
    };

    let mut set = ParameterSet::uniform(0.0);
    for parameter in Parameter::ALL {
        set.set(parameter, field(parameter.key())?);
    }
    let result = field(RESULT_KEY)?;

    Ok((set, result))
}

/// Parse the exported CSV shape back into a set and result.
pub fn parse_csv(text: &str) -> Result<(ParameterSet, f64), ExportError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| ExportError::Csv("empty input".to_string()))?;
    let row = lines
        .next()
        .ok_or_else(|| ExportError::Csv("missing data row".to_string()))?;

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if columns.len() != fields.len() {
        return Err(ExportError::Csv(format!(
            "header has {} columns but row has {}",
            columns.len(),
            fields.len()
        )));
    }

    let lookup = |key: &'static str| -> Result<f64, ExportError> {
        let index = columns
            .iter()
            .position(|&c| c == key)
            .ok_or(ExportError::MissingField(key))?;
        fields[index]
            .parse()
            .map_err(|_| ExportError::Csv(format!("{:?} is not a number", fields[index])))
    };

    let mut set = ParameterSet::uniform(0.0);
    for parameter in Parameter::ALL {
        set.set(parameter, lookup(parameter.key())?);
    }
    let result = lookup(RESULT_KEY)?;

    Ok((set, result))
}

/// Shortest representation that parses back to the identical f64.
fn format_number(value: f64) -> String {
    if let Some(n) = Number::from_f64(value) {
        n.to_string()
    } else {
        value.to_string()
    }
}
