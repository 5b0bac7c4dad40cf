//! Test-vector records and the batch that holds them.
//!
//! A record is a JSON array of exactly three fields. Field 0 is the token
//! (a legacy address or a private key); fields 1..2 are opaque and round-trip
//! through the run untouched, whatever their JSON type. Shape violations are
//! fatal for the whole run, so they are rejected here, before the engine
//! ever sees a record.

use serde_json::Value;
use thiserror::Error;

/// Fatal input-shape errors. Any of these aborts the run before output is
/// written; per-record conversion trouble is handled separately in the
/// engine.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("input should be an array of test vectors, got {found}")]
    NotAnArray { found: &'static str },

    #[error("test vector at index {index} should be an array, got {found}")]
    RecordNotArray { index: usize, found: &'static str },

    #[error(
        "test vector at index {index} should be an array with {expected} elements, got {count}",
        expected = Record::FIELD_COUNT
    )]
    FieldCount { index: usize, count: usize },
}

/// Name of a JSON value's type, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One test vector: a token plus two preserved auxiliary fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<Value>,
}

impl Record {
    /// Accepted field count. The first field is the token; the rest are
    /// passed through verbatim.
    pub const FIELD_COUNT: usize = 3;

    /// Validate a raw JSON value as a record. `index` is the record's
    /// position in the batch, used only for error reporting.
    pub fn from_value(value: Value, index: usize) -> Result<Self, ShapeError> {
        match value {
            Value::Array(fields) if fields.len() == Self::FIELD_COUNT => Ok(Self { fields }),
            Value::Array(fields) => Err(ShapeError::FieldCount {
                index,
                count: fields.len(),
            }),
            other => Err(ShapeError::RecordNotArray {
                index,
                found: json_kind(&other),
            }),
        }
    }

    /// The token, if field 0 is a JSON string. `None` means the record will
    /// fail conversion, not that it is malformed.
    pub fn token(&self) -> Option<&str> {
        self.fields[0].as_str()
    }

    /// Rewrite field 0. The remaining fields are never touched.
    pub fn set_token(&mut self, token: String) {
        self.fields[0] = Value::String(token);
    }

    /// The preserved fields 1..2.
    pub fn extra(&self) -> &[Value] {
        &self.fields[1..]
    }

    pub fn into_value(self) -> Value {
        Value::Array(self.fields)
    }
}

/// The full ordered batch from one input file, fully materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    records: Vec<Record>,
}

impl Batch {
    /// Validate the top-level JSON value and every record in it. Runs before
    /// the engine, so a shape error always precedes any conversion or write.
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(ShapeError::NotAnArray {
                    found: json_kind(&other),
                })
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Record::from_value(item, index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.records.iter_mut()
    }

    /// Serialize back to the top-level JSON array, record order preserved.
    pub fn into_value(self) -> Value {
        Value::Array(self.records.into_iter().map(Record::into_value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_accepts_three_fields() {
        let rec = Record::from_value(json!(["1BpEi6", "x", 1]), 0).unwrap();
        assert_eq!(rec.token(), Some("1BpEi6"));
        assert_eq!(rec.extra(), &[json!("x"), json!(1)]);
    }

    #[test]
    fn record_rejects_wrong_field_count() {
        let err = Record::from_value(json!(["a", "b"]), 4).unwrap_err();
        assert!(matches!(err, ShapeError::FieldCount { index: 4, count: 2 }));

        let err = Record::from_value(json!(["a", "b", "c", "d"]), 0).unwrap_err();
        assert!(matches!(err, ShapeError::FieldCount { count: 4, .. }));
    }

    #[test]
    fn record_rejects_non_array() {
        let err = Record::from_value(json!({"addr": "1BpEi6"}), 2).unwrap_err();
        assert!(matches!(err, ShapeError::RecordNotArray { index: 2, .. }));
    }

    #[test]
    fn non_string_token_is_none_not_an_error() {
        let rec = Record::from_value(json!([42, "x", 1]), 0).unwrap();
        assert_eq!(rec.token(), None);
    }

    #[test]
    fn set_token_leaves_extra_fields_alone() {
        let mut rec =
            Record::from_value(json!(["old", {"script": "76a914"}, [1, 2, 3]]), 0).unwrap();
        rec.set_token("new".to_owned());
        assert_eq!(
            rec.into_value(),
            json!(["new", {"script": "76a914"}, [1, 2, 3]])
        );
    }

    #[test]
    fn batch_rejects_non_array_top_level() {
        let err = Batch::from_value(json!({"vectors": []})).unwrap_err();
        assert!(matches!(err, ShapeError::NotAnArray { found: "an object" }));
    }

    #[test]
    fn batch_round_trips_losslessly() {
        let input = json!([
            ["1BpEi6", "x", 1],
            ["L1aW4a", null, {"nested": [true, 2.5]}],
        ]);
        let batch = Batch::from_value(input.clone()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.into_value(), input);
    }

    #[test]
    fn batch_reports_first_bad_record() {
        let err = Batch::from_value(json!([["a", "b", "c"], ["short", 1]])).unwrap_err();
        assert!(matches!(err, ShapeError::FieldCount { index: 1, count: 2 }));
    }
}
