//! Json conversions shared by request and response models.
//!
//! Every decode goes through [`serde_path_to_error`], so schema mismatches
//! report the exact location of the offending value (e.g. `[0].issues[1].severity`).

use crate::ValidationError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

pub fn from_json_str<T: DeserializeOwned>(text: &str) -> Result<T, ValidationError> {
    let value: Value = serde_json::from_str(text).map_err(ValidationError::InvalidJson)?;
    from_value(value)
}

pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ValidationError> {
    serde_path_to_error::deserialize(value).map_err(ValidationError::from)
}

/// Decodes every element of `raw` without copying it. Schema error paths
/// are prefixed with the index of the failing element.
pub fn from_values<T: DeserializeOwned>(raw: &[Value]) -> Result<Vec<T>, ValidationError> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| {
            serde_path_to_error::deserialize(value).map_err(|err| {
                match ValidationError::from(err) {
                    ValidationError::Schema { path, source } => ValidationError::Schema {
                        path: indexed_path(index, &path),
                        source,
                    },
                    other => other,
                }
            })
        })
        .collect()
}

fn indexed_path(index: usize, path: &str) -> String {
    match path {
        "." => format!("[{index}]"),
        _ if path.starts_with('[') => format!("[{index}]{path}"),
        _ => format!("[{index}].{path}"),
    }
}

pub fn to_value<T: Serialize>(value: &T) -> Result<Value, ValidationError> {
    serde_json::to_value(value).map_err(ValidationError::Serialization)
}

pub fn to_map<T: Serialize>(value: &T) -> Result<Map<String, Value>, ValidationError> {
    match to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(ValidationError::NotAnObject(other.to_string())),
    }
}

pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, ValidationError> {
    serde_json::to_string(value).map_err(ValidationError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Inner {
        line: u64,
    }

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Outer {
        items: Vec<Inner>,
    }

    #[test]
    fn invalid_json_is_reported_as_such() {
        let err = from_json_str::<Outer>("{\"items\": [").expect_err("error expected");
        assert!(
            matches!(err, ValidationError::InvalidJson(_)),
            "expected: 'InvalidJson', got: {err:?}"
        );
    }

    #[test]
    fn schema_mismatch_reports_path() {
        let err = from_value::<Outer>(json!({"items": [{"line": 1}, {"line": "two"}]}))
            .expect_err("error expected");
        match err {
            ValidationError::Schema { path, .. } => assert_eq!(path, "items[1].line"),
            _ => panic!("expected: 'Schema', got: {err:?}"),
        }
    }

    #[test]
    fn element_errors_are_prefixed_with_index() {
        let raw = vec![
            json!({"items": []}),
            json!({"items": [{"line": 1}, {"line": -1}]}),
        ];
        let err = from_values::<Outer>(&raw).expect_err("error expected");
        match err {
            ValidationError::Schema { path, .. } => assert_eq!(path, "[1].items[1].line"),
            _ => panic!("expected: 'Schema', got: {err:?}"),
        }

        let err = from_values::<Outer>(&[json!("items")]).expect_err("error expected");
        match err {
            ValidationError::Schema { path, .. } => assert_eq!(path, "[0]"),
            _ => panic!("expected: 'Schema', got: {err:?}"),
        }
    }

    #[test]
    fn decodes_all_elements() {
        let raw = vec![json!({"items": [{"line": 3}]}), json!({"items": []})];
        let decoded = from_values::<Outer>(&raw).unwrap();
        assert_eq!(
            decoded,
            vec![
                Outer {
                    items: vec![Inner { line: 3 }]
                },
                Outer { items: vec![] }
            ]
        );
    }

    #[test]
    fn non_object_values_are_not_maps() {
        let err = to_map(&vec![1, 2, 3]).expect_err("error expected");
        assert!(
            matches!(err, ValidationError::NotAnObject(_)),
            "expected: 'NotAnObject', got: {err:?}"
        );
    }

    #[test]
    fn object_values_become_maps() {
        let map = to_map(&Outer {
            items: vec![Inner { line: 7 }],
        })
        .expect("success expected");
        assert_eq!(Value::Object(map), json!({"items": [{"line": 7}]}));
    }
}
