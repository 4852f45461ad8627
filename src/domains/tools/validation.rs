//! Argument validation helpers shared by every tool definition.
//!
//! Types, required fields and enumerations are enforced by deserializing
//! into the tool's parameter struct. Numeric bounds and array lengths are
//! checked afterwards with the helpers below. Unknown fields are ignored.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::error::ToolError;

/// Deserialize raw call arguments into a parameter struct.
///
/// A missing arguments object is treated as `{}` so that required-field
/// errors name the field instead of complaining about `null`.
pub fn parse_arguments<T: DeserializeOwned>(
    arguments: Option<Map<String, Value>>,
) -> Result<T, ToolError> {
    let object = Value::Object(arguments.unwrap_or_default());
    Ok(serde_json::from_value(object)?)
}

/// Deserialize an optional count that may arrive as `10` or `10.0`.
///
/// Used with `deserialize_with` on page sizes and durations. Fractional,
/// negative and out-of-range values are rejected.
pub fn whole_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!(
            "expected a whole number, got {value}"
        )));
    }
    Ok(Some(value as u32))
}

/// Check an optional integer against an inclusive range.
pub fn check_range(field: &str, value: Option<u32>, min: u32, max: u32) -> Result<(), ToolError> {
    match value {
        Some(v) if v < min || v > max => Err(ToolError::invalid_arguments(format!(
            "`{field}` must be between {min} and {max}, got {v}"
        ))),
        _ => Ok(()),
    }
}

/// Check an optional array against a maximum length.
pub fn check_max_items<T>(field: &str, items: Option<&[T]>, max: usize) -> Result<(), ToolError> {
    match items {
        Some(items) if items.len() > max => Err(ToolError::invalid_arguments(format!(
            "`{field}` accepts at most {max} items, got {}",
            items.len()
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    #[derive(Debug, Deserialize)]
    struct Sample {
        id: String,
        #[serde(default)]
        hidden: Option<bool>,
    }

    fn args(value: Value) -> Option<Map<String, Value>> {
        value.as_object().cloned()
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let parsed: Sample = parse_arguments(args(json!({ "id": "1", "extra": 5 }))).unwrap();
        assert_eq!(parsed.id, "1");
        assert!(parsed.hidden.is_none());
    }

    #[test]
    fn test_parse_missing_required_field() {
        let err = parse_arguments::<Sample>(None).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }

    #[test]
    fn test_parse_wrong_type() {
        let err = parse_arguments::<Sample>(args(json!({ "id": 7 }))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        let err =
            parse_arguments::<Sample>(args(json!({ "id": "7", "hidden": "yes" }))).unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn test_check_range_boundaries() {
        assert_ok!(check_range("max_results", Some(5), 5, 100));
        assert_ok!(check_range("max_results", Some(100), 5, 100));
        assert_ok!(check_range("max_results", None, 5, 100));
        assert_err!(check_range("max_results", Some(4), 5, 100));
        let err = check_range("max_results", Some(101), 5, 100).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid arguments: `max_results` must be between 5 and 100, got 101"
        );
    }

    #[derive(Debug, Deserialize)]
    struct Page {
        #[serde(default, deserialize_with = "whole_number")]
        max_results: Option<u32>,
    }

    #[test]
    fn test_whole_number_accepts_integral_floats() {
        let page: Page = parse_arguments(args(json!({ "max_results": 10.0 }))).unwrap();
        assert_eq!(page.max_results, Some(10));
        let page: Page = parse_arguments(args(json!({ "max_results": 25 }))).unwrap();
        assert_eq!(page.max_results, Some(25));
        let page: Page = parse_arguments(args(json!({ "max_results": null }))).unwrap();
        assert_eq!(page.max_results, None);
        let page: Page = parse_arguments(None).unwrap();
        assert_eq!(page.max_results, None);
    }

    #[test]
    fn test_whole_number_rejects_fractions_and_negatives() {
        for value in [json!(10.5), json!(-1), json!("10")] {
            let err = parse_arguments::<Page>(args(json!({ "max_results": value }))).unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(_)), "{value}");
        }
    }

    #[test]
    fn test_check_max_items() {
        let four = vec!["a", "b", "c", "d"];
        let five = vec!["a", "b", "c", "d", "e"];
        assert!(check_max_items("poll.options", Some(four.as_slice()), 4).is_ok());
        assert!(check_max_items::<&str>("poll.options", None, 4).is_ok());
        assert!(check_max_items("poll.options", Some(five.as_slice()), 4).is_err());
    }
}
