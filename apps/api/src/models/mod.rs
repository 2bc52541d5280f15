pub mod attributes;
pub mod profile;
pub mod project;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// A numeric body field that clients may send either as a JSON number or as
/// a string (form inputs arrive as text).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Returns the value as a float, or `None` if the text does not parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericInput::Number(n) => Some(*n),
            NumericInput::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Integer view with truncation toward zero. Non-finite or out-of-range
    /// values yield `None`.
    pub fn as_i32(&self) -> Option<i32> {
        let value = self.as_f64()?.trunc();
        if value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
            Some(value as i32)
        } else {
            None
        }
    }
}

/// Reads an optional list of strings. A value that is not an array becomes
/// an empty list, and non-string items are kept as their JSON text so that
/// validation can still report them.
pub fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.map(|value| match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }))
}

/// Parses a path or query identifier. Surrounding whitespace is ignored.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_parses() {
        assert_eq!(NumericInput::Text(" 2.5 ".to_string()).as_f64(), Some(2.5));
        assert_eq!(NumericInput::Text("abc".to_string()).as_f64(), None);
    }

    #[test]
    fn test_numeric_integer_truncates() {
        assert_eq!(NumericInput::Number(90.9).as_i32(), Some(90));
        assert_eq!(NumericInput::Text("45".to_string()).as_i32(), Some(45));
        assert_eq!(NumericInput::Number(f64::MAX).as_i32(), None);
    }

    #[test]
    fn test_string_lists_tolerate_other_shapes() {
        use crate::models::project::ProjectInput;
        use serde_json::json;

        let input: ProjectInput =
            serde_json::from_value(json!({ "season": "fall", "tags": "a,b" })).unwrap();
        assert_eq!(input.season, Some(vec![]));
        assert_eq!(input.tags, Some(vec![]));

        let input: ProjectInput =
            serde_json::from_value(json!({ "season": ["fall", 3], "tags": null })).unwrap();
        assert_eq!(input.season, Some(vec!["fall".to_string(), "3".to_string()]));
        assert_eq!(input.tags, None);

        let input: ProjectInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.season, None);
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()), Some(id));
        assert_eq!(parse_id("not-an-id"), None);
        assert_eq!(parse_id(""), None);
    }
}
