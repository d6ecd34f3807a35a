//! Engine option handling: a JSON object from `--option` becomes an ordered
//! list of flags appended to the external command line.

use serde_json::{Map, Value};

use crate::error::MinifyError;

/// How a single option is rendered on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Flag {
    /// `--key` with no value.
    Switch,
    /// `--key <value>`.
    Valued(String),
}

/// Ordered option list. Order follows the JSON object's insertion order,
/// which serde_json preserves (`preserve_order` feature).
#[derive(Debug, Clone, Default)]
pub struct ArgList {
    entries: Vec<(String, Flag)>,
}

impl ArgList {
    /// Build from a parsed option object. Falsy values (false, null, "",
    /// any zero number) are dropped, `true` becomes a bare switch, anything
    /// else becomes `--key <stringified value>`. Keys are passed through
    /// unvalidated; a malformed key produces a malformed flag.
    pub fn from_options(options: &Map<String, Value>) -> Self {
        let entries = options
            .iter()
            .filter_map(|(key, value)| flag_for(value).map(|f| (key.clone(), f)))
            .collect();
        Self { entries }
    }

    /// Flatten to command-line tokens.
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.entries.len() * 2);
        for (key, flag) in &self.entries {
            tokens.push(format!("--{key}"));
            if let Flag::Valued(value) = flag {
                tokens.push(value.clone());
            }
        }
        tokens
    }
}

fn flag_for(value: &Value) -> Option<Flag> {
    match value {
        Value::Bool(true) => Some(Flag::Switch),
        Value::Bool(false) | Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(Flag::Valued(s.clone())),
        Value::Number(n) if n.as_f64().is_some_and(|f| f == 0.0) => None,
        Value::Number(n) => Some(Flag::Valued(n.to_string())),
        other => Some(Flag::Valued(other.to_string())),
    }
}

/// Parse the `--option` string into an option object.
pub fn parse_options(json: &str) -> Result<Map<String, Value>, MinifyError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tokens(json: Value) -> Vec<String> {
        let Value::Object(map) = json else {
            panic!("expected an object literal")
        };
        ArgList::from_options(&map).to_tokens()
    }

    #[test]
    fn test_switch_value_and_omission() {
        let result = tokens(json!({"a": true, "b": false, "c": "x"}));
        assert_eq!(result, vec!["--a", "--c", "x"]);
    }

    #[test]
    fn test_order_is_insertion_order() {
        let result = tokens(json!({"zeta": "1", "alpha": "2", "mid": true}));
        assert_eq!(result, vec!["--zeta", "1", "--alpha", "2", "--mid"]);
    }

    #[test]
    fn test_falsy_values_dropped() {
        let result = tokens(json!({"a": null, "b": "", "c": 0, "d": 0.0, "e": false}));
        assert!(result.is_empty());
    }

    #[test]
    fn test_numbers_stringified() {
        let result = tokens(json!({"level": 2, "ratio": 0.8}));
        assert_eq!(result, vec!["--level", "2", "--ratio", "0.8"]);
    }

    #[test]
    fn test_empty_object() {
        let list = ArgList::from_options(&Map::new());
        assert!(list.to_tokens().is_empty());
    }

    #[test]
    fn test_malformed_keys_pass_through() {
        let result = tokens(json!({"weird key": true}));
        assert_eq!(result, vec!["--weird key"]);
    }

    #[test]
    fn test_parse_options_object() {
        let map = parse_options(r#"{"compilation_level": "ADVANCED"}"#).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_parse_options_rejects_non_object() {
        assert!(parse_options("[1, 2]").is_err());
        assert!(parse_options("not json").is_err());
    }
}
