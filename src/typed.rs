use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use crate::error::EnvfigError;
use crate::parser::EnvMap;

/// Build a structured JSON value from a parsed environment mapping.
///
/// Double underscore `__` separates nesting levels.
/// Single `_` within a segment is literal (part of the field name).
/// Segments are lowercased to match Rust field names.
///
/// Values are typed heuristically: bool > integer > float > string.
pub fn to_value(env: &EnvMap) -> Value {
    let mut object = Map::new();

    for (key, value) in env {
        let segments: Vec<&str> = key.split("__").collect();
        if segments.iter().any(|s| s.is_empty()) {
            continue;
        }
        insert_nested(&mut object, &segments, typed_value(value));
    }

    Value::Object(object)
}

/// Deserialize a parsed environment mapping into `T` via [`to_value`].
pub fn deserialize<T: DeserializeOwned>(env: &EnvMap) -> Result<T, EnvfigError> {
    Ok(serde_json::from_value(to_value(env))?)
}

fn insert_nested(object: &mut Map<String, Value>, segments: &[&str], value: Value) {
    debug_assert!(!segments.is_empty());

    let key = segments[0].to_lowercase();

    if segments.len() == 1 {
        object.insert(key, value);
    } else {
        let sub = object
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(sub_object) = sub {
            insert_nested(sub_object, &segments[1..], value);
        }
    }
}

fn typed_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Number(i.into());
    }
    // Only dotted numbers count, so "NaN" / "inf" stay strings.
    if s.contains('.')
        && let Ok(f) = s.parse::<f64>()
        && let Some(n) = Number::from_f64(f)
    {
        return Value::Number(n);
    }
    Value::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{APP_ENV, AppEnv};
    use crate::parser::parse;
    use serde_json::json;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn simple_key_lowercased() {
        let value = to_value(&env(&[("HOST", "0.0.0.0")]));
        assert_eq!(value, json!({ "host": "0.0.0.0" }));
    }

    #[test]
    fn nested_key() {
        let value = to_value(&env(&[("DATABASE__URL", "postgres://db")]));
        assert_eq!(value["database"]["url"], "postgres://db");
    }

    #[test]
    fn single_underscore_preserved() {
        let value = to_value(&env(&[("POOL_SIZE", "10")]));
        assert_eq!(value["pool_size"], 10);
    }

    #[test]
    fn bools_case_insensitive() {
        let value = to_value(&env(&[("A", "TRUE"), ("B", "false")]));
        assert_eq!(value["a"], true);
        assert_eq!(value["b"], false);
    }

    #[test]
    fn integers_and_floats() {
        let value = to_value(&env(&[("PORT", "8080"), ("OFFSET", "-5"), ("RATE", "1.5")]));
        assert_eq!(value["port"], 8080);
        assert_eq!(value["offset"], -5);
        assert_eq!(value["rate"], 1.5);
    }

    #[test]
    fn non_finite_stays_string() {
        let value = to_value(&env(&[("A", "NaN"), ("B", "inf")]));
        assert_eq!(value["a"], "NaN");
        assert_eq!(value["b"], "inf");
    }

    #[test]
    fn empty_value_is_empty_string() {
        let value = to_value(&env(&[("EMPTY", "")]));
        assert_eq!(value["empty"], "");
    }

    #[test]
    fn malformed_nesting_skipped() {
        let value = to_value(&env(&[("__LEADING", "x"), ("TRAILING__", "y"), ("OK", "z")]));
        assert_eq!(value, json!({ "ok": "z" }));
    }

    #[test]
    fn deserialize_struct() {
        let app: AppEnv = deserialize(&parse(APP_ENV)).unwrap();
        assert_eq!(app.host, "0.0.0.0");
        assert_eq!(app.port, 8080);
        assert!(app.debug);
        assert_eq!(app.ratio, 0.75);
        assert_eq!(app.database.url, "postgres://db");
        assert_eq!(app.database.pool_size, 20);
    }

    #[test]
    fn deserialize_type_mismatch_errors() {
        let result: Result<AppEnv, _> = deserialize(&parse("PORT=abc\n"));
        assert!(matches!(result, Err(EnvfigError::Deserialize(_))));
    }
}
