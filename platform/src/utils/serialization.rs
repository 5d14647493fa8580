use serde_json::Value;

/// Reads a JSON number or numeric string. `null`, a missing value and an
/// empty string are `None`; anything else is an error describing the value.
pub(crate) fn opt_f64_from_value(v: &Value) -> Result<Option<f64>, String> {
    match v {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(None)
            } else {
                s.parse::<f64>()
                    .map(Some)
                    .map_err(|_| format!("could not parse f64 from string: {s}"))
            }
        }
        other => Err(format!("expected number or string, got: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(opt_f64_from_value(&json!(1.5)), Ok(Some(1.5)));
        assert_eq!(opt_f64_from_value(&json!(" 2.25 ")), Ok(Some(2.25)));
    }

    #[test]
    fn empty_and_null_are_none() {
        assert_eq!(opt_f64_from_value(&Value::Null), Ok(None));
        assert_eq!(opt_f64_from_value(&json!("")), Ok(None));
    }

    #[test]
    fn rejects_garbage() {
        assert!(opt_f64_from_value(&json!("abc")).is_err());
        assert!(opt_f64_from_value(&json!([1])).is_err());
    }
}
