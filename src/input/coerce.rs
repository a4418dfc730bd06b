use serde_json::Value;

const MISSING_TOKENS: &[&str] = &["", "na", "n/a", "nan", "null", "none", "-"];

/// Coerces a raw cell to a finite number. Anything unparseable is missing.
pub fn coerce_cell(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if MISSING_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(s)) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn coerce_json_cell(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => coerce_cell(s),
        _ => None,
    }
}
