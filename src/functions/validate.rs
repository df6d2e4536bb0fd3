use crate::error::Error;
use crate::types::Value;

/// Coerce a loosely-typed scalar into a strict float.
///
/// Accepts numbers, currency amounts, booleans (1/0) and numeric strings.
/// Anything else, including null where a number is required, fails with a
/// message naming the offending argument. No range checking happens here.
pub fn validate_float(value: &Value, field: &str) -> Result<f64, Error> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Currency(n) => Ok(*n),
        Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::new(format!("{} must be a number", field))),
        _ => Err(Error::new(format!("{} must be a number", field))),
    }
}

/// Coerce a loosely-typed scalar into a strict integer, truncating toward
/// zero the way spreadsheet integer arguments do.
pub fn validate_int(value: &Value, field: &str) -> Result<i64, Error> {
    Ok(validate_float(value, field)?.trunc() as i64)
}
