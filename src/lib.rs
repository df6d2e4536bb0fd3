pub mod error;
pub mod functions;
pub mod types;

pub use error::Error;
pub use functions::dispatch::{builtin_function_count, exec_builtin, has_builtin_function};
pub use types::Value;

/// Execute a builtin function by name over already-resolved scalar values.
///
/// `Ok` carries the numeric result, which may be the NaN domain sentinel for
/// type-correct inputs that violate a domain constraint (bad payment type,
/// period outside the schedule). `Err` carries a descriptive validation
/// message.
pub fn exec(name: &str, args: &[Value]) -> Result<Value, Error> {
    functions::dispatch::exec_builtin(name, args)
}

/// Execute a builtin function with arguments provided as a JSON array.
/// JSON format: [0.005, 360, 300000]
/// Scalars go through the same coercion the functions apply to any value.
pub fn exec_with_json(name: &str, json_args: &str) -> Result<Value, Error> {
    let parsed: serde_json::Value = serde_json::from_str(json_args)
        .map_err(|e| Error::new(format!("Invalid JSON: {}", e)))?;

    let args = match parsed {
        serde_json::Value::Array(items) => {
            let mut result = Vec::new();
            for item in items {
                result.push(json_to_value(item)?);
            }
            result
        }
        _ => return Err(Error::new("JSON arguments must be an array of scalar values")),
    };

    exec(name, &args)
}

/// Convert serde_json::Value to an annuity Value with type inference
pub fn json_to_value(json: serde_json::Value) -> Result<Value, Error> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i as f64))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Number(f))
            } else {
                Err(Error::new("Invalid number in JSON"))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(arr) => {
            let mut result = Vec::new();
            for item in arr {
                result.push(json_to_value(item)?);
            }
            Ok(Value::Array(result))
        }
        serde_json::Value::Object(_) => {
            Err(Error::new("JSON objects are not supported as scalar arguments"))
        }
    }
}
