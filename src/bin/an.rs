use annuity::{exec, exec_with_json, Value};
use serde_json::json;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("Usage: an FUNCTION [arg ...] [options]");
        eprintln!("       an FUNCTION --json '[arg, ...]'");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --output-json    Output result in JSON format with type and timing");
        eprintln!("  --json JSON      Use a JSON array for argument values");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  an PMT 0.004167 360 100000");
        eprintln!("  an PPMT 0.1 1 2 2000 --output-json");
        eprintln!("  an IPMT --json '[0.005, 12, 360, 300000]'");
        std::process::exit(1);
    }

    // Parse arguments and flags
    let name = args[0].clone();
    let mut json_input = None;
    let mut output_json = false;
    let mut fn_args = Vec::new();
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];

        if arg == "--json" {
            // --json flag requires a JSON string argument
            if i + 1 >= args.len() {
                eprintln!("Error: --json flag requires a JSON array argument");
                eprintln!("Usage: an FUNCTION --json '[arg, ...]'");
                std::process::exit(1);
            }
            json_input = Some(args[i + 1].clone());
            i += 1; // Skip the JSON string argument
        } else if arg == "--output-json" {
            output_json = true;
        } else {
            fn_args.push(parse_value(arg));
        }

        i += 1;
    }

    // Measure execution time
    let start_time = Instant::now();

    let result = if let Some(json_str) = json_input {
        exec_with_json(&name, &json_str)
    } else {
        exec(&name, &fn_args)
    };

    let execution_time = start_time.elapsed();
    let execution_time_ms = execution_time.as_secs_f64() * 1000.0;

    match result {
        Ok(val) => {
            if output_json {
                println!("{}", format_json_output(&val, execution_time_ms));
            } else {
                println!("{:?}", val);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn format_json_output(value: &Value, execution_time_ms: f64) -> String {
    let (result_value, type_name) = match value {
        Value::Number(n) => (json!(n), "Number"),
        Value::String(s) => (json!(s), "String"),
        Value::Boolean(b) => (json!(b), "Boolean"),
        Value::Currency(c) => (json!(c), "Currency"),
        Value::Null => (json!(null), "Null"),
        Value::Array(_) => (json!(format!("{:?}", value)), "Array"),
    };

    let output = json!({
        "result": result_value,
        "type": type_name,
        "execution_time": format!("{:.2} ms", execution_time_ms)
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

fn parse_value(s: &str) -> Value {
    // Try to parse as different types

    // Check for string (quoted)
    if (s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')) {
        return Value::String(s[1..s.len() - 1].to_string());
    }

    // Check for boolean
    match s.to_lowercase().as_str() {
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        "null" => return Value::Null,
        _ => {}
    }

    // Try to parse as number
    if let Ok(num) = s.parse::<f64>() {
        return Value::Number(num);
    }

    // Default to string if nothing else matches
    Value::String(s.to_string())
}
