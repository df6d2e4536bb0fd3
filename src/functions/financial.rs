use super::validate::{validate_float, validate_int};
use crate::error::Error;
use crate::types::Value;

/// Constant periodic payment for a cash flow. Cash paid out is negative.
///
/// `due` shifts the closed form between end-of-period and start-of-period
/// payment timing. With a zero rate this degenerates to simple amortization;
/// `nper == 0` then divides by zero and the IEEE result is returned as-is.
fn payment(rate: f64, nper: f64, pv: f64, fv: f64, due: bool) -> f64 {
    if rate == 0.0 {
        -(pv + fv) / nper
    } else {
        let pvif = (1.0 + rate).powf(nper);
        let timing = if due { 1.0 + rate } else { 1.0 };
        -(fv + pv * pvif) / timing / ((pvif - 1.0) / rate)
    }
}

/// Interest and principal components of the payment at period `per`, found
/// by walking the schedule forward from period 1.
///
/// The first payment of an annuity due falls before any interest accrues,
/// so its interest component is zero. Callers guarantee `per >= 1`.
fn split_period(rate: f64, per: i64, nper: f64, pv: f64, fv: f64, due: bool) -> (f64, f64) {
    let pmt = payment(rate, nper, pv, fv, due);
    let mut balance = pv;
    let mut interest = 0.0;
    let mut principal = 0.0;
    for i in 1..=per {
        interest = if due && i == 1 { 0.0 } else { -balance * rate };
        principal = pmt - interest;
        balance += principal;
    }
    (interest, principal)
}

pub fn exec_financial(name: &str, args: &[Value]) -> Result<Value, Error> {
    match name {
        "PMT" => {
            if args.len() < 2 || args.len() > 5 {
                return Err(Error::new("PMT expects 2-5 arguments: rate, nper, [pv], [fv], [type]"));
            }

            let rate = validate_float(&args[0], "PMT rate")?;
            let nper = validate_int(&args[1], "PMT nper")?;
            let pv = match args.get(2) {
                Some(v) => validate_float(v, "PMT pv")?,
                None => 0.0,
            };
            let fv = match args.get(3) {
                Some(v) => validate_float(v, "PMT fv")?,
                None => 0.0,
            };
            let timing = match args.get(4) {
                Some(v) => validate_int(v, "PMT type")?,
                None => 0,
            };

            if timing != 0 && timing != 1 {
                return Ok(Value::Number(f64::NAN));
            }

            Ok(Value::Number(payment(rate, nper as f64, pv, fv, timing == 1)))
        }
        "PPMT" | "IPMT" => {
            if args.len() < 3 || args.len() > 6 {
                return Err(Error::new(format!(
                    "{} expects 3-6 arguments: rate, per, nper, [pv], [fv], [type]",
                    name
                )));
            }

            let rate = validate_float(&args[0], &format!("{} rate", name))?;
            let per = validate_int(&args[1], &format!("{} per", name))?;
            let nper = validate_int(&args[2], &format!("{} nper", name))?;
            let pv = match args.get(3) {
                Some(v) => validate_float(v, &format!("{} pv", name))?,
                None => 0.0,
            };
            let fv = match args.get(4) {
                Some(v) => validate_float(v, &format!("{} fv", name))?,
                None => 0.0,
            };
            let timing = match args.get(5) {
                Some(v) => validate_int(v, &format!("{} type", name))?,
                None => 0,
            };

            if timing != 0 && timing != 1 {
                return Ok(Value::Number(f64::NAN));
            }
            // A period outside the schedule has no defined split.
            if per < 1 || per > nper {
                return Ok(Value::Number(f64::NAN));
            }

            let (interest, principal) = split_period(rate, per, nper as f64, pv, fv, timing == 1);
            Ok(Value::Number(if name == "IPMT" { interest } else { principal }))
        }
        _ => Err(Error::new(format!("Unknown financial function: {}", name))),
    }
}
