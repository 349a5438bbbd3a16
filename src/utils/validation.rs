use crate::utils::error::{Result, WarmupError};
use serde_json::{Number, Value};

/// Largest integer an IEEE-754 double holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Human-readable kind of a dynamic argument, used in type errors.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a fractional number",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accepts integers and integral floats (`2.0`); no coercion from strings.
pub fn expect_integer(argument: &str, value: &Value) -> Result<i64> {
    let Value::Number(number) = value else {
        return Err(WarmupError::type_error(argument, "an integer", kind_of(value)));
    };

    match integral_value(argument, number)? {
        Some(i) => Ok(i),
        None => Err(WarmupError::type_error(
            argument,
            "an integer",
            "a fractional number",
        )),
    }
}

/// Accepts any JSON number; integers and floats are told apart by the caller.
pub fn expect_number<'a>(argument: &str, value: &'a Value) -> Result<&'a Number> {
    match value {
        Value::Number(number) => Ok(number),
        other => Err(WarmupError::type_error(argument, "a number", kind_of(other))),
    }
}

pub fn expect_str<'a>(argument: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| WarmupError::type_error(argument, "a string", kind_of(value)))
}

pub fn expect_array<'a>(argument: &str, value: &'a Value) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| WarmupError::type_error(argument, "an array", kind_of(value)))
}

/// Absent positional arguments are reported as a type failure.
pub fn expect_present<'a>(argument: &str, args: &'a [Value], index: usize) -> Result<&'a Value> {
    args.get(index)
        .ok_or_else(|| WarmupError::type_error(argument, "present", "nothing"))
}

/// `Ok(None)` means the number is fractional.
fn integral_value(argument: &str, number: &Number) -> Result<Option<i64>> {
    if let Some(i) = number.as_i64() {
        return Ok(Some(i));
    }
    if number.is_u64() {
        return Err(WarmupError::range_error(
            argument,
            number,
            "does not fit in a signed 64-bit integer",
        ));
    }

    match number.as_f64() {
        Some(f) if f.fract() == 0.0 => {
            if f.abs() <= MAX_SAFE_INTEGER {
                Ok(Some(f as i64))
            } else {
                Err(WarmupError::range_error(
                    argument,
                    number,
                    "exceeds the exactly representable integer range",
                ))
            }
        }
        _ => Ok(None),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WarmupError::config_error(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WarmupError::range_error(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
