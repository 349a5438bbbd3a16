use crate::utils::error::{Result, WarmupError};
use crate::utils::validation::validate_range;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub const MIN_BASE: i64 = 2;
pub const MAX_BASE: i64 = 36;

/// Largest integer an `f64` holds with unit precision (2^53).
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Writes the integer `n` in `target_base`, using lowercase letters for
/// digits above 9.
pub fn to_base(n: impl Into<i128>, target_base: i64) -> Result<String> {
    validate_range("target_base", target_base, MIN_BASE, MAX_BASE)?;

    let n = n.into();
    let base = target_base as u128;
    let mut magnitude = n.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        digits.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    if n < 0 {
        digits.push(b'-');
    }
    digits.reverse();

    Ok(digits.into_iter().map(char::from).collect())
}

/// Writes any finite number in `target_base`, fractional part included.
///
/// Fraction digits stop as soon as the written value is the closest one to
/// `n` (`2.5` in base 2 is `10.1`, `0.1` in base 10 stays `0.1`). Integer
/// parts beyond 2^53 are padded with zeros once the remaining quotient is no
/// longer exact.
pub fn float_to_base(n: f64, target_base: i64) -> Result<String> {
    validate_range("target_base", target_base, MIN_BASE, MAX_BASE)?;
    if !n.is_finite() {
        return Err(WarmupError::range_error("n", n, "number must be finite"));
    }

    let base = target_base as u32;
    let radix = f64::from(base);
    let value = n.abs();
    let mut integer = value.floor();
    let mut fraction = value - integer;

    // Half the gap to the next representable value; digits below it are noise.
    let mut delta = (0.5 * (next_up(value) - value)).max(next_up(0.0));
    let mut fraction_digits: Vec<u32> = Vec::new();
    if fraction >= delta {
        loop {
            fraction *= radix;
            delta *= radix;
            let digit = fraction as u32;
            fraction_digits.push(digit);
            fraction -= f64::from(digit);

            let rounds_up = fraction > 0.5 || (fraction == 0.5 && digit & 1 == 1);
            if rounds_up && fraction + delta > 1.0 {
                round_up(&mut fraction_digits, &mut integer, base);
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }

    let mut integer_digits: Vec<u32> = Vec::new();
    while integer / radix >= EXACT_INTEGER_LIMIT {
        integer /= radix;
        integer_digits.push(0);
    }
    loop {
        let remainder = integer % radix;
        integer_digits.push(remainder as u32);
        integer = (integer - remainder) / radix;
        if integer <= 0.0 {
            break;
        }
    }

    let mut out = String::new();
    if n < 0.0 {
        out.push('-');
    }
    out.extend(integer_digits.iter().rev().map(|&d| char::from(DIGITS[d as usize])));
    if !fraction_digits.is_empty() {
        out.push('.');
        out.extend(fraction_digits.iter().map(|&d| char::from(DIGITS[d as usize])));
    }

    Ok(out)
}

/// Adds one unit in the last fraction place, carrying into the integer part.
fn round_up(fraction_digits: &mut Vec<u32>, integer: &mut f64, base: u32) {
    while let Some(last) = fraction_digits.pop() {
        if last + 1 < base {
            fraction_digits.push(last + 1);
            return;
        }
    }
    *integer += 1.0;
}

/// Smallest `f64` greater than a non-negative finite `x`.
fn next_up(x: f64) -> f64 {
    f64::from_bits(x.to_bits() + 1)
}
