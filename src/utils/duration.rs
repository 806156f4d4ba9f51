//! Duration strings of the form "300ms", "-1.5h" or "2h45m".
//!
//! A duration is an optional sign followed by one or more decimal numbers,
//! each with an optional fraction and a mandatory unit suffix. Valid units
//! are "ns", "us" (or "µs"), "ms", "s", "m", "h". A bare "0" is accepted.

use crate::utils::DurationError;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Largest magnitude representable as signed 64-bit nanoseconds.
const MAX_NANOS: u64 = i64::MAX as u64;

/// Parses `input` and returns the duration in seconds.
pub fn parse_seconds(input: &str) -> Result<f64, DurationError> {
    let nanos = parse_nanos(input)?;
    let whole = nanos / SECOND as i64;
    let rest = nanos % SECOND as i64;
    Ok(whole as f64 + rest as f64 / 1e9)
}

/// Parses `input` into signed nanoseconds.
pub fn parse_nanos(input: &str) -> Result<i64, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(0);
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        // integer part
        let int_len = leading_digits(s);
        let (int_digits, rest) = s.split_at(int_len);
        s = rest;

        // fraction
        let mut frac_digits = "";
        if let Some(rest) = s.strip_prefix('.') {
            let frac_len = leading_digits(rest);
            frac_digits = &rest[..frac_len];
            s = &rest[frac_len..];
        }
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(invalid());
        }

        // unit
        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let (unit_str, rest) = s.split_at(unit_len);
        s = rest;
        let unit = unit_nanos(unit_str).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit_str.to_string(),
            input: input.to_string(),
        })?;

        let overflow = || DurationError::Overflow(input.to_string());

        let int_value: u64 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| overflow())?
        };
        let mut value = int_value.checked_mul(unit).ok_or_else(overflow)?;

        if !frac_digits.is_empty() {
            // Digits past what fits in a u64 cannot change the result.
            let kept = &frac_digits[..frac_digits.len().min(18)];
            let frac: u64 = kept.parse().map_err(|_| invalid())?;
            let scale = 10u64.pow(kept.len() as u32) as f64;
            let frac_nanos = (frac as f64 * (unit as f64 / scale)) as u64;
            value = value.checked_add(frac_nanos).ok_or_else(overflow)?;
        }

        total = total.checked_add(value).ok_or_else(overflow)?;
        if total > MAX_NANOS {
            return Err(overflow());
        }
    }

    let total = total as i64;
    Ok(if negative { -total } else { total })
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}
