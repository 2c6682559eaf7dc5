//! Display formatting for analysis figures.
//!
//! Plain numbers print the way a browser prints them by default (`25`, not
//! `25.0`). Rupee amounts use Indian digit grouping (`4,50,000`) with at most
//! three fraction digits. Fixed-point rounding sends exact ties away from
//! zero (`0.125` -> `0.13`), the way a browser's `toFixed` does.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const RUPEE_SIGN: char = '₹';

/// Shortest natural rendering of a number: no trailing `.0`, no `-0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Number followed by a unit, e.g. `25 °C`.
pub fn format_measure(value: f64, unit: &str) -> String {
    format!("{} {unit}", format_number(value))
}

/// Greenness index against its 0..1 scale, e.g. `0.42 / 1.00`.
pub fn format_greenness(index: f64) -> String {
    format!("{} / 1.00", format_fixed(index, 2))
}

/// Classifier confidence as a whole percentage.
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", format_fixed(confidence * 100.0, 0))
}

/// `value` with exactly `digits` fraction digits, ties rounded away from zero.
///
/// Only values whose exact binary value sits halfway between two outputs
/// differ from `{:.N}`, which would round them to even.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn format_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let value = if value == 0.0 { 0.0 } else { value };
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    let exact = value.mul_add(scale, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        format!("{:.digits$}", scaled.round() / scale)
    } else {
        format!("{value:.digits$}")
    }
}

/// Rupee amount, e.g. `₹2,500`.
pub fn format_rupees(amount: f64) -> String {
    format!("{RUPEE_SIGN}{}", format_amount(amount))
}

/// Locale-style grouped amount with up to three fraction digits.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }
    let rounded = format_fixed(value.abs(), 3);
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Insert separators: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
