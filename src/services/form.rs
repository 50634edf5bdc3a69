// src/services/form.rs
//! Turning raw input strings into request fields. Empty inputs take the
//! field's default; numbers are read the way a browser form reads them
//! (leading numeric prefix, the rest ignored).

/// Returns `value`, or `default` when `value` is empty.
pub fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Empty input means "absent", never the empty string.
pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses the leading base-10 integer of `value`. `"12abc"` is 12,
/// `"abc"` is `None`.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Parses the leading decimal number of `value` (`"0.7x"` is 0.7).
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut last_valid = 0;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                last_valid = end + 1;
            }
            b'.' if !seen_dot => seen_dot = true,
            b'e' | b'E' if seen_digit => {
                // Only take the exponent if at least one digit follows it.
                let mut exp_end = end + 1;
                if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
                    exp_end += 1;
                }
                let digits = bytes[exp_end..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if digits > 0 {
                    last_valid = exp_end + digits;
                }
                break;
            }
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..last_valid].parse::<f64>().ok()
}

/// Integer field: empty or unparsable input falls back to `default`.
pub fn int_or(value: &str, default: i64) -> i64 {
    parse_int_prefix(value).unwrap_or(default)
}

/// Float field: empty or unparsable input falls back to `default`.
pub fn float_or(value: &str, default: f64) -> f64 {
    parse_float_prefix(value).unwrap_or(default)
}

/// `"a, b ,c"` becomes `["a", "b", "c"]`; empty input is `None`.
pub fn split_categories(value: &str) -> Option<Vec<String>> {
    if value.is_empty() {
        return None;
    }
    Some(
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    )
}
