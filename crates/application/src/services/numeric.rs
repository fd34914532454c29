//! Prefix-tolerant number parsing for control-socket values.
//!
//! Both functions accept the longest numeric prefix and ignore whatever follows,
//! so `"42ms"` parses as 42. They fail only when no digit can be consumed.

fn skip_space(s: &str) -> &str {
    s.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Parses a signed integer with C `strtoll(.., 0)` rules: `0x` hex, leading `0`
/// octal, decimal otherwise. Out-of-range values saturate.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let (negative, rest) = split_sign(skip_space(value));
    let bytes = rest.as_bytes();

    let (radix, digits) = if bytes.len() > 2
        && bytes[0] == b'0'
        && (bytes[1] == b'x' || bytes[1] == b'X')
        && bytes[2].is_ascii_hexdigit()
    {
        (16, &rest[2..])
    } else if bytes.first() == Some(&b'0') {
        (8, rest)
    } else {
        (10, rest)
    };

    let mut magnitude: u64 = 0;
    let mut consumed = 0;
    let mut overflow = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        consumed += 1;
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
    }

    if consumed == 0 {
        return None;
    }

    let limit = if negative {
        i64::MIN.unsigned_abs()
    } else {
        i64::MAX as u64
    };
    if overflow || magnitude > limit {
        return Some(if negative { i64::MIN } else { i64::MAX });
    }

    Some(if negative {
        0i64.wrapping_sub_unsigned(magnitude)
    } else {
        magnitude as i64
    })
}

/// Parses a decimal floating-point prefix, including `inf`, `infinity` and `nan`.
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let (negative, rest) = split_sign(skip_space(value));

    let lower = rest.get(..8).unwrap_or(rest).to_ascii_lowercase();
    let special = if lower.starts_with("infinity") || lower.starts_with("inf") {
        Some(f64::INFINITY)
    } else if lower.starts_with("nan") {
        Some(f64::NAN)
    } else {
        None
    };
    if let Some(v) = special {
        return Some(if negative { -v } else { v });
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut mantissa_digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let parsed: f64 = rest[..end].parse().ok()?;
    Some(if negative { -parsed } else { parsed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_prefix_radixes() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  -17"), Some(-17));
        assert_eq!(parse_int_prefix("0x1f"), Some(31));
        assert_eq!(parse_int_prefix("017"), Some(15));
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_int_prefix("09"), Some(0));
    }

    #[test]
    fn test_int_prefix_accepts_trailing_garbage() {
        assert_eq!(parse_int_prefix("123abc"), Some(123));
        assert_eq!(parse_int_prefix("7\n"), Some(7));
        assert_eq!(parse_int_prefix("0xg"), Some(0));
    }

    #[test]
    fn test_int_prefix_rejects_non_numeric() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_int_prefix_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_int_prefix("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_float_prefix("3.5"), Some(3.5));
        assert_eq!(parse_float_prefix("-.25"), Some(-0.25));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("12.5usec"), Some(12.5));
        assert_eq!(parse_float_prefix("-inf"), Some(f64::NEG_INFINITY));
        assert!(parse_float_prefix("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_float_prefix_rejects_non_numeric() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("x1"), None);
    }
}
