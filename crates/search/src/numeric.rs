//! Leading-integer parsing for numeric-as-string fields.
//!
//! `"12km"` reads as 12, `" 3"` as 3, `"abc"` and `""` as not-a-number.
//! Not-a-number is `None`, and every bound check against it fails, so a
//! malformed value never matches a numeric filter.

/// Parse the integer at the start of `input`.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Values beyond `i64` saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let value = digits[..len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// `value >= bound`, false if either side is not a number.
#[inline]
pub fn at_least(value: &str, bound: &str) -> bool {
    matches!(
        (parse_leading_int(value), parse_leading_int(bound)),
        (Some(v), Some(b)) if v >= b
    )
}

/// `value <= bound`, false if either side is not a number.
#[inline]
pub fn at_most(value: &str, bound: &str) -> bool {
    matches!(
        (parse_leading_int(value), parse_leading_int(bound)),
        (Some(v), Some(b)) if v <= b
    )
}
