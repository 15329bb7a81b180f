//! Permissive numeric parsing for form input.
//!
//! Reads the longest numeric prefix and ignores the rest, so `"12 m2"`
//! parses as 12. Anything without a usable prefix resolves to zero.

/// Parse a whole number from the start of `input`.
///
/// Fractional parts are truncated (`"6.9"` → 6). Returns 0 when no digits
/// lead the string or the value does not fit in an `i64`.
pub fn parse_int(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, rest) = split_sign(s);
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return 0;
    }
    digits
        .parse::<i64>()
        .map_or(0, |v| if negative { -v } else { v })
}

/// Parse a real number from the start of `input`.
///
/// Accepts an optional sign, a decimal point, and an exponent. Returns 0.0
/// for input without a numeric prefix or for values that overflow to
/// infinity.
pub fn parse_real(input: &str) -> f64 {
    let s = input.trim_start();
    let (negative, rest) = split_sign(s);

    let int_part = leading_digits(rest);
    let mut end = int_part.len();
    let mut frac_len = 0;
    if rest[end..].starts_with('.') {
        frac_len = leading_digits(&rest[end + 1..]).len();
        if int_part.is_empty() && frac_len == 0 {
            return 0.0;
        }
        end += 1 + frac_len;
    }
    if int_part.is_empty() && frac_len == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it.
    let tail = &rest[end..];
    if tail.starts_with(['e', 'E']) {
        let (_, exp_rest) = split_sign(&tail[1..]);
        let exp_digits = leading_digits(exp_rest).len();
        if exp_digits > 0 {
            end += tail.len() - exp_rest.len() + exp_digits;
        }
    }

    match rest[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => {
            if negative {
                -v
            } else {
                v
            }
        }
        _ => 0.0,
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}
