// Turns decorated cell text ("₹50,000", "1.37kg", "8GB") into plain numbers.
// Knows nothing about units: it keeps digits, '.' and '-' and parses what is left.

/// Parses the numeric content of `s`, returning `0.0` when there is none.
///
/// After filtering, the longest leading `-?digits[.digits]` run is parsed, so
/// `"1.2.3"` gives `1.2` and a lone `"-"` gives `0.0`.
pub fn parse_number(s: &str) -> f64 {
    let filtered: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let prefix = numeric_prefix(&filtered);
    if prefix.is_empty() {
        return 0.0;
    }
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}

// Longest prefix shaped like `-?\d*\.?\d*` that holds at least one digit.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        ""
    } else {
        &s[..end]
    }
}
