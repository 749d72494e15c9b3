//! Numeric formatting for the fixed-width report.
//!
//! Report consumers parse exponents in the `1.23e+04` form and thousands
//! separated by commas, neither of which `std::fmt` produces on its own.

/// Width of the `=` banners and `-` rules between report sections.
pub const BANNER_WIDTH: usize = 80;

/// A full-width `=` banner.
pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// A full-width `-` rule.
pub fn rule() -> String {
    "-".repeat(BANNER_WIDTH)
}

/// Scientific notation with `precision` mantissa digits and a signed,
/// zero-padded exponent: `sci(57_909_050_000.0, 2) == "5.79e+10"`.
pub fn sci(value: f64, precision: usize) -> String {
    normalize_exponent(&format!("{:.*e}", precision, value))
}

/// Shortest round-trip scientific notation: `sci_shortest(6.674e-11) == "6.674e-11"`.
pub fn sci_shortest(value: f64) -> String {
    normalize_exponent(&format!("{:e}", value))
}

fn normalize_exponent(raw: &str) -> String {
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        // NaN and infinities carry no exponent
        return raw.to_string();
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        Err(_) => raw.to_string(),
    }
}

/// Fixed-point notation with `,` between groups of three integer digits:
/// `grouped(2_439.7, 0) == "2,440"`.
pub fn grouped(value: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, value);
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return raw.clone();
    }

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_width() {
        assert_eq!(banner().len(), 80);
        assert!(banner().chars().all(|c| c == '='));
        assert_eq!(rule().len(), 80);
    }

    #[test]
    fn test_sci_positive_exponent() {
        assert_eq!(sci(57_909_050_000.0, 2), "5.79e+10");
        assert_eq!(sci(3.3011e23, 2), "3.30e+23");
        assert_eq!(sci(1.989e30, 3), "1.989e+30");
        assert_eq!(sci(4495.06e9, 2), "4.50e+12");
    }

    #[test]
    fn test_sci_small_values() {
        assert_eq!(sci(0.0, 2), "0.00e+00");
        assert_eq!(sci(1.5, 1), "1.5e+00");
        assert_eq!(sci(-2.5e-7, 1), "-2.5e-07");
    }

    #[test]
    fn test_sci_shortest() {
        assert_eq!(sci_shortest(6.674e-11), "6.674e-11");
        assert_eq!(sci_shortest(1.0e100), "1e+100");
    }

    #[test]
    fn test_sci_non_finite() {
        assert_eq!(sci(f64::NAN, 2), "NaN");
        assert_eq!(sci(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(2_439.7, 0), "2,440");
        assert_eq!(grouped(149_597_870_700.0, 0), "149,597,870,700");
        assert_eq!(grouped(999.0, 0), "999");
        assert_eq!(grouped(-1_234.5, 1), "-1,234.5");
        assert_eq!(grouped(100_000.25, 2), "100,000.25");
    }
}
