//! Display formatting for monetary results
//!
//! Amounts are shown in Indian grouping (last three digits, then pairs:
//! `12,34,567`) with no fraction digits and a rupee sign. Formatting never feeds
//! back into a calculation.

/// Currency symbol prefixed to every formatted amount
pub const RUPEE: &str = "\u{20b9}";

/// Round half away from zero to `digits` decimal places
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

/// Group a string of ASCII digits the Indian way
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut out = String::with_capacity(len + len / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, ch) in head[lead..].chars().enumerate() {
        if i % 2 == 0 && (i > 0 || lead == 1) {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Format a whole-number amount with Indian digit grouping, no currency sign
///
/// ```
/// use wealth_projections::format::format_grouped;
/// assert_eq!(format_grouped(1234567.4), "12,34,567");
/// ```
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_indian(&digits);
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount for display: rupee sign, Indian grouping, no decimals
///
/// The sign of a negative amount follows the rupee sign (`₹-1,500`).
pub fn format_inr(value: f64) -> String {
    format!("{}{}", RUPEE, format_grouped(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1_000.0), "1,000");
        assert_eq!(format_grouped(99_999.0), "99,999");
        assert_eq!(format_grouped(100_000.0), "1,00,000");
        assert_eq!(format_grouped(1_161_695.38), "11,61,695");
        assert_eq!(format_grouped(123_456_789.0), "12,34,56,789");
    }

    #[test]
    fn test_rounding_to_whole_rupees() {
        assert_eq!(format_grouped(310_584.82), "3,10,585");
        assert_eq!(format_grouped(2.5), "3");
        assert_eq!(format_grouped(-1_500.4), "-1,500");
    }

    #[test]
    fn test_inr_prefix() {
        assert_eq!(format_inr(1_234_567.4), "\u{20b9}12,34,567");
        assert_eq!(format_inr(f64::NAN), "\u{20b9}-");
    }

    #[test]
    fn test_negative_sign_follows_rupee() {
        assert_eq!(format_inr(-1_500.0), "\u{20b9}-1,500");
        assert_eq!(format_inr(-25_000.0), "\u{20b9}-25,000");
        assert_eq!(format_inr(-0.4), "\u{20b9}0");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(310_584.8197, 2), 310_584.82);
    }
}
