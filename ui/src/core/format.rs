//! Formatting helpers for presenting currency amounts and percentages.

/// Indian-locale rupee display: the last three digits form one group, every
/// group above that has two digits, no fractional part. `600000` becomes
/// `₹6,00,000`.
pub fn format_inr(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts = Vec::new();
        let mut index = head.len();
        while index > 2 {
            parts.push(&head[index - 2..index]);
            index -= 2;
        }
        parts.push(&head[..index]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed percentage delta for trend lines, e.g. `+2.3%`.
pub fn format_delta(value: f64) -> String {
    format!("{value:+.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupee_grouping_uses_indian_locale() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(950.0), "₹950");
        assert_eq!(format_inr(1_000.0), "₹1,000");
        assert_eq!(format_inr(50_000.0), "₹50,000");
        assert_eq!(format_inr(600_000.0), "₹6,00,000");
        assert_eq!(format_inr(1_200_000.0), "₹12,00,000");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
    }

    #[test]
    fn fractions_round_away() {
        assert_eq!(format_inr(675_000.4), "₹6,75,000");
        assert_eq!(format_percent(86.666), "86.7%");
        assert_eq!(format_delta(2.3), "+2.3%");
        assert_eq!(format_delta(-4.2), "-4.2%");
    }
}
