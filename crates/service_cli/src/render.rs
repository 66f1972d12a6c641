//! Number formatting helpers for table output.

/// Format a monetary value as a thousands-separated rounded integer.
pub fn money(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a signed monetary delta with an explicit sign.
pub fn signed_money(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", money(value))
    } else {
        money(value)
    }
}

/// Format a ratio as a percentage with one decimal place.
pub fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_groups_thousands() {
        assert_eq!(money(5_280_000.0), "5,280,000");
        assert_eq!(money(837.4), "837");
        assert_eq!(money(0.0), "0");
    }

    #[test]
    fn test_money_negative() {
        assert_eq!(money(-1_674_000.0), "-1,674,000");
    }

    #[test]
    fn test_signed_money() {
        assert_eq!(signed_money(1_000.0), "+1,000");
        assert_eq!(signed_money(-1_000.0), "-1,000");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.3879), "38.8%");
        assert_eq!(percent(0.0), "0.0%");
    }
}
