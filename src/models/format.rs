use chrono::NaiveDate;

/// `1250000` -> `$1,250,000`.
#[must_use]
pub fn format_usd(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// `3200` -> `3,200`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `2024-01-15` -> `January 15, 2024`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1_250_000), "$1,250,000");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(0), "$0");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(3_200), "3,200");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(12), "12");
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_long_date(date), "January 5, 2024");
    }
}
