//! Text formatting shared by the CLI and the comparison table.

/// Insert `,` every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `symbol` followed by the amount rounded to a whole number, e.g. `£113,675`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{}", group_thousands(rounded.abs() as u64))
}

pub fn format_usd(amount: f64) -> String {
    format_currency(amount, "$")
}

pub fn format_aed(amount: u32) -> String {
    format!("AED {}", group_thousands(u64::from(amount)))
}

/// One decimal place, as shown next to the effective rate.
pub fn format_percent(rate: f64) -> String {
    format!("{rate:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_currency_without_decimals() {
        assert_eq!(format_currency(113_674.55, "£"), "£113,675");
        assert_eq!(format_currency(0.0, "€"), "€0");
        assert_eq!(format_currency(-1_500.4, "$"), "-$1,500");
        assert_eq!(format_usd(f64::NAN), "$0");
    }

    #[test]
    fn formats_aed_and_percent() {
        assert_eq!(format_aed(22_000), "AED 22,000");
        assert_eq!(format_aed(9_500), "AED 9,500");
        assert_eq!(format_percent(45.469_82), "45.5%");
    }
}
