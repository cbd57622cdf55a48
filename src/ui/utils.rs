/// Whole dollars with thousands separators: `$50,000`.
pub fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Two decimal places: `$85.42`.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Shortest form, no trailing `.0`: `10`, `2.5`.
pub fn format_quantity(quantity: f64) -> String {
    format!("{}", quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_is_grouped_by_thousands() {
        assert_eq!(format_usd(50_000), "$50,000");
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
        assert_eq!(format_usd(-10_000), "-$10,000");
    }

    #[test]
    fn prices_and_quantities() {
        assert_eq!(format_price(85.42), "$85.42");
        assert_eq!(format_price(80.0), "$80.00");
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(2.5), "2.5");
        assert_eq!(format_quantity(1e20), "100000000000000000000");
    }
}
