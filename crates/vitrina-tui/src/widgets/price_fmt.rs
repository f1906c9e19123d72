//! Price formatting helpers.
//!
//! Prices are whole currency units; the reference display groups
//! thousands with dots ("es-CO" style): 28000 → "$28.000".

/// Format a price with a currency sign and dot-grouped thousands.
pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(price))
}

/// Dot-group the integral part; fractional cents are rounded away
/// (the catalog uses whole amounts).
fn group_thousands(price: f64) -> String {
    let whole = price.round().abs() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if price < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_price(28_000.0), "$28.000");
        assert_eq!(format_price(8_000.0), "$8.000");
        assert_eq!(format_price(1_250_000.0), "$1.250.000");
    }

    #[test]
    fn small_amounts_are_ungrouped() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(999.0), "$999");
    }

    #[test]
    fn fractional_amounts_round() {
        assert_eq!(format_price(999.6), "$1.000");
    }
}
