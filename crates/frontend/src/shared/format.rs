//! Display formatting helpers.

/// Format a price in naira with thousands grouping, no decimals.
pub fn format_naira(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-₦{}", grouped)
    } else {
        format!("₦{}", grouped)
    }
}

/// Render a server timestamp for list/detail views.
pub fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naira_grouping() {
        assert_eq!(format_naira(0.0), "₦0");
        assert_eq!(format_naira(950.0), "₦950");
        assert_eq!(format_naira(4500.0), "₦4,500");
        assert_eq!(format_naira(1_250_000.0), "₦1,250,000");
    }

    #[test]
    fn naira_rounds_fractions() {
        assert_eq!(format_naira(1999.6), "₦2,000");
        assert_eq!(format_naira(1999.4), "₦1,999");
    }

    #[test]
    fn timestamp_format() {
        let dt = chrono::DateTime::parse_from_rfc3339("2024-09-24T10:15:30Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(format_timestamp(dt), "2024-09-24 10:15");
    }
}
