//! Presentation formatting for the derived numeric fields. The display
//! strings are the output contract for rendering/export collaborators; the
//! numeric fields remain on the record for sorting and aggregation, so
//! nothing downstream should re-format (or re-parse) these strings for math.

/// Grouped-thousands rendering with two decimals, e.g. `1,234,567.89`.
pub fn format_amount(value: f64) -> String {
    let rendered = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(frac_part);
    grouped
}

pub fn format_score(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1_234.5), "-1,234.50");
        assert_eq!(format_amount(-12.0), "-12.00");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(100.0), "100.00");
        assert_eq!(format_score(33.333), "33.33");
        assert_eq!(format_score(0.0), "0.00");
    }
}
