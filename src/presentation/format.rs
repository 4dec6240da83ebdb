//! Display formatting for amounts and tally summaries.

use crate::domain::CounterEngine;

/// Formats a whole-unit amount with a currency prefix and thousands separators.
///
/// # Examples
///
/// ```
/// use angpao::presentation::format_amount;
///
/// assert_eq!(format_amount(1250, "$"), "$1,250");
/// assert_eq!(format_amount(5, "S$"), "S$5");
/// ```
pub fn format_amount(amount: u64, symbol: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", symbol, grouped)
}

/// Rounds a 0-100 share to a whole percent, halves rounding up.
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.0}%", percentage.round())
}

/// Plain-text summary of the tally, one denomination per line.
pub fn summary_text(engine: &CounterEngine, symbol: &str) -> String {
    let mut lines = vec![format!(
        "Total: {} ({} packets)",
        format_amount(engine.total(), symbol),
        engine.total_packets()
    )];

    for row in engine.breakdown() {
        lines.push(format!(
            "{} x{} = {} ({})",
            format_amount(u64::from(row.denomination.value()), symbol),
            row.count,
            format_amount(row.subtotal, symbol),
            format_percentage(row.percentage)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0, "$"), "$0");
        assert_eq!(format_amount(100, "$"), "$100");
        assert_eq!(format_amount(1000, "$"), "$1,000");
        assert_eq!(format_amount(123456, "$"), "$123,456");
        assert_eq!(format_amount(1234567, ""), "1,234,567");
    }

    #[test]
    fn test_format_percentage_rounds() {
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(80.0), "80%");
        assert_eq!(format_percentage(33.333), "33%");
        assert_eq!(format_percentage(66.7), "67%");
    }

    #[test]
    fn test_format_percentage_halves_round_up() {
        assert_eq!(format_percentage(12.5), "13%");
        assert_eq!(format_percentage(0.5), "1%");
        assert_eq!(format_percentage(37.5), "38%");
    }

    #[test]
    fn test_summary_text() {
        let mut engine = CounterEngine::default();
        engine.add_at(0);
        engine.add_at(0);
        engine.add_at(1);

        let summary = summary_text(&engine, "$");
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Total: $250 (3 packets)");
        assert_eq!(lines[1], "$100 x2 = $200 (80%)");
        assert_eq!(lines[2], "$50 x1 = $50 (20%)");
        assert_eq!(lines[5], "$2 x0 = $0 (0%)");
        assert_eq!(lines.len(), 6);
    }
}
