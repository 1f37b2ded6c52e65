//! Shared formatting helpers for TUI widgets.
//!
//! Pure string formatting only; no ratatui styles or layout here.

/// Format a currency amount, e.g. `"$1234.50"`.
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

/// Format a percentage, e.g. `"33.33%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_has_two_decimals_and_sign() {
        assert_eq!(format_money(50.0), "$50.00");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.567), "$1234.57");
        assert_eq!(format_money(-12.5), "-$12.50");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(33.333), "33.33%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
