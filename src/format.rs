//! Display helpers shared by the KPI cards, chart labels and tables.

/// Compact currency: `$1.23M`, `$45.6K`, `$789`.
pub fn format_compact_currency(v: f64) -> String {
    if v >= 1_000_000.0 {
        format!("${:.2}M", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("${:.1}K", v / 1_000.0)
    } else {
        format!("${v:.0}")
    }
}

/// One-decimal percentage: `12.3%`.
pub fn format_percent(v: f64) -> String {
    format!("{v:.1}%")
}

/// Integer with thousands separators: `12,345`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two-decimal amount with thousands separators: `1,234.50`.
pub fn format_amount(v: f64) -> String {
    let cents = (v.abs() * 100.0).round() as u64;
    let sign = if v < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}{}.{:02}",
        format_count((cents / 100) as usize),
        cents % 100
    )
}

/// Cut a label to `max` characters, marking the cut with `…`.
pub fn truncate_label(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max).collect();
        out.push('…');
        out
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_currency_thresholds() {
        assert_eq!(format_compact_currency(0.0), "$0");
        assert_eq!(format_compact_currency(999.4), "$999");
        assert_eq!(format_compact_currency(1_000.0), "$1.0K");
        assert_eq!(format_compact_currency(45_678.0), "$45.7K");
        assert_eq!(format_compact_currency(1_234_567.0), "$1.23M");
    }

    #[test]
    fn counts_get_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn amounts_and_percents() {
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(-3.25), "-3.25");
        assert_eq!(format_percent(12.345), "12.3%");
    }

    #[test]
    fn long_labels_are_truncated() {
        assert_eq!(truncate_label("Dell XPS 15", 22), "Dell XPS 15");
        assert_eq!(truncate_label("Herman Miller Chair Deluxe Edition", 22), "Herman Miller Chair De…");
    }
}
