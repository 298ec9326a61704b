//! Display formatters for market values
//!
//! Pure string conversion, no I/O and no hidden state. All three functions
//! are total for finite inputs; non-finite values are a caller error and
//! render through the standard float formatter.

/// Formats a value as US-dollar currency.
///
/// Sub-dollar magnitudes keep 4 to 6 fractional digits so micro-priced
/// assets don't collapse to `$0.00`; everything else gets the usual two,
/// with comma grouping. The sign goes before the currency symbol.
///
/// ```
/// use coin_market_sdk::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(0.000123), "$0.000123");
/// ```
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs < 1.0 {
        let rendered = format!("{abs:.6}");
        let (int_part, frac) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let keep = frac.trim_end_matches('0').len().max(4);
        format!("{sign}${int_part}.{}", &frac[..keep])
    } else {
        let rendered = format!("{abs:.2}");
        let (int_part, frac) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        format!("{sign}${}.{frac}", group_thousands(int_part))
    }
}

/// Abbreviates a large magnitude with a B/M/K suffix.
///
/// Two fractional digits on abbreviated values; boundary values take the
/// larger suffix. Below 1000 the value renders as plain text.
///
/// ```
/// use coin_market_sdk::format_number;
///
/// assert_eq!(format_number(2_500_000_000.0), "2.50B");
/// assert_eq!(format_number(999.0), "999");
/// ```
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.2}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.2}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Formats a percentage with two fractional digits and a trailing `%`.
///
/// The sign is preserved; no `+` is forced onto positive values.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(digits: &str) -> String {
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(",")
}
