//! Display formatters for metric values.

/// Unit kind of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricUnit {
    /// Plain count or rate.
    NoUnit,
    /// Bytes per second.
    Bytes,
    /// Latency in milliseconds.
    Latency,
    /// Requests per second.
    RequestRate,
    /// Ratio in `[0, 1]` shown as a percentage.
    SuccessRate,
}

/// Placeholder for a missing value.
pub const MISSING: &str = "---";

/// Format `value` for display in the given unit.
///
/// ```
/// use meshview_lib::format::{MetricUnit, format_metric};
///
/// assert_eq!(format_metric(MetricUnit::NoUnit, Some(1234.0)), "1.234k");
/// assert_eq!(format_metric(MetricUnit::Latency, Some(12.0)), "12 ms");
/// assert_eq!(format_metric(MetricUnit::SuccessRate, Some(0.9876)), "98.76%");
/// assert_eq!(format_metric(MetricUnit::Bytes, None), "---");
/// ```
pub fn format_metric(unit: MetricUnit, value: Option<f64>) -> String {
    let Some(value) = value else {
        return MISSING.to_string();
    };
    match unit {
        MetricUnit::NoUnit => style_number(value, "", true),
        MetricUnit::Bytes => style_number(value, "B/s", true),
        MetricUnit::RequestRate => style_number(value, " RPS", true),
        MetricUnit::SuccessRate => {
            if value.is_nan() {
                "N/A".to_string()
            } else {
                format!("{:.2}%", value * 100.0)
            }
        }
        MetricUnit::Latency => format_latency_secs(value / 1000.0),
    }
}

/// Format a latency given in seconds.
pub fn format_latency_secs(secs: f64) -> String {
    if secs.is_nan() {
        "N/A".to_string()
    } else if secs == 0.0 {
        "0 s".to_string()
    } else if secs < 0.001 {
        format!("{} µs", (secs * 1_000_000.0).round())
    } else if secs < 1.0 {
        format!("{} ms", (secs * 1000.0).round())
    } else {
        style_number(secs, " s", true)
    }
}

/// Round, abbreviate (`k`, `M`, `G`) and comma-group a number.
///
/// Without `truncate` large numbers are only rounded and grouped.
pub fn style_number(value: f64, unit: &str, truncate: bool) -> String {
    if value.is_nan() {
        return "N/A".to_string();
    }
    let (scaled, suffix, decimals) = if truncate && value > 999_999_999.0 {
        (value / 1_000_000_000.0, "G", 3)
    } else if truncate && value > 999_999.0 {
        (value / 1_000_000.0, "M", 3)
    } else if truncate && value > 999.0 {
        (value / 1000.0, "k", 3)
    } else if value > 999.0 {
        (value, "", 0)
    } else {
        (value, "", 2)
    };
    format!("{}{}{}", group_thousands(round_to(scaled, decimals)), suffix, unit)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn group_thousands(value: f64) -> String {
    let text = value.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
