// Display formatting for KPI tiles (en-US conventions)

/// Whole US dollars with thousands separators, e.g. `$1,234,568`
pub fn format_currency(value: f64) -> String {
    let whole = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && whole != "0" { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&whole))
}

/// Thousands separators and at most three fraction digits, e.g. `12,345.5`
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let sign = if value < 0.0 && (whole != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };
    if fraction.is_empty() {
        format!("{}{}", sign, group_thousands(whole))
    } else {
        format!("{}{}.{}", sign, group_thousands(whole), fraction)
    }
}

pub fn format_percent(value: f64, digits: usize) -> String {
    format!("{:.*}%", digits, value)
}

/// Insert a comma every three digits of an unsigned integer string
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
