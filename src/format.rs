//! Presentation formatting boundary. Monetary figures round to whole
//! currency units here and only here; the engine keeps full precision.
//! Single locale per product decision (US-style grouping, `$` prefix).

/// Format a dollar amount with thousands separators and no cents,
/// e.g. `11440.4` → `"$11,440"`. Negative amounts keep the sign in front
/// of the symbol: `"-$1,600"`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$—".to_string();
    }
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let grouped = group_thousands(rounded.abs() as u64);
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format an hour figure as a rounded integer with a unit suffix,
/// e.g. `6.24` → `"6 hrs"`.
pub fn format_hours(hours: f64) -> String {
    if !hours.is_finite() {
        return "— hrs".to_string();
    }
    format!("{} hrs", hours.round() as i64)
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let chunk = n % 1_000;
        n /= 1_000;
        if n == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{chunk:03}"));
    }
    groups.reverse();
    groups.join(",")
}
