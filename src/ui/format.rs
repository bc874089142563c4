//! Number formatting for tiles, legends and bar labels

/// `23541` -> `"23,541"`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Value with fixed precision and unit suffix; whole numbers get separators
pub fn value(value: f64, precision: usize, unit: &str) -> String {
    let body = if precision == 0 && value >= 0.0 {
        thousands(value.round() as u64)
    } else {
        format!("{value:.precision$}")
    };
    if unit == "k$" {
        format!("${body}k")
    } else {
        format!("{body}{unit}")
    }
}

/// Signed percentage change, `+5%` / `-8%`
pub fn delta(pct: i32) -> String {
    if pct > 0 {
        format!("+{pct}%")
    } else {
        format!("{pct}%")
    }
}

/// Decimals needed to show every value of a series faithfully (0 or 1)
pub fn precision_for(values: &[f64]) -> usize {
    if values.iter().all(|v| v.fract() == 0.0) {
        0
    } else {
        1
    }
}
