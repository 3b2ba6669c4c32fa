//! Small formatting helpers shared by the engine's formula strings.

/// Format a unit count with K/M suffixes for formula strings.
pub fn fmt_units(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.0}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}

/// Format an integer with thousands separators (10000 -> "10,000").
pub fn fmt_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Round to cents for display. The engine keeps full precision internally.
pub fn to_money(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
