/// Format a computed result for the main readout (four decimal places).
pub fn format_result(value: f64) -> String {
    format!("{value:.4}")
}

/// Format a value in compact form for tight columns (e.g., 2.1M, 450.3K).
pub fn format_compact(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}{:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 10_000.0 {
        format!("{}{:.1}K", sign, abs_value / 1_000.0)
    } else if abs_value >= 100.0 {
        format!("{}{:.1}", sign, abs_value)
    } else {
        format!("{}{:.3}", sign, abs_value)
    }
}

/// Format a slider value (two decimal places).
pub fn format_param(value: f64) -> String {
    format!("{value:.2}")
}
