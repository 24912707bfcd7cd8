//! Human-readable byte sizes.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary (1024) steps and one decimal place,
/// e.g. `1536` becomes `"1.5 KB"`. Zero and negative sizes render as `"0 B"`.
pub fn format_size(size: i64) -> String {
    if size <= 0 {
        return "0 B".to_string();
    }
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
