//! Human-readable byte counts for console output.

const UNITS: [&str; 8] = ["", "K", "M", "G", "T", "P", "E", "Z"];
const LAST_UNIT: &str = "Y";

/// Formats `num` with the first binary prefix whose magnitude, rounded to
/// one decimal place, is below 1024, followed by `suffix`.
///
/// `file_size(1536, "B")` → `"1.5KB"`; `file_size(0, "B")` → `"0.0B"`.
pub fn file_size(num: u64, suffix: &str) -> String {
    let mut value = num as f64;
    for unit in UNITS {
        let rounded = format!("{:.1}", value);
        // 1023.95.. rounds up to "1024.0"; that belongs to the next unit.
        if rounded.parse::<f64>().map_or(false, |r| r < 1024.0) {
            return format!("{}{}{}", rounded, unit, suffix);
        }
        value /= 1024.0;
    }
    format!("{:.1}{}{}", value, LAST_UNIT, suffix)
}

/// `file_size` with the `B` suffix.
pub fn bytes(num: u64) -> String {
    file_size(num, "B")
}
