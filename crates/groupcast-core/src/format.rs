//! Human-readable formatting helpers.

const UNIT_BASE: u64 = 1024;
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with base-1024 scaling, e.g. `1536` -> `"1.5 KB"`.
///
/// The scaled value is rounded to two decimals and printed without trailing
/// zeros. Sizes beyond the largest unit stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // Integer unit selection avoids log() rounding at exact powers of 1024.
    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < SIZE_UNITS.len() && bytes / divisor >= UNIT_BASE {
        divisor *= UNIT_BASE;
        unit += 1;
    }

    let scaled = bytes as f64 / divisor as f64;
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}
