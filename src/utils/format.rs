use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Human readable byte count, e.g. `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", round2(value), UNITS[unit])
}

/// Rounds to two decimals; `Display` then drops trailing zeros.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage label as shown next to the confidence bar.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Server timestamp in the viewer's local time.
///
/// RFC 3339 strings are converted; offset-less ISO strings are taken as local
/// time already. Anything else is returned untouched.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return local.format(DISPLAY).to_string();
            }
            return naive.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(16 * 1024 * 1024), "16 MB");
    }

    #[test]
    fn rounding_drops_trailing_zeros() {
        assert_eq!(round2(8.2049).to_string(), "8.2");
        assert_eq!(round2(4.306).to_string(), "4.31");
        assert_eq!(format_percent(87.5), "87.5%");
    }

    #[test]
    fn naive_iso_timestamp_keeps_wall_clock() {
        assert_eq!(format_timestamp("2025-03-01T10:15:30.123456"), "2025-03-01 10:15:30");
    }

    #[test]
    fn unparseable_timestamp_is_passed_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
