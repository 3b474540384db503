//! Human-readable reporting helpers.

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

/// Formats a byte count as `B`, `KB` or `MB` with one decimal place.
pub fn format_file_size(size_bytes: u64) -> String {
    if size_bytes < KB {
        format!("{size_bytes} B")
    } else if size_bytes < MB {
        format!("{:.1} KB", size_bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", size_bytes as f64 / MB as f64)
    }
}

/// Percentage by which `subset` is smaller than `original`.
///
/// Returns `None` when `original` is zero.
pub fn size_reduction(original: u64, subset: u64) -> Option<f64> {
    (original > 0).then(|| (1.0 - subset as f64 / original as f64) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn test_format_kilobytes() {
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(format_file_size(MB + MB / 2), "1.5 MB");
    }

    #[test]
    fn test_size_reduction() {
        assert_eq!(size_reduction(0, 100), None);
        assert_eq!(size_reduction(200, 50), Some(75.0));
        assert_eq!(size_reduction(100, 100), Some(0.0));
    }
}
