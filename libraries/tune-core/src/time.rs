//! Display helpers for playback positions

/// Format seconds as `mm:ss`
///
/// Minutes are zero-padded to two digits and keep growing past 99.
/// Negative and non-finite inputs render as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }

    let whole = seconds.floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(9.9), "00:09");
        assert_eq!(format_time(61.0), "01:01");
        assert_eq!(format_time(213.4), "03:33");
        assert_eq!(format_time(6000.0), "100:00");
    }

    #[test]
    fn garbage_renders_as_zero() {
        assert_eq!(format_time(-3.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
    }
}
