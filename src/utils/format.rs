use anyhow::{anyhow, Result};
use chrono::NaiveDateTime;
use unicode_width::UnicodeWidthStr;

use crate::prayer_times::TimeOfDay;

/// "3:45 PM", or "--:--" when the time is unavailable
pub fn format_time_cell(time: Option<TimeOfDay>) -> String {
    time.map(|t| t.format_twelve_hour())
        .unwrap_or_else(|| "--:--".to_string())
}

/// "+5 min", "-10 min", "0 min"
pub fn format_signed_minutes(delta: i64) -> String {
    if delta > 0 {
        format!("+{} min", delta)
    } else {
        format!("{} min", delta)
    }
}

/// "10/18/2026, 02:30:05 PM"
pub fn format_clock(dt: NaiveDateTime) -> String {
    dt.format("%m/%d/%Y, %I:%M:%S %p").to_string()
}

/// Parse a clock override typed as "YYYY-MM-DD HH:MM" or "YYYY-MM-DD HH:MM:SS".
pub fn parse_clock_input(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M"))
        .map_err(|_| anyhow!("'{}' is not a date and time (YYYY-MM-DD HH:MM)", trimmed))
}

/// Right-pad to a terminal column width; Arabic names are not one column per byte.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use test_case::test_case;

    #[test_case(15, "+15 min")]
    #[test_case(-5, "-5 min")]
    #[test_case(0, "0 min")]
    fn signed_minutes(delta: i64, expected: &str) {
        assert_eq!(format_signed_minutes(delta), expected);
    }

    #[test]
    fn unavailable_time_renders_placeholder() {
        assert_eq!(format_time_cell(None), "--:--");
        assert_eq!(format_time_cell(Some(TimeOfDay::hm(0, 5))), "12:05 AM");
    }

    #[test]
    fn clock_reads_like_us_locale() {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        assert_eq!(format_clock(dt), "10/18/2026, 02:30:05 PM");
    }

    #[test]
    fn clock_input_accepts_optional_seconds() {
        let with = parse_clock_input("2026-10-18 09:15:30").unwrap();
        let without = parse_clock_input(" 2026-10-18 09:15 ").unwrap();
        assert_eq!(format_clock(with), "10/18/2026, 09:15:30 AM");
        assert_eq!(format_clock(without), "10/18/2026, 09:15:00 AM");
        assert!(parse_clock_input("tomorrow").is_err());
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_to_width("Asr", 6), "Asr   ");
        assert_eq!(pad_to_width("too long", 3), "too long");
    }
}
