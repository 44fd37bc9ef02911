use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("malformed time '{0}', expected HH:MM")]
    MalformedTime(String),
}

/// A wall-clock time with minute precision. Always in range: hour 0..=23, minute 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Builds a time from literal parts. Out-of-range parts panic, which turns a
    /// bad hardcoded default into a compile error when used in a const.
    pub const fn hm(hour: u8, minute: u8) -> Self {
        assert!(hour < 24, "hour out of range");
        assert!(minute < 60, "minute out of range");
        Self { hour, minute }
    }

    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    /// Euclidean reduction, so negative and multi-day totals land inside the day.
    pub fn from_total_minutes(total: i64) -> Self {
        let wrapped = total.rem_euclid(MINUTES_PER_DAY);
        Self {
            hour: (wrapped / 60) as u8,
            minute: (wrapped % 60) as u8,
        }
    }

    /// Any delta works: it is reduced to one day before it touches the time.
    pub fn add_minutes(self, delta: i64) -> Self {
        Self::from_total_minutes(self.minutes_since_midnight() + delta.rem_euclid(MINUTES_PER_DAY))
    }

    /// "3:45 PM" style: no padding on the hour, midnight and noon read as 12.
    pub fn format_twelve_hour(&self) -> String {
        let period = if self.hour < 12 { "AM" } else { "PM" };
        let hour12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour12, self.minute, period)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Accepts `H:MM`, `HH:MM` and the lenient one-digit minute `HH:M`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::MalformedTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(malformed)?;

        let is_part = |p: &str| (1..=2).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_digit());
        if !is_part(h) || !is_part(m) {
            return Err(malformed());
        }

        let hour: u8 = h.parse().map_err(|_| malformed())?;
        let minute: u8 = m.parse().map_err(|_| malformed())?;
        Self::new(hour, minute).ok_or_else(malformed)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// DD-MM-YYYY, the date format the timings endpoint expects in its path.
pub fn format_date_dmy(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("23:50", 20, "00:10" ; "wraps past midnight")]
    #[test_case("00:05", -10, "23:55" ; "wraps before midnight")]
    #[test_case("12:00", -1500, "11:00" ; "multi day negative delta")]
    #[test_case("05:30", 2880, "05:30" ; "two full days")]
    #[test_case("09:59", 1, "10:00" ; "minute carries into hour")]
    #[test_case("5:7", 0, "05:07" ; "lenient single digits")]
    #[test_case("05:30", i64::MAX, "23:37" ; "largest delta")]
    #[test_case("05:30", i64::MIN, "11:22" ; "smallest delta")]
    fn add_minutes_cases(input: &str, delta: i64, expected: &str) {
        let t: TimeOfDay = input.parse().unwrap();
        assert_eq!(t.add_minutes(delta).to_string(), expected);
    }

    #[test]
    fn add_then_subtract_round_trips() {
        for total in (0..MINUTES_PER_DAY).step_by(37) {
            let t = TimeOfDay::from_total_minutes(total);
            for d in [-3000, -1441, -59, -1, 0, 1, 61, 1439, 5000] {
                assert_eq!(t.add_minutes(d).add_minutes(-d), t);
            }
        }
    }

    #[test]
    fn full_day_is_identity() {
        let t = TimeOfDay::hm(18, 15);
        assert_eq!(t.add_minutes(MINUTES_PER_DAY), t);
        assert_eq!(t.add_minutes(-MINUTES_PER_DAY), t);
    }

    #[test_case("00:00", "12:00 AM")]
    #[test_case("12:00", "12:00 PM")]
    #[test_case("15:45", "3:45 PM")]
    #[test_case("11:05", "11:05 AM")]
    #[test_case("23:59", "11:59 PM")]
    fn twelve_hour_format(input: &str, expected: &str) {
        let t: TimeOfDay = input.parse().unwrap();
        assert_eq!(t.format_twelve_hour(), expected);
    }

    #[test_case("" ; "empty")]
    #[test_case("1230" ; "missing colon")]
    #[test_case("ab:cd" ; "non numeric")]
    #[test_case("24:00" ; "hour out of range")]
    #[test_case("10:60" ; "minute out of range")]
    #[test_case("100:00" ; "three digit hour")]
    fn malformed_times_are_rejected(input: &str) {
        assert_eq!(
            input.parse::<TimeOfDay>(),
            Err(TimeError::MalformedTime(input.to_string()))
        );
    }

    #[test]
    fn formats_date_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date_dmy(date), "07-03-2024");
    }

    #[test]
    fn serializes_as_canonical_string() {
        let t = TimeOfDay::hm(5, 0);
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"05:00\"");
        let back: TimeOfDay = serde_json::from_str("\"5:00\"").unwrap();
        assert_eq!(back, t);
    }
}
