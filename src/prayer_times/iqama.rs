use crate::models::PrayerType;
use crate::prayer_times::arithmetic::TimeOfDay;

/// Offset applied to every prayer without its own entry.
pub const DEFAULT_IQAMA_OFFSET: i64 = 15;

/// Minutes between Adhan and Iqama.
pub fn iqama_offset(prayer: &PrayerType) -> i64 {
    match prayer {
        PrayerType::Fajr => 30,
        PrayerType::Maghrib | PrayerType::Isha => 10,
        PrayerType::Dhuhr | PrayerType::Asr => DEFAULT_IQAMA_OFFSET,
    }
}

/// Same table keyed by a raw identifier; anything unrecognised gets the default.
#[cfg(test)]
pub fn iqama_offset_for_name(name: &str) -> i64 {
    name.parse::<PrayerType>()
        .map(|p| iqama_offset(&p))
        .unwrap_or(DEFAULT_IQAMA_OFFSET)
}

pub fn compute_iqama(adhan: TimeOfDay, prayer: &PrayerType) -> TimeOfDay {
    adhan.add_minutes(iqama_offset(prayer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("05:30", PrayerType::Fajr, "06:00")]
    #[test_case("18:15", PrayerType::Maghrib, "18:25")]
    #[test_case("12:30", PrayerType::Dhuhr, "12:45")]
    #[test_case("15:45", PrayerType::Asr, "16:00")]
    #[test_case("23:55", PrayerType::Isha, "00:05")]
    fn iqama_follows_adhan(adhan: &str, prayer: PrayerType, expected: &str) {
        let adhan: TimeOfDay = adhan.parse().unwrap();
        assert_eq!(compute_iqama(adhan, &prayer).to_string(), expected);
    }

    #[test]
    fn unknown_identifiers_fall_back_to_default() {
        assert_eq!(iqama_offset_for_name("tahajjud"), DEFAULT_IQAMA_OFFSET);
        assert_eq!(iqama_offset_for_name("fajr"), 30);
        assert_eq!(iqama_offset_for_name("zuhr"), DEFAULT_IQAMA_OFFSET);
    }
}
