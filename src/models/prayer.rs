use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::prayer_times::arithmetic::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerType {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerType {
    /// Display order. Also the slot order inside `PrayerTable`.
    pub const ALL: [PrayerType; 5] = [
        PrayerType::Fajr,
        PrayerType::Dhuhr,
        PrayerType::Asr,
        PrayerType::Maghrib,
        PrayerType::Isha,
    ];

    fn index(&self) -> usize {
        match self {
            PrayerType::Fajr => 0,
            PrayerType::Dhuhr => 1,
            PrayerType::Asr => 2,
            PrayerType::Maghrib => 3,
            PrayerType::Isha => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "fajr",
            PrayerType::Dhuhr => "dhuhr",
            PrayerType::Asr => "asr",
            PrayerType::Maghrib => "maghrib",
            PrayerType::Isha => "isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "Fajr",
            PrayerType::Dhuhr => "Dhuhr",
            PrayerType::Asr => "Asr",
            PrayerType::Maghrib => "Maghrib",
            PrayerType::Isha => "Isha",
        }
    }

    pub fn arabic_name(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "الفجر",
            PrayerType::Dhuhr => "الظهر",
            PrayerType::Asr => "العصر",
            PrayerType::Maghrib => "المغرب",
            PrayerType::Isha => "العشاء",
        }
    }
}

impl std::fmt::Display for PrayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerType::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerType::Dhuhr),
            "asr" => Ok(PrayerType::Asr),
            "maghrib" => Ok(PrayerType::Maghrib),
            "isha" => Ok(PrayerType::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeField {
    Adhan,
    Iqama,
}

impl TimeField {
    pub fn label(&self) -> &'static str {
        match self {
            TimeField::Adhan => "Adhan",
            TimeField::Iqama => "Iqama",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            TimeField::Adhan => TimeField::Iqama,
            TimeField::Iqama => TimeField::Adhan,
        }
    }
}

/// Which column a bulk adjustment shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AdjustTarget {
    Adhan,
    Iqama,
    #[default]
    Both,
}

impl AdjustTarget {
    pub fn includes(&self, field: TimeField) -> bool {
        matches!(
            (self, field),
            (AdjustTarget::Both, _)
                | (AdjustTarget::Adhan, TimeField::Adhan)
                | (AdjustTarget::Iqama, TimeField::Iqama)
        )
    }

    pub fn next(self) -> Self {
        match self {
            AdjustTarget::Adhan => AdjustTarget::Iqama,
            AdjustTarget::Iqama => AdjustTarget::Both,
            AdjustTarget::Both => AdjustTarget::Adhan,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdjustTarget::Adhan => "Adhan only",
            AdjustTarget::Iqama => "Iqama only",
            AdjustTarget::Both => "Both",
        }
    }
}

/// `None` marks a time the upstream service did not supply in a usable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrayerEntry {
    pub adhan: Option<TimeOfDay>,
    pub iqama: Option<TimeOfDay>,
}

impl PrayerEntry {
    pub const fn new(adhan: TimeOfDay, iqama: TimeOfDay) -> Self {
        Self {
            adhan: Some(adhan),
            iqama: Some(iqama),
        }
    }

    pub fn get(&self, field: TimeField) -> Option<TimeOfDay> {
        match field {
            TimeField::Adhan => self.adhan,
            TimeField::Iqama => self.iqama,
        }
    }

    pub fn set(&mut self, field: TimeField, value: Option<TimeOfDay>) {
        match field {
            TimeField::Adhan => self.adhan = value,
            TimeField::Iqama => self.iqama = value,
        }
    }
}

/// One entry per prayer, always all five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerTable {
    entries: [PrayerEntry; 5],
}

const DEFAULT_ENTRIES: [PrayerEntry; 5] = [
    PrayerEntry::new(TimeOfDay::hm(5, 30), TimeOfDay::hm(5, 45)),
    PrayerEntry::new(TimeOfDay::hm(12, 30), TimeOfDay::hm(12, 45)),
    PrayerEntry::new(TimeOfDay::hm(15, 45), TimeOfDay::hm(16, 0)),
    PrayerEntry::new(TimeOfDay::hm(18, 15), TimeOfDay::hm(18, 20)),
    PrayerEntry::new(TimeOfDay::hm(19, 45), TimeOfDay::hm(20, 0)),
];

impl Default for PrayerTable {
    /// The board is never empty: these show until the first fetch lands.
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES,
        }
    }
}

impl PrayerTable {
    pub fn empty() -> Self {
        Self {
            entries: [PrayerEntry::default(); 5],
        }
    }

    pub fn get(&self, prayer: PrayerType) -> &PrayerEntry {
        &self.entries[prayer.index()]
    }

    pub fn get_mut(&mut self, prayer: PrayerType) -> &mut PrayerEntry {
        &mut self.entries[prayer.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerType, &PrayerEntry)> {
        PrayerType::ALL.into_iter().zip(self.entries.iter())
    }
}

impl Serialize for PrayerTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prayer, entry) in self.iter() {
            map.serialize_entry(prayer.as_str(), entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_table_matches_board_defaults() {
        let table = PrayerTable::default();
        let fajr = table.get(PrayerType::Fajr);
        assert_eq!(fajr.adhan.unwrap().to_string(), "05:30");
        assert_eq!(fajr.iqama.unwrap().to_string(), "05:45");
        assert_eq!(table.get(PrayerType::Isha).iqama.unwrap().to_string(), "20:00");
    }

    #[test]
    fn iteration_follows_display_order() {
        let order: Vec<_> = PrayerTable::default().iter().map(|(p, _)| p).collect();
        assert_eq!(order, PrayerType::ALL.to_vec());
    }

    #[test]
    fn parses_alternate_spellings() {
        assert_eq!("Zuhr".parse::<PrayerType>().unwrap(), PrayerType::Dhuhr);
        assert_eq!("ISHA".parse::<PrayerType>().unwrap(), PrayerType::Isha);
        assert!("witr".parse::<PrayerType>().is_err());
    }

    #[test]
    fn adjust_target_coverage() {
        assert!(AdjustTarget::Both.includes(TimeField::Adhan));
        assert!(AdjustTarget::Both.includes(TimeField::Iqama));
        assert!(AdjustTarget::Adhan.includes(TimeField::Adhan));
        assert!(!AdjustTarget::Adhan.includes(TimeField::Iqama));
        assert!(!AdjustTarget::Iqama.includes(TimeField::Adhan));
        assert_eq!(AdjustTarget::Both.next(), AdjustTarget::Adhan);
    }

    #[test]
    fn serializes_keyed_by_identifier() {
        let mut table = PrayerTable::empty();
        table.get_mut(PrayerType::Asr).adhan = Some(TimeOfDay::hm(15, 1));
        let json = serde_json::to_value(table).unwrap();
        assert_eq!(json["asr"]["adhan"], "15:01");
        assert_eq!(json["fajr"]["iqama"], serde_json::Value::Null);
    }
}
