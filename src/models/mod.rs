pub mod location;
pub mod prayer;

pub use location::{Country, COUNTRIES};
pub use prayer::{AdjustTarget, PrayerEntry, PrayerTable, PrayerType, TimeField};
