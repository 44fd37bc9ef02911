use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info, warn};

use crate::models::location::find_country;
use crate::models::{AdjustTarget, Country, PrayerEntry, PrayerTable, PrayerType, TimeField};
use crate::prayer_times::api::{DayTimings, FetchError, TimingsRequest};
use crate::prayer_times::arithmetic::TimeOfDay;
use crate::prayer_times::iqama::compute_iqama;
use crate::prayer_times::normalize::normalize;

/// Identifies one fetch. Only the newest token's result is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchToken(u64);

#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub token: FetchToken,
    pub request: TimingsRequest,
}

#[derive(Debug)]
pub enum FetchDisposition {
    Applied,
    Failed(FetchError),
    /// A newer fetch was started first; the result was dropped untouched.
    Superseded,
}

/// Location selection, the current prayer table and the single live fetch.
pub struct LocationSession {
    countries: &'static [Country],
    method: u8,
    selected_country: String,
    selected_city: String,
    cities: &'static [&'static str],
    table: PrayerTable,
    loading: bool,
    last_fetched: Option<String>,
    next_token: u64,
    live: Option<FetchToken>,
}

impl LocationSession {
    pub fn new(countries: &'static [Country], country: &str, city: &str, method: u8) -> Self {
        let found = find_country(countries, country);
        let cities = found.map(|c| c.cities).unwrap_or(&[]);
        Self {
            countries,
            method,
            selected_country: found.map_or(country, |c| c.code).to_string(),
            selected_city: city.to_string(),
            cities,
            table: PrayerTable::default(),
            loading: false,
            last_fetched: None,
            next_token: 0,
            live: None,
        }
    }

    pub fn countries(&self) -> &'static [Country] {
        self.countries
    }

    pub fn selected_country(&self) -> &str {
        &self.selected_country
    }

    pub fn current_country(&self) -> Option<&'static Country> {
        find_country(self.countries, &self.selected_country)
    }

    pub fn selected_city(&self) -> &str {
        &self.selected_city
    }

    pub fn cities(&self) -> &'static [&'static str] {
        self.cities
    }

    pub fn table(&self) -> &PrayerTable {
        &self.table
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_fetched(&self) -> Option<&str> {
        self.last_fetched.as_deref()
    }

    /// Switch country and reset the city to that country's first one. An unknown
    /// code leaves an empty city list and an empty city.
    /// Returns true when the location changed and a fetch should follow.
    pub fn select_country(&mut self, code: &str) -> bool {
        let (code, cities) = match find_country(self.countries, code) {
            Some(country) => (country.code, country.cities),
            None => {
                warn!("Unknown country code '{}'", code);
                (code, &[][..])
            }
        };
        let city = cities.first().copied().unwrap_or_default();
        let changed = self.selected_country != code || self.selected_city != city;

        self.selected_country = code.to_string();
        self.cities = cities;
        self.selected_city = city.to_string();
        changed
    }

    /// Membership in `cities()` is not checked.
    pub fn select_city(&mut self, name: &str) -> bool {
        let changed = self.selected_city != name;
        self.selected_city = name.to_string();
        changed
    }

    /// Start a fetch for the current location. Any earlier fetch is superseded:
    /// its result will come back as `FetchDisposition::Superseded`.
    pub fn begin_fetch(&mut self, today: NaiveDate) -> FetchTicket {
        if let Some(previous) = self.live {
            debug!("Superseding fetch {:?}", previous);
        }
        self.next_token += 1;
        let token = FetchToken(self.next_token);
        self.live = Some(token);
        self.loading = true;

        info!(
            "Fetching prayer times for {}, {} on {}",
            self.selected_city, self.selected_country, today
        );

        FetchTicket {
            token,
            request: TimingsRequest {
                date: today,
                city: self.selected_city.clone(),
                country: self.selected_country.clone(),
                method: self.method,
            },
        }
    }

    pub fn complete_fetch(
        &mut self,
        token: FetchToken,
        outcome: Result<DayTimings, FetchError>,
        now: NaiveDateTime,
    ) -> FetchDisposition {
        if self.live != Some(token) {
            debug!("Discarding result of superseded fetch {:?}", token);
            return FetchDisposition::Superseded;
        }
        self.live = None;
        self.loading = false;

        match outcome {
            Ok(timings) => {
                self.table = table_from_timings(&timings);
                self.last_fetched = Some(now.format("%B %-d, %I:%M %p").to_string());
                info!("Prayer times updated for {}", self.selected_city);
                FetchDisposition::Applied
            }
            Err(e) => {
                warn!("Error fetching prayer times: {}", e);
                FetchDisposition::Failed(e)
            }
        }
    }

    pub fn edit_time(&mut self, prayer: PrayerType, field: TimeField, value: TimeOfDay) {
        self.table.get_mut(prayer).set(field, Some(value));
    }

    /// Shift the chosen column(s) of every prayer by `delta` minutes. Unavailable
    /// times stay unavailable. Returns false, touching nothing, when `delta` is 0.
    pub fn apply_bulk_adjustment(&mut self, delta: i64, target: AdjustTarget) -> bool {
        if delta == 0 {
            return false;
        }

        let mut adjusted = self.table;
        for prayer in PrayerType::ALL {
            let entry = adjusted.get_mut(prayer);
            for field in [TimeField::Adhan, TimeField::Iqama] {
                if target.includes(field) {
                    let shifted = entry.get(field).map(|t| t.add_minutes(delta));
                    entry.set(field, shifted);
                }
            }
        }
        self.table = adjusted;
        true
    }
}

/// Build a fresh table from raw timings. A timing that does not normalize to a
/// valid time leaves its entry unavailable instead of failing the whole table.
pub fn table_from_timings(timings: &DayTimings) -> PrayerTable {
    let mut table = PrayerTable::empty();
    for prayer in PrayerType::ALL {
        let raw = timings.get(prayer);
        let normalized = normalize(raw);
        if normalized.is_empty() {
            warn!("No time found in {} timing '{}'", prayer, raw);
            continue;
        }
        match normalized.parse::<TimeOfDay>() {
            Ok(adhan) => {
                *table.get_mut(prayer) = PrayerEntry::new(adhan, compute_iqama(adhan, &prayer));
            }
            Err(e) => warn!("Skipping {}: {}", prayer, e),
        }
    }
    table
}
