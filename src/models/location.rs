#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

pub const DEFAULT_COUNTRY: &str = "PS";
pub const DEFAULT_CITY: &str = "Ramallah";

pub static COUNTRIES: &[Country] = &[
    Country {
        code: "PS",
        name: "فلسطين - Palestine",
        cities: &["Ramallah", "Jerusalem", "Gaza", "Hebron", "Nablus", "Bethlehem"],
    },
    Country {
        code: "SA",
        name: "السعودية - Saudi Arabia",
        cities: &["Mecca", "Medina", "Riyadh", "Jeddah", "Dammam"],
    },
    Country {
        code: "AE",
        name: "الإمارات - UAE",
        cities: &["Dubai", "Abu Dhabi", "Sharjah", "Ajman"],
    },
    Country {
        code: "EG",
        name: "مصر - Egypt",
        cities: &["Cairo", "Alexandria", "Giza", "Luxor"],
    },
    Country {
        code: "JO",
        name: "الأردن - Jordan",
        cities: &["Amman", "Irbid", "Zarqa", "Aqaba"],
    },
    Country {
        code: "LB",
        name: "لبنان - Lebanon",
        cities: &["Beirut", "Tripoli", "Sidon", "Tyre"],
    },
    Country {
        code: "SY",
        name: "سوريا - Syria",
        cities: &["Damascus", "Aleppo", "Homs", "Latakia"],
    },
    Country {
        code: "IQ",
        name: "العراق - Iraq",
        cities: &["Baghdad", "Basra", "Mosul", "Erbil"],
    },
    Country {
        code: "KW",
        name: "الكويت - Kuwait",
        cities: &["Kuwait City", "Hawalli", "Salmiya"],
    },
    Country {
        code: "QA",
        name: "قطر - Qatar",
        cities: &["Doha", "Al Rayyan", "Al Wakrah"],
    },
    Country {
        code: "BH",
        name: "البحرين - Bahrain",
        cities: &["Manama", "Muharraq", "Riffa"],
    },
    Country {
        code: "OM",
        name: "عمان - Oman",
        cities: &["Muscat", "Salalah", "Sohar"],
    },
    Country {
        code: "YE",
        name: "اليمن - Yemen",
        cities: &["Sanaa", "Aden", "Taiz"],
    },
    Country {
        code: "MA",
        name: "المغرب - Morocco",
        cities: &["Casablanca", "Rabat", "Marrakech", "Fes"],
    },
    Country {
        code: "DZ",
        name: "الجزائر - Algeria",
        cities: &["Algiers", "Oran", "Constantine"],
    },
    Country {
        code: "TN",
        name: "تونس - Tunisia",
        cities: &["Tunis", "Sfax", "Sousse"],
    },
    Country {
        code: "LY",
        name: "ليبيا - Libya",
        cities: &["Tripoli", "Benghazi", "Misrata"],
    },
    Country {
        code: "TR",
        name: "تركيا - Turkey",
        cities: &["Istanbul", "Ankara", "Izmir", "Bursa"],
    },
    Country {
        code: "US",
        name: "USA",
        cities: &["New York", "Los Angeles", "Chicago", "Houston", "Detroit"],
    },
    Country {
        code: "GB",
        name: "UK",
        cities: &["London", "Manchester", "Birmingham", "Leeds"],
    },
    Country {
        code: "FR",
        name: "France",
        cities: &["Paris", "Marseille", "Lyon", "Toulouse"],
    },
    Country {
        code: "DE",
        name: "Germany",
        cities: &["Berlin", "Munich", "Frankfurt", "Hamburg"],
    },
    Country {
        code: "MY",
        name: "Malaysia",
        cities: &["Kuala Lumpur", "Penang", "Johor Bahru"],
    },
    Country {
        code: "ID",
        name: "Indonesia",
        cities: &["Jakarta", "Surabaya", "Bandung", "Medan"],
    },
    Country {
        code: "PK",
        name: "Pakistan",
        cities: &["Karachi", "Lahore", "Islamabad", "Rawalpindi"],
    },
];

pub fn find_country<'a>(countries: &'a [Country], code: &str) -> Option<&'a Country> {
    countries.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_country_has_cities() {
        for country in COUNTRIES {
            assert!(!country.cities.is_empty(), "{} has no cities", country.code);
        }
    }

    #[test]
    fn default_location_is_listed() {
        let country = find_country(COUNTRIES, DEFAULT_COUNTRY).unwrap();
        assert!(country.cities.contains(&DEFAULT_CITY));
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find_country(COUNTRIES, "eg").unwrap().cities[0], "Cairo");
        assert!(find_country(COUNTRIES, "XX").is_none());
    }
}
