use super::Catalog;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use shared_types::calendar::format_iso_date;
use shared_types::TourPackage;

/// Departures run on these weekdays when no catalog file is configured.
pub const DEPARTURE_WEEKDAYS: [Weekday; 2] = [Weekday::Fri, Weekday::Sat];

pub const DEFAULT_DAYS_AHEAD: u64 = 90;

impl Catalog {
    /// Sample catalog used when `CATALOG_PATH` is not set.
    pub fn builtin(today: NaiveDate, days_ahead: u64) -> Self {
        Self {
            packages: sample_packages(),
            available_dates: departure_dates(today, days_ahead),
        }
    }
}

/// Every departure weekday from `today` through `today + days_ahead`.
pub fn departure_dates(today: NaiveDate, days_ahead: u64) -> Vec<String> {
    (0..=days_ahead)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .filter(|date| DEPARTURE_WEEKDAYS.contains(&date.weekday()))
        .map(format_iso_date)
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_packages() -> Vec<TourPackage> {
    vec![
        TourPackage {
            id: 1,
            name: "Balabac 4D3N".to_string(),
            location: "Balabac".to_string(),
            days: 4,
            nights: 3,
            min_pax: 2,
            max_pax: Some(8),
            price_per_head: 17000,
            description: Some(
                "Four days of sandbars and island camps in Palawan's far south.".to_string(),
            ),
            image_url: Some("https://images.unsplash.com/photo-1507525428034-b723cf961d3e".to_string()),
            inclusions: strings(&[
                "3 nights at Tatak Balabac Beach Camp (airconditioned twin-share)",
                "Full board meals (breakfast, lunch, dinner)",
                "Van + speedboat transfer (PPC ↔ Balabac)",
                "Island hopping, all island fees",
            ]),
            exclusions: strings(&[
                "International & domestic flights",
                "Hotel in Puerto Princesa",
                "Snorkeling gears",
                "Personal expenses & optional activities",
            ]),
            addons: strings(&[
                "Meal (cooked to order)",
                "Fresh lobster / fish picking",
                "Private romantic dinner at the beach",
            ]),
        },
        TourPackage {
            id: 2,
            name: "Balabac 3D2N".to_string(),
            location: "Balabac".to_string(),
            days: 3,
            nights: 2,
            min_pax: 2,
            max_pax: Some(10),
            price_per_head: 16000,
            description: None,
            image_url: Some("https://images.unsplash.com/photo-1506744038136-46273834b3fb".to_string()),
            inclusions: strings(&[
                "2 nights at Tatak Balabac Beach Camp (airconditioned twin-share)",
                "Full board meals",
                "Van + speedboat transfer (PPC ↔ Balabac)",
                "Island hopping, all island fees",
            ]),
            exclusions: strings(&[
                "International & domestic flights",
                "Hotel in Puerto Princesa",
                "Snorkeling gears",
            ]),
            addons: strings(&["Fresh lobster / fish picking"]),
        },
        TourPackage {
            id: 3,
            name: "El Nido Island Hopping".to_string(),
            location: "El Nido".to_string(),
            days: 1,
            nights: 0,
            min_pax: 1,
            max_pax: None,
            price_per_head: 1800,
            description: Some("Lagoons, beaches and a picnic lunch on Tour A.".to_string()),
            image_url: None,
            inclusions: strings(&["Boat transfer", "Picnic lunch", "Environmental fee"]),
            exclusions: strings(&["Kayak rental"]),
            addons: vec![],
        },
    ]
}
