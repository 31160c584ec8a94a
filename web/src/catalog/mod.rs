pub mod builtin;
pub mod store;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared_types::calendar::{format_iso_date, parse_iso_date};
use shared_types::TourPackage;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog already initialized")]
    AlreadyInitialized,
}

/// Packages offered on the site and the dates open for booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub packages: Vec<TourPackage>,
    #[serde(default)]
    pub available_dates: Vec<String>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn package(&self, id: i32) -> Option<&TourPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// Available dates within the inclusive range, sorted and without
    /// duplicates. Entries that are not ISO dates are skipped.
    pub fn dates_between(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<String> {
        let mut dates: Vec<NaiveDate> = self
            .available_dates
            .iter()
            .filter_map(|d| parse_iso_date(d))
            .filter(|d| start.map_or(true, |s| *d >= s))
            .filter(|d| end.map_or(true, |e| *d <= e))
            .collect();
        dates.sort();
        dates.dedup();
        dates.into_iter().map(format_iso_date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG_JSON: &str = r#"{
        "packages": [
            {
                "id": 1,
                "name": "Balabac 4D3N",
                "location": "Balabac",
                "days": 4,
                "nights": 3,
                "min_pax": 2,
                "max_pax": 8,
                "price_per_head": 17000,
                "inclusions": ["Full board meals"]
            }
        ],
        "available_dates": ["2025-03-14", "2025-03-01", "bogus", "2025-04-02", "2025-03-14"]
    }"#;

    fn date(value: &str) -> NaiveDate {
        parse_iso_date(value).unwrap()
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.packages.len(), 1);
        assert_eq!(catalog.package(1).unwrap().name, "Balabac 4D3N");
        assert!(catalog.package(2).is_none());
        assert_eq!(catalog.available_dates.len(), 5);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = Catalog::from_json("{ \"packages\": 3 }").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_dates_between() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();

        assert_eq!(
            catalog.dates_between(None, None),
            vec!["2025-03-01", "2025-03-14", "2025-04-02"]
        );
        assert_eq!(
            catalog.dates_between(Some(date("2025-03-01")), Some(date("2025-03-31"))),
            vec!["2025-03-01", "2025-03-14"]
        );
        assert_eq!(
            catalog.dates_between(Some(date("2025-03-02")), None),
            vec!["2025-03-14", "2025-04-02"]
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.packages[0].location, "Balabac");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/definitely/not/here/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
