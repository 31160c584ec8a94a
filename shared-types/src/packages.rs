use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TourPackage {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub days: u32,
    pub nights: u32,
    pub min_pax: u32,
    #[serde(default)]
    pub max_pax: Option<u32>,
    pub price_per_head: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub addons: Vec<String>,
}

impl TourPackage {
    /// e.g. "4D / 3N"
    pub fn duration_label(&self) -> String {
        format!("{}D / {}N", self.days, self.nights)
    }

    pub fn pax_label(&self) -> String {
        match self.max_pax {
            Some(max) => format!("Min {} · Max {} pax", self.min_pax, max),
            None => format!("Min {} pax", self.min_pax),
        }
    }

    pub fn price_label(&self) -> String {
        format_price(self.price_per_head)
    }

    /// Titled detail lists shown on the package card, skipping empty ones.
    pub fn detail_sections(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Inclusions", self.inclusions.as_slice()),
            ("Exclusions", self.exclusions.as_slice()),
            ("Add-ons", self.addons.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocationFilter {
    #[default]
    All,
    Location(String),
}

impl LocationFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            LocationFilter::All
        } else {
            LocationFilter::Location(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LocationFilter::All => Self::ALL_LABEL,
            LocationFilter::Location(location) => location.as_str(),
        }
    }

    pub fn matches(&self, package: &TourPackage) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Location(location) => &package.location == location,
        }
    }
}

/// Distinct package locations in catalog order.
pub fn locations(packages: &[TourPackage]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for package in packages {
        if !seen.contains(&package.location) {
            seen.push(package.location.clone());
        }
    }
    seen
}

pub fn filter_packages<'a>(
    packages: &'a [TourPackage],
    filter: &LocationFilter,
) -> Vec<&'a TourPackage> {
    packages.iter().filter(|p| filter.matches(p)).collect()
}

/// Peso amount with thousands separators, e.g. "₱17,000".
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₱{}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(id: i32, name: &str, location: &str) -> TourPackage {
        TourPackage {
            id,
            name: name.to_string(),
            location: location.to_string(),
            days: 4,
            nights: 3,
            min_pax: 2,
            max_pax: Some(8),
            price_per_head: 17000,
            description: None,
            image_url: None,
            inclusions: vec![],
            exclusions: vec![],
            addons: vec![],
        }
    }

    fn catalog() -> Vec<TourPackage> {
        vec![
            package(1, "Balabac 4D3N", "Balabac"),
            package(2, "El Nido Tour A", "El Nido"),
            package(3, "Balabac 3D2N", "Balabac"),
        ]
    }

    #[test]
    fn test_locations_in_catalog_order() {
        assert_eq!(locations(&catalog()), vec!["Balabac", "El Nido"]);
        assert!(locations(&[]).is_empty());
    }

    #[test]
    fn test_filter_packages() {
        let packages = catalog();

        assert_eq!(filter_packages(&packages, &LocationFilter::All).len(), 3);

        let balabac = filter_packages(&packages, &LocationFilter::from_label("Balabac"));
        let ids: Vec<i32> = balabac.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(filter_packages(&packages, &LocationFilter::from_label("Coron")).is_empty());
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(LocationFilter::from_label("All"), LocationFilter::All);
        assert_eq!(LocationFilter::from_label("Coron").label(), "Coron");
        assert_eq!(LocationFilter::default().label(), "All");
    }

    #[test]
    fn test_package_labels() {
        let mut p = package(1, "Balabac 4D3N", "Balabac");
        assert_eq!(p.duration_label(), "4D / 3N");
        assert_eq!(p.pax_label(), "Min 2 · Max 8 pax");
        assert_eq!(p.price_label(), "₱17,000");

        p.max_pax = None;
        assert_eq!(p.pax_label(), "Min 2 pax");
    }

    #[test]
    fn test_detail_sections_skip_empty_lists() {
        let mut p = package(1, "Balabac 4D3N", "Balabac");
        p.inclusions = vec!["Boat transfers".to_string()];
        p.exclusions = vec![];
        p.addons = vec!["Private tent".to_string(), "Drone shots".to_string()];

        let sections = p.detail_sections();
        let titles: Vec<&str> = sections.iter().map(|(title, _)| *title).collect();
        assert_eq!(titles, vec!["Inclusions", "Add-ons"]);
        assert_eq!(sections[1].1.len(), 2);

        p.inclusions.clear();
        p.addons.clear();
        assert!(p.detail_sections().is_empty());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "₱0");
        assert_eq!(format_price(999), "₱999");
        assert_eq!(format_price(1000), "₱1,000");
        assert_eq!(format_price(1234567), "₱1,234,567");
    }

    #[test]
    fn test_package_deserializes_with_optional_fields_missing() {
        let json = r#"{
            "id": 7,
            "name": "Coron Ultimate",
            "location": "Coron",
            "days": 3,
            "nights": 2,
            "min_pax": 1,
            "price_per_head": 9500
        }"#;
        let p: TourPackage = serde_json::from_str(json).unwrap();
        assert_eq!(p.max_pax, None);
        assert!(p.inclusions.is_empty());
        assert_eq!(p.duration_label(), "3D / 2N");
    }
}
