use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::server;
use shared_types::TourPackage;

#[cfg(feature = "ssr")]
use crate::catalog::store::get_catalog;
#[cfg(feature = "ssr")]
use shared_types::calendar::parse_iso_date;

#[server]
pub async fn get_tour_packages() -> Result<Vec<TourPackage>, ServerFnError> {
    let packages = get_catalog().packages.clone();
    tracing::debug!(count = packages.len(), "Serving tour packages");
    Ok(packages)
}

#[server]
pub async fn get_tour_package(package_id: i32) -> Result<TourPackage, ServerFnError> {
    get_catalog()
        .package(package_id)
        .cloned()
        .ok_or_else(|| ServerFnError::new(format!("Package {} not found", package_id)))
}

/// Available booking dates, optionally limited to an inclusive
/// `YYYY-MM-DD` range.
#[server]
pub async fn get_available_dates(
    start: Option<String>,
    end: Option<String>,
) -> Result<Vec<String>, ServerFnError> {
    let start = parse_bound("start", start)?;
    let end = parse_bound("end", end)?;

    let dates = get_catalog().dates_between(start, end);
    tracing::debug!(?start, ?end, count = dates.len(), "Serving available dates");
    Ok(dates)
}

/// The server's local date. Pages seed "today" from here so the markup
/// rendered on the server matches what hydrates in the browser.
#[server]
pub async fn get_today() -> Result<NaiveDate, ServerFnError> {
    Ok(chrono::Local::now().date_naive())
}

#[cfg(feature = "ssr")]
fn parse_bound(label: &str, value: Option<String>) -> Result<Option<NaiveDate>, ServerFnError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_iso_date(&raw)
            .map(Some)
            .ok_or_else(|| ServerFnError::new(format!("Invalid {} date: {}", label, raw))),
    }
}
