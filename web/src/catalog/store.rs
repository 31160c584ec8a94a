#[cfg(feature = "ssr")]
use super::builtin::DEFAULT_DAYS_AHEAD;
#[cfg(feature = "ssr")]
use super::{Catalog, CatalogError};
#[cfg(feature = "ssr")]
use std::sync::OnceLock;

#[cfg(feature = "ssr")]
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Load the catalog from `CATALOG_PATH`, or build the sample catalog with
/// `AVAILABILITY_DAYS_AHEAD` days of departures when the variable is unset.
#[cfg(feature = "ssr")]
pub fn init_catalog() -> Result<(), CatalogError> {
    let catalog = match std::env::var("CATALOG_PATH") {
        Ok(path) => {
            tracing::info!(%path, "Loading tour catalog");
            Catalog::load(&path)?
        }
        Err(_) => {
            let days_ahead = std::env::var("AVAILABILITY_DAYS_AHEAD")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(DEFAULT_DAYS_AHEAD);
            tracing::info!(days_ahead, "CATALOG_PATH not set, using built-in catalog");
            Catalog::builtin(chrono::Local::now().date_naive(), days_ahead)
        }
    };

    tracing::debug!(
        packages = catalog.packages.len(),
        available_dates = catalog.available_dates.len(),
        "Catalog ready"
    );

    CATALOG
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInitialized)
}

#[cfg(feature = "ssr")]
pub fn get_catalog() -> &'static Catalog {
    CATALOG
        .get()
        .expect("Catalog not initialized. Call init_catalog() first.")
}
