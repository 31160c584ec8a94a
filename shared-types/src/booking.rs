//! Booking wizard state: package choice, date and customer details, then the
//! payment step.

use crate::calendar::{select_date, AvailableDates, CalendarGrid, SelectionError};
use crate::packages::TourPackage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookingStep {
    #[default]
    ChoosePackage,
    DateAndDetails,
    Payment,
}

impl BookingStep {
    pub const ALL: [BookingStep; 3] = [
        BookingStep::ChoosePackage,
        BookingStep::DateAndDetails,
        BookingStep::Payment,
    ];

    pub fn number(self) -> u8 {
        match self {
            BookingStep::ChoosePackage => 1,
            BookingStep::DateAndDetails => 2,
            BookingStep::Payment => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    /// Parses a `step` query value such as `"2"`.
    pub fn from_query(value: &str) -> Option<Self> {
        value.trim().parse().ok().and_then(Self::from_number)
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingStep::ChoosePackage => "Choose Package",
            BookingStep::DateAndDetails => "Date & Details",
            BookingStep::Payment => "Payment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub package_id: Option<i32>,
    pub booking_date: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub num_people: u32,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            package_id: None,
            booking_date: None,
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            num_people: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Please select a package first.")]
    NoPackageSelected,
    #[error("Please pick a date.")]
    MissingDate,
    #[error("Please pick an available date.")]
    DateUnavailable(String),
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Number of people must be at least 1.")]
    InvalidPartySize,
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub package_id: i32,
    pub package_name: String,
    pub booking_date: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub num_people: u32,
    pub total_price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingWizard {
    pub step: BookingStep,
    pub package: Option<TourPackage>,
    pub form: BookingForm,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_step(step: BookingStep) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    pub fn select_package(&mut self, package: TourPackage) {
        self.form.package_id = Some(package.id);
        self.package = Some(package);
        self.step = BookingStep::DateAndDetails;
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            BookingStep::ChoosePackage | BookingStep::DateAndDetails => BookingStep::ChoosePackage,
            BookingStep::Payment => BookingStep::DateAndDetails,
        };
    }

    /// Record `iso_date` if the grid accepts it. A rejected date leaves the
    /// current choice untouched.
    pub fn choose_date(&mut self, iso_date: &str, grid: &CalendarGrid) -> Result<(), BookingError> {
        let selected = select_date(iso_date, grid)?;
        self.form.booking_date = Some(selected.into_string());
        Ok(())
    }

    pub fn total_price(&self) -> Option<u64> {
        self.package
            .as_ref()
            .map(|p| p.price_per_head.saturating_mul(u64::from(self.form.num_people)))
    }

    /// Validate the date and details step and move on to payment.
    pub fn submit_details(
        &mut self,
        available: &AvailableDates,
    ) -> Result<BookingSummary, BookingError> {
        let package = self.package.as_ref().ok_or(BookingError::NoPackageSelected)?;
        let date = self
            .form
            .booking_date
            .as_deref()
            .ok_or(BookingError::MissingDate)?;
        if !available.contains(date) {
            return Err(BookingError::DateUnavailable(date.to_string()));
        }

        let name = self.form.customer_name.trim();
        if name.is_empty() {
            return Err(BookingError::MissingName);
        }
        let email = self.form.customer_email.trim();
        if !is_plausible_email(email) {
            return Err(BookingError::InvalidEmail);
        }
        if self.form.num_people < 1 {
            return Err(BookingError::InvalidPartySize);
        }

        let phone = self.form.customer_phone.trim();
        let summary = BookingSummary {
            package_id: package.id,
            package_name: package.name.clone(),
            booking_date: date.to_string(),
            customer_name: name.to_string(),
            customer_email: email.to_string(),
            customer_phone: if phone.is_empty() { None } else { Some(phone.to_string()) },
            num_people: self.form.num_people,
            total_price: package
                .price_per_head
                .saturating_mul(u64::from(self.form.num_people)),
        };

        self.step = BookingStep::Payment;
        Ok(summary)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{build_grid, CalendarCursor};

    fn balabac() -> TourPackage {
        TourPackage {
            id: 1,
            name: "Balabac 4D3N".to_string(),
            location: "Balabac".to_string(),
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

    fn available() -> AvailableDates {
        ["2024-02-14", "2024-02-16"].into_iter().collect()
    }

    fn filled_wizard() -> BookingWizard {
        let mut wizard = BookingWizard::new();
        wizard.select_package(balabac());
        let grid = build_grid(CalendarCursor::new(2024, 1), &available());
        wizard.choose_date("2024-02-14", &grid).unwrap();
        wizard.form.customer_name = "Juan Dela Cruz".to_string();
        wizard.form.customer_email = "juan@example.com".to_string();
        wizard.form.num_people = 3;
        wizard
    }

    #[test]
    fn test_steps() {
        assert_eq!(BookingStep::default(), BookingStep::ChoosePackage);
        assert_eq!(BookingStep::from_number(3), Some(BookingStep::Payment));
        assert_eq!(BookingStep::from_number(4), None);
        assert_eq!(BookingStep::DateAndDetails.label(), "Date & Details");
    }

    #[test]
    fn test_step_from_query_seeds_wizard() {
        assert_eq!(BookingStep::from_query("2"), Some(BookingStep::DateAndDetails));
        assert_eq!(BookingStep::from_query(" 3 "), Some(BookingStep::Payment));
        assert_eq!(BookingStep::from_query("0"), None);
        assert_eq!(BookingStep::from_query("payment"), None);
        assert_eq!(BookingStep::from_query("-1"), None);

        let wizard = BookingWizard::at_step(BookingStep::from_query("2").unwrap_or_default());
        assert_eq!(wizard.step, BookingStep::DateAndDetails);
        assert!(wizard.package.is_none());

        let wizard = BookingWizard::at_step(BookingStep::from_query("9").unwrap_or_default());
        assert_eq!(wizard.step, BookingStep::ChoosePackage);
    }

    #[test]
    fn test_select_package_advances() {
        let mut wizard = BookingWizard::new();
        wizard.select_package(balabac());

        assert_eq!(wizard.step, BookingStep::DateAndDetails);
        assert_eq!(wizard.form.package_id, Some(1));

        wizard.back();
        assert_eq!(wizard.step, BookingStep::ChoosePackage);
        wizard.back();
        assert_eq!(wizard.step, BookingStep::ChoosePackage);
    }

    #[test]
    fn test_rejected_date_keeps_previous_choice() {
        let mut wizard = filled_wizard();
        let grid = build_grid(CalendarCursor::new(2024, 1), &available());

        let err = wizard.choose_date("2024-02-15", &grid).unwrap_err();
        assert!(matches!(err, BookingError::Selection(SelectionError::Unavailable(_))));
        assert_eq!(wizard.form.booking_date.as_deref(), Some("2024-02-14"));

        wizard.choose_date("2024-02-16", &grid).unwrap();
        assert_eq!(wizard.form.booking_date.as_deref(), Some("2024-02-16"));
    }

    #[test]
    fn test_submit_details() {
        let mut wizard = filled_wizard();
        let summary = wizard.submit_details(&available()).unwrap();

        assert_eq!(wizard.step, BookingStep::Payment);
        assert_eq!(summary.package_name, "Balabac 4D3N");
        assert_eq!(summary.booking_date, "2024-02-14");
        assert_eq!(summary.customer_phone, None);
        assert_eq!(summary.total_price, 51000);
        assert_eq!(wizard.total_price(), Some(51000));

        wizard.back();
        assert_eq!(wizard.step, BookingStep::DateAndDetails);
    }

    #[test]
    fn test_submit_guard_rejects_date_no_longer_available() {
        let mut wizard = filled_wizard();
        let remaining: AvailableDates = ["2024-02-16"].into_iter().collect();

        assert_eq!(
            wizard.submit_details(&remaining),
            Err(BookingError::DateUnavailable("2024-02-14".to_string()))
        );
        assert_eq!(wizard.step, BookingStep::DateAndDetails);
    }

    #[test]
    fn test_submit_guard_checks_fields() {
        let mut wizard = BookingWizard::new();
        assert_eq!(
            wizard.submit_details(&available()),
            Err(BookingError::NoPackageSelected)
        );

        wizard.select_package(balabac());
        assert_eq!(wizard.submit_details(&available()), Err(BookingError::MissingDate));

        let mut wizard = filled_wizard();
        wizard.form.customer_name = "   ".to_string();
        assert_eq!(wizard.submit_details(&available()), Err(BookingError::MissingName));

        let mut wizard = filled_wizard();
        wizard.form.customer_email = "juan.example.com".to_string();
        assert_eq!(wizard.submit_details(&available()), Err(BookingError::InvalidEmail));

        let mut wizard = filled_wizard();
        wizard.form.num_people = 0;
        assert_eq!(
            wizard.submit_details(&available()),
            Err(BookingError::InvalidPartySize)
        );
        assert_eq!(wizard.step, BookingStep::DateAndDetails);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BookingError::DateUnavailable("2024-02-15".to_string()).to_string(),
            "Please pick an available date."
        );
        let err: BookingError = SelectionError::Unavailable("2024-02-15".to_string()).into();
        assert_eq!(err.to_string(), "2024-02-15 is not available");
    }

    #[test]
    fn test_email_check() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("@b.co"));
        assert!(!is_plausible_email("a@bco"));
        assert!(!is_plausible_email("a@.co"));
    }
}
