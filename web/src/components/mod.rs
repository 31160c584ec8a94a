pub mod availability_calendar;
pub mod error;
pub mod footer;
pub mod loading;
pub mod navbar;
pub mod package_card;
pub mod step_indicator;

// Re-export commonly used types
pub use availability_calendar::AvailabilityCalendar;
pub use footer::Footer;
pub use navbar::Navbar;
pub use package_card::PackageCard;
