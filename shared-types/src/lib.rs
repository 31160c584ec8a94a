pub mod booking;
pub mod calendar;
pub mod packages;

pub use booking::{BookingError, BookingForm, BookingStep, BookingSummary, BookingWizard};
pub use calendar::{
    build_grid, go_to_next_month, go_to_previous_month, select_date, AvailableDates,
    CalendarCursor, CalendarDay, CalendarGrid, DayCell, SelectedDate, SelectionError, WeekRow,
};
pub use packages::{filter_packages, locations, LocationFilter, TourPackage};
