//! Availability calendar: month grid construction, month navigation and
//! date selection.
//!
//! Everything here is a pure function of its inputs. The grid is rebuilt by
//! the caller whenever the cursor or the set of available dates changes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a strict `YYYY-MM-DD` string.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// The month currently shown by the calendar. `month0` is zero based
/// (0 = January, 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarCursor {
    pub year: i32,
    pub month0: u32,
}

impl CalendarCursor {
    /// Builds a cursor, folding a `month0` past December into later years.
    /// Year arithmetic wraps at the `i32` limits, like month navigation.
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year: year.wrapping_add((month0 / 12) as i32),
            month0: month0 % 12,
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Cursor for the month of `initial` when it parses, otherwise the month
    /// of `today`.
    pub fn from_initial(initial: Option<&str>, today: NaiveDate) -> Self {
        initial
            .and_then(parse_iso_date)
            .map(Self::containing)
            .unwrap_or_else(|| Self::containing(today))
    }

    /// The year wraps at `i32::MIN`; such months have no grid anyway.
    pub fn previous_month(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year.wrapping_sub(1),
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    /// The year wraps at `i32::MAX`; such months have no grid anyway.
    pub fn next_month(self) -> Self {
        if self.month0 >= 11 {
            Self {
                year: self.year.wrapping_add(1),
                month0: 0,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// One-based month number as used in ISO dates.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month0 % 12) as usize]
    }

    /// e.g. "February 2024"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), 1)
    }

    /// Day count of the month, taken from the day before the first of the
    /// next month.
    pub fn days_in_month(&self) -> Option<u32> {
        let next = self.next_month();
        next.first_day()?.pred_opt().map(|last| last.day())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }
}

pub fn go_to_previous_month(cursor: CalendarCursor) -> CalendarCursor {
    cursor.previous_month()
}

pub fn go_to_next_month(cursor: CalendarCursor) -> CalendarCursor {
    cursor.next_month()
}

/// Dates that can be booked. Entries that are not valid ISO dates are kept
/// but can never match a calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableDates(HashSet<String>);

impl AvailableDates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, iso_date: &str) -> bool {
        self.0.contains(iso_date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AvailableDates {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub day_of_month: u32,
    pub iso_date: String,
    pub is_available: bool,
}

impl CalendarDay {
    pub fn is_selected(&self, selected: Option<&str>) -> bool {
        selected == Some(self.iso_date.as_str())
    }
}

/// `None` is a blank padding cell.
pub type DayCell = Option<CalendarDay>;

/// Seven cells, Monday first.
pub type WeekRow = [DayCell; 7];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub cursor: CalendarCursor,
    pub weeks: Vec<WeekRow>,
}

impl CalendarGrid {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.cells().filter_map(Option::as_ref)
    }

    pub fn find(&self, iso_date: &str) -> Option<&CalendarDay> {
        self.days().find(|day| day.iso_date == iso_date)
    }

    pub fn row_count(&self) -> usize {
        self.weeks.len()
    }
}

/// Lay out the month under `cursor` as Monday-first week rows.
///
/// Day 1 is preceded by as many blank cells as its Monday-based weekday
/// index, and the last week is padded with blanks to seven cells. Months the
/// date library cannot represent yield a grid with no rows.
pub fn build_grid(cursor: CalendarCursor, available: &AvailableDates) -> CalendarGrid {
    let Some((first, last_day)) = cursor
        .first_day()
        .and_then(|first| Some((first, cursor.days_in_month()?)))
    else {
        return CalendarGrid {
            cursor,
            weeks: Vec::new(),
        };
    };

    let leading = first.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<DayCell> = Vec::with_capacity(42);
    cells.resize(leading, None);

    for day in 1..=last_day {
        let iso_date = format!("{:04}-{:02}-{:02}", cursor.year, cursor.month(), day);
        let is_available = available.contains(&iso_date);
        cells.push(Some(CalendarDay {
            day_of_month: day,
            iso_date,
            is_available,
        }));
    }

    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    let mut weeks: Vec<WeekRow> = Vec::with_capacity(cells.len() / 7);
    let mut remaining = cells.into_iter();
    while remaining.len() > 0 {
        weeks.push(std::array::from_fn(|_| remaining.next().flatten()));
    }

    CalendarGrid { cursor, weeks }
}

/// A date that was accepted by [`select_date`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedDate(String);

impl SelectedDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SelectedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{date} is not shown in {month}")]
    NotInGrid { date: String, month: String },
    #[error("{0} is not available")]
    Unavailable(String),
}

/// Accept `iso_date` only when the grid shows it as an available day.
pub fn select_date(iso_date: &str, grid: &CalendarGrid) -> Result<SelectedDate, SelectionError> {
    match grid.find(iso_date) {
        Some(day) if day.is_available => Ok(SelectedDate(day.iso_date.clone())),
        Some(day) => Err(SelectionError::Unavailable(day.iso_date.clone())),
        None => Err(SelectionError::NotInGrid {
            date: iso_date.to_string(),
            month: grid.cursor.label(),
        }),
    }
}
