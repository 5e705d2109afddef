pub mod uk;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use uk::UkBankHolidays;

/// lazy iterator over every calendar date in a closed interval
///
/// Cloning restarts from the clone's position, so a range can be walked
/// more than once. An inverted range yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateRange {
    /// every date from `start` to `end`, both included
    pub fn inclusive(start: NaiveDate, end: NaiveDate) -> Self {
        let next = if start <= end { Some(start) } else { None };
        Self { next, end }
    }

    /// every day of the given years, both included
    pub fn years(start_year: i32, end_year: i32) -> Self {
        match (
            NaiveDate::from_ymd_opt(start_year, 1, 1),
            NaiveDate::from_ymd_opt(end_year, 12, 31),
        ) {
            (Some(start), Some(end)) => Self::inclusive(start, end),
            _ => Self { next: None, end: NaiveDate::MIN },
        }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| *d <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map(|d| ((self.end - d).num_days() + 1) as usize)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}

/// calendar of non-working days a loan may not start or end on
pub trait HolidayCalendar {
    fn name(&self) -> &str;

    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// explicit list of holiday dates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHolidays {
    dates: BTreeSet<NaiveDate>,
}

impl FixedHolidays {
    pub fn new<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidayCalendar for FixedHolidays {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// holiday calendar selected in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HolidayCalendarKind {
    /// england and wales bank holidays
    #[default]
    UkBankHolidays,
    Fixed { dates: Vec<NaiveDate> },
    NoHolidays,
}

impl HolidayCalendar for HolidayCalendarKind {
    fn name(&self) -> &str {
        match self {
            HolidayCalendarKind::UkBankHolidays => uk::CALENDAR_NAME,
            HolidayCalendarKind::Fixed { .. } => "Fixed",
            HolidayCalendarKind::NoHolidays => "None",
        }
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        match self {
            HolidayCalendarKind::UkBankHolidays => UkBankHolidays.is_holiday(date),
            HolidayCalendarKind::Fixed { dates } => dates.contains(&date),
            HolidayCalendarKind::NoHolidays => false,
        }
    }
}
