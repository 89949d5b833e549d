//! Week arithmetic used to window reservations.
//!
//! Weeks are counted from January 1st with plain division by seven and the
//! week grid is anchored on the Sunday on or before January 1st. This is not
//! ISO-8601: week 1 may start in the previous year and the last days of a
//! year report week 52.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

use crate::navigator::Direction;

pub const FIRST_WEEK: u8 = 1;
pub const LAST_WEEK: u8 = 52;

/// Week of the year, always within `FIRST_WEEK..=LAST_WEEK`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekNumber(u8);

impl WeekNumber {
    /// Clamp any signed value into the valid week range
    pub fn new(week: i64) -> Self {
        Self(week.clamp(FIRST_WEEK as i64, LAST_WEEK as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn step(self, direction: Direction) -> Self {
        Self::new(self.0 as i64 + direction.delta())
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Week grid for the year containing a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCalendar {
    jan_first: NaiveDate,
}

impl WeekCalendar {
    /// Calendar of the year `today` belongs to
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            jan_first: today - Days::new(today.ordinal0() as u64),
        }
    }

    /// First day of `week`: the Sunday on or before January 1st, shifted by
    /// whole weeks
    pub fn week_start(&self, week: WeekNumber) -> NaiveDate {
        let weekday = self.jan_first.weekday().num_days_from_sunday() as u64;
        let offset = (week.get() as u64 - 1) * 7;
        self.jan_first - Days::new(weekday) + Days::new(offset)
    }

    pub fn week_end(&self, week: WeekNumber) -> NaiveDate {
        self.week_start(week) + Days::new(6)
    }

    pub fn week_range(&self, week: WeekNumber) -> DateRange {
        DateRange {
            start: self.week_start(week),
            end: self.week_end(week),
        }
    }

    pub fn is_in_week(&self, date: NaiveDate, week: WeekNumber) -> bool {
        self.week_range(week).contains(date)
    }
}

/// `ceil((days since January 1st + 1) / 7)`, clamped to the week range
pub fn current_week_number(today: NaiveDate) -> WeekNumber {
    let days = today.ordinal0() as i64;
    WeekNumber::new((days + 7) / 7)
}

pub fn week_start(week: WeekNumber, today: NaiveDate) -> NaiveDate {
    WeekCalendar::for_date(today).week_start(week)
}

pub fn week_end(week: WeekNumber, today: NaiveDate) -> NaiveDate {
    WeekCalendar::for_date(today).week_end(week)
}

pub fn is_in_week(date: NaiveDate, week: WeekNumber, today: NaiveDate) -> bool {
    WeekCalendar::for_date(today).is_in_week(date, week)
}
