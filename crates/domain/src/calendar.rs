use chrono::{Datelike, NaiveDate};
use derive_more::{Deref, Display, Into};

/// ISO week number of a date (1 to 53).
#[derive(Deref, Debug, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeekOfYear(u32);

impl WeekOfYear {
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        if !(1..=53).contains(&value) {
            return Err(CalendarError::WeekOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl From<NaiveDate> for WeekOfYear {
    fn from(value: NaiveDate) -> Self {
        Self(value.iso_week().week())
    }
}

/// Day within the ISO week, Monday is 0 and Sunday is 6.
#[derive(Deref, Debug, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayOfWeek(u32);

impl DayOfWeek {
    pub fn new(value: u32) -> Result<Self, CalendarError> {
        if value > 6 {
            return Err(CalendarError::DayOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl From<NaiveDate> for DayOfWeek {
    fn from(value: NaiveDate) -> Self {
        Self(value.weekday().num_days_from_monday())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInfo {
    pub date: NaiveDate,
    pub week_of_year: WeekOfYear,
    pub day_of_week: DayOfWeek,
}

impl From<NaiveDate> for DateInfo {
    fn from(date: NaiveDate) -> Self {
        Self {
            date,
            week_of_year: date.into(),
            day_of_week: date.into(),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CalendarError {
    #[error("Week of year must be in the range 1 to 53 ({0})")]
    WeekOutOfRange(u32),
    #[error("Day of week must be in the range 0 to 6 ({0})")]
    DayOutOfRange(u32),
}
