use chrono::{Duration, NaiveDate, Weekday};
use serde_with::DeserializeFromStr;
use std::fmt;
use std::str::FromStr;

mod conversion;
pub mod datetime;
pub mod error;
pub mod gregorian;
pub mod hijri;
pub mod jalali;

pub use datetime::{CalendarDate, MonthIndex};
pub use error::{Error, ErrorKind, Result};
pub use gregorian::Gregorian;
pub use hijri::Hijri;
pub use jalali::Jalali;

/// Operations a calendar system has to provide to back the picker.
///
/// Months are zero based throughout. Every calendar system known here has
/// twelve months per year.
pub trait Calendarlike {
    fn kind(&self) -> CalendarKind;

    /// The day this instance considers "today". Fixed at construction.
    fn today(&self) -> NaiveDate;

    /// `None` if the date lies outside what the calendar system can represent.
    fn to_calendar_date(&self, date: NaiveDate) -> Option<CalendarDate>;

    /// `None` if the day does not exist in this calendar system.
    fn date_from(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate>;

    fn days_in_month(&self, year: i32, month: u32) -> u32;

    fn month_name(&self, month: u32) -> &'static str;

    fn first_weekday(&self) -> Weekday;

    fn current_month(&self) -> Option<u32> {
        self.month_of(self.today())
    }

    fn current_year(&self) -> Option<i32> {
        self.year_of(self.today())
    }

    fn current_month_index(&self) -> Option<MonthIndex> {
        self.month_index_of(self.today())
    }

    fn month_of(&self, date: NaiveDate) -> Option<u32> {
        self.to_calendar_date(date).map(|local| local.month)
    }

    fn year_of(&self, date: NaiveDate) -> Option<i32> {
        self.to_calendar_date(date).map(|local| local.year)
    }

    fn month_index_of(&self, date: NaiveDate) -> Option<MonthIndex> {
        self.to_calendar_date(date).map(|local| local.month_index())
    }

    fn first_day_of_month(&self, idx: MonthIndex) -> Option<NaiveDate> {
        self.date_from(idx.year(), idx.month(), 1)
    }

    fn last_day_of_month(&self, idx: MonthIndex) -> Option<NaiveDate> {
        let last = self.days_in_month(idx.year(), idx.month());
        self.date_from(idx.year(), idx.month(), last)
    }

    fn dates_of_month(&self, idx: MonthIndex) -> Vec<NaiveDate> {
        let first = match self.first_day_of_month(idx) {
            Some(first) => first,
            None => return Vec::new(),
        };

        (0..self.days_in_month(idx.year(), idx.month()))
            .map(|offset| Duration::days(i64::from(offset)))
            .filter_map(|offset| first.checked_add_signed(offset))
            .collect()
    }

    /// Bare day record without any selection state applied.
    fn day(&self, date: NaiveDate) -> Option<Day> {
        let local = self.to_calendar_date(date)?;
        Some(Day::new(date, local).today(date == self.today()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeserializeFromStr)]
pub enum CalendarKind {
    Gregorian,
    Jalali,
    Hijri,
}

impl CalendarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarKind::Gregorian => "gregorian",
            CalendarKind::Jalali => "jalali",
            CalendarKind::Hijri => "hijri",
        }
    }
}

impl Default for CalendarKind {
    fn default() -> Self {
        CalendarKind::Gregorian
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CalendarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gregorian" => Ok(CalendarKind::Gregorian),
            "jalali" | "persian" => Ok(CalendarKind::Jalali),
            "hijri" | "islamic" => Ok(CalendarKind::Hijri),
            _ => Err(Error::new(
                ErrorKind::UnknownCalendar,
                &format!("Calendar '{}' not recognized", s),
            )),
        }
    }
}

/// One of the supported calendar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calendar {
    Gregorian(Gregorian),
    Jalali(Jalali),
    Hijri(Hijri),
}

impl Calendar {
    pub fn new(kind: CalendarKind) -> Self {
        match kind {
            CalendarKind::Gregorian => Calendar::Gregorian(Gregorian::default()),
            CalendarKind::Jalali => Calendar::Jalali(Jalali::default()),
            CalendarKind::Hijri => Calendar::Hijri(Hijri::default()),
        }
    }

    pub fn with_today(kind: CalendarKind, today: NaiveDate) -> Self {
        match kind {
            CalendarKind::Gregorian => Calendar::Gregorian(Gregorian::with_today(today)),
            CalendarKind::Jalali => Calendar::Jalali(Jalali::with_today(today)),
            CalendarKind::Hijri => Calendar::Hijri(Hijri::with_today(today)),
        }
    }
}

impl Calendarlike for Calendar {
    fn kind(&self) -> CalendarKind {
        use Calendar::*;
        match self {
            Gregorian(c) => c.kind(),
            Jalali(c) => c.kind(),
            Hijri(c) => c.kind(),
        }
    }

    fn today(&self) -> NaiveDate {
        use Calendar::*;
        match self {
            Gregorian(c) => c.today(),
            Jalali(c) => c.today(),
            Hijri(c) => c.today(),
        }
    }

    fn to_calendar_date(&self, date: NaiveDate) -> Option<CalendarDate> {
        use Calendar::*;
        match self {
            Gregorian(c) => c.to_calendar_date(date),
            Jalali(c) => c.to_calendar_date(date),
            Hijri(c) => c.to_calendar_date(date),
        }
    }

    fn date_from(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        use Calendar::*;
        match self {
            Gregorian(c) => c.date_from(year, month, day),
            Jalali(c) => c.date_from(year, month, day),
            Hijri(c) => c.date_from(year, month, day),
        }
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        use Calendar::*;
        match self {
            Gregorian(c) => c.days_in_month(year, month),
            Jalali(c) => c.days_in_month(year, month),
            Hijri(c) => c.days_in_month(year, month),
        }
    }

    fn month_name(&self, month: u32) -> &'static str {
        use Calendar::*;
        match self {
            Gregorian(c) => c.month_name(month),
            Jalali(c) => c.month_name(month),
            Hijri(c) => c.month_name(month),
        }
    }

    fn first_weekday(&self) -> Weekday {
        use Calendar::*;
        match self {
            Gregorian(c) => c.first_weekday(),
            Jalali(c) => c.first_weekday(),
            Hijri(c) => c.first_weekday(),
        }
    }
}

/// A single day as handed to month views and hover notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    /// The same day expressed in the calendar system that produced it.
    pub local: CalendarDate,
    pub today: bool,
    pub selected: bool,
    pub in_range: bool,
    pub range_start: bool,
    pub range_end: bool,
    pub disabled: bool,
}

impl Day {
    pub fn new(date: NaiveDate, local: CalendarDate) -> Self {
        Day {
            date,
            local,
            today: false,
            selected: false,
            in_range: false,
            range_start: false,
            range_end: false,
            disabled: false,
        }
    }

    pub fn today(mut self, today: bool) -> Self {
        self.today = today;
        self
    }

    pub fn day_num(&self) -> u32 {
        self.local.day
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.day)
    }
}
