use chrono::{Datelike, Local, Month, NaiveDate, Weekday};
use num_traits::FromPrimitive;

use super::datetime::{CalendarDate, MonthIndex};
use super::{CalendarKind, Calendarlike};

pub fn days_of_month(year: i32, month: u32) -> u32 {
    if month >= 12 {
        return 0;
    }
    let next = MonthIndex::new(month, year).next();
    match (
        NaiveDate::from_ymd_opt(year, month + 1, 1),
        NaiveDate::from_ymd_opt(next.year(), next.month() + 1, 1),
    ) {
        (Some(first), Some(next_first)) => {
            next_first.signed_duration_since(first).num_days() as u32
        }
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gregorian {
    today: NaiveDate,
}

impl Default for Gregorian {
    fn default() -> Self {
        Gregorian::with_today(Local::now().date_naive())
    }
}

impl Gregorian {
    pub fn with_today(today: NaiveDate) -> Self {
        Gregorian { today }
    }
}

impl Calendarlike for Gregorian {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Gregorian
    }

    fn today(&self) -> NaiveDate {
        self.today
    }

    fn to_calendar_date(&self, date: NaiveDate) -> Option<CalendarDate> {
        Some(CalendarDate::new(date.year(), date.month0(), date.day()))
    }

    fn date_from(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        if month >= 12 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month + 1, day)
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        days_of_month(year, month)
    }

    fn month_name(&self, month: u32) -> &'static str {
        month
            .checked_add(1)
            .and_then(Month::from_u32)
            .map_or("", |m| m.name())
    }

    fn first_weekday(&self) -> Weekday {
        Weekday::Sun
    }
}
