//! Tabular Islamic (civil) calendar: type II leap years, Friday epoch.

use chrono::{Local, NaiveDate, Weekday};
use icu_calendar::AnyCalendarKind;

use super::conversion;
use super::datetime::CalendarDate;
use super::{CalendarKind, Calendarlike};

const ICU_KIND: AnyCalendarKind = AnyCalendarKind::HijriTabularTypeIIFriday;

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qa'dah",
    "Dhu al-Hijjah",
];

pub fn is_leap_year(year: i32) -> bool {
    conversion::is_leap_year(ICU_KIND, year)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hijri {
    today: NaiveDate,
}

impl Default for Hijri {
    fn default() -> Self {
        Hijri::with_today(Local::now().date_naive())
    }
}

impl Hijri {
    pub fn with_today(today: NaiveDate) -> Self {
        Hijri { today }
    }
}

impl Calendarlike for Hijri {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Hijri
    }

    fn today(&self) -> NaiveDate {
        self.today
    }

    fn to_calendar_date(&self, date: NaiveDate) -> Option<CalendarDate> {
        conversion::from_iso(ICU_KIND, date)
    }

    fn date_from(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        conversion::to_iso(ICU_KIND, year, month, day)
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        conversion::days_in_month(ICU_KIND, year, month).unwrap_or(0)
    }

    fn month_name(&self, month: u32) -> &'static str {
        MONTH_NAMES.get(month as usize).copied().unwrap_or("")
    }

    fn first_weekday(&self) -> Weekday {
        Weekday::Sat
    }
}
