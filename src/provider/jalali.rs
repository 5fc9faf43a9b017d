//! Solar Hijri (Jalali) calendar, as the Persian calendar of ICU4X.

use chrono::{Local, NaiveDate, Weekday};
use icu_calendar::AnyCalendarKind;

use super::conversion;
use super::datetime::CalendarDate;
use super::{CalendarKind, Calendarlike};

const ICU_KIND: AnyCalendarKind = AnyCalendarKind::Persian;

const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

pub fn is_leap_year(year: i32) -> bool {
    conversion::is_leap_year(ICU_KIND, year)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jalali {
    today: NaiveDate,
}

impl Default for Jalali {
    fn default() -> Self {
        Jalali::with_today(Local::now().date_naive())
    }
}

impl Jalali {
    pub fn with_today(today: NaiveDate) -> Self {
        Jalali { today }
    }
}

impl Calendarlike for Jalali {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Jalali
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

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> Jalali {
        Jalali::with_today(ymd(2024, 3, 20))
    }

    #[test]
    fn nowruz_dates() {
        let cal = calendar();
        assert_eq!(
            cal.to_calendar_date(ymd(2024, 3, 20)),
            Some(CalendarDate::new(1403, 0, 1))
        );
        assert_eq!(
            cal.to_calendar_date(ymd(2023, 3, 21)),
            Some(CalendarDate::new(1402, 0, 1))
        );
        assert_eq!(
            cal.to_calendar_date(ymd(2025, 3, 21)),
            Some(CalendarDate::new(1404, 0, 1))
        );
        assert_eq!(cal.date_from(1403, 0, 1), Some(ymd(2024, 3, 20)));
    }

    #[test]
    fn end_of_year() {
        let cal = calendar();
        assert_eq!(
            cal.to_calendar_date(ymd(2024, 3, 19)),
            Some(CalendarDate::new(1402, 11, 29))
        );
        assert_eq!(cal.date_from(1403, 11, 30), Some(ymd(2025, 3, 20)));
        assert_eq!(cal.date_from(1402, 11, 30), None);
    }

    #[test]
    fn month_lengths() {
        let cal = calendar();
        assert_eq!(cal.days_in_month(1403, 0), 31);
        assert_eq!(cal.days_in_month(1403, 5), 31);
        assert_eq!(cal.days_in_month(1403, 6), 30);
        assert_eq!(cal.days_in_month(1403, 11), 30);
        assert_eq!(cal.days_in_month(1402, 11), 29);
        assert_eq!(cal.days_in_month(1403, 12), 0);
    }

    #[test]
    fn second_half_of_year() {
        let cal = calendar();
        assert_eq!(
            cal.to_calendar_date(ymd(2024, 1, 1)),
            Some(CalendarDate::new(1402, 9, 11))
        );
        assert_eq!(
            cal.to_calendar_date(ymd(2024, 2, 1)),
            Some(CalendarDate::new(1402, 10, 12))
        );
        assert_eq!(cal.date_from(1402, 9, 1), Some(ymd(2023, 12, 22)));
    }

    #[test]
    fn leap_years() {
        let leap: Vec<i32> = (1395..1410).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leap, vec![1395, 1399, 1403, 1408]);
    }

    #[test]
    fn round_trip_over_centuries() {
        let cal = calendar();
        let mut date = ymd(1800, 1, 1);
        while date < ymd(2300, 1, 1) {
            let jd = cal.to_calendar_date(date).unwrap();
            assert_eq!(cal.date_from(jd.year, jd.month, jd.day), Some(date));
            date += chrono::Duration::days(11);
        }
    }

    #[test]
    fn early_dates_keep_their_own_month() {
        let cal = calendar();
        let first = cal.to_calendar_date(ymd(500, 1, 1)).unwrap();
        let second = cal.to_calendar_date(ymd(500, 2, 15)).unwrap();
        assert!(first.year < -61);
        assert_ne!(first.month_index(), second.month_index());
        assert_eq!(
            cal.date_from(first.year, first.month, first.day),
            Some(ymd(500, 1, 1))
        );
    }
}
