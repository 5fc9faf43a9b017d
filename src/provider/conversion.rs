//! Conversions between chrono dates and the calendar systems ICU4X provides.

use chrono::{Datelike, NaiveDate};
use icu_calendar::types::DateFields;
use icu_calendar::{AnyCalendar, AnyCalendarKind, Date};
use std::convert::TryFrom;

use super::datetime::{CalendarDate, MONTHS_PER_YEAR};

pub(super) fn from_iso(kind: AnyCalendarKind, date: NaiveDate) -> Option<CalendarDate> {
    let (month, day) = (date.month() as u8, date.day() as u8);
    let iso = Date::try_new_iso(date.year(), month, day).ok()?;
    let local = iso.to_any().to_calendar(AnyCalendar::new(kind));

    Some(CalendarDate::new(
        local.year().extended_year(),
        u32::from(local.month().ordinal) - 1,
        u32::from(local.day_of_month().0),
    ))
}

fn date_in(
    kind: AnyCalendarKind,
    year: i32,
    month: u32,
    day: u8,
) -> Option<Date<AnyCalendar>> {
    if month >= MONTHS_PER_YEAR {
        return None;
    }

    let mut fields = DateFields::default();
    fields.extended_year = Some(year);
    fields.ordinal_month = Some(u8::try_from(month + 1).ok()?);
    fields.day = Some(day);
    Date::try_from_fields(fields, Default::default(), AnyCalendar::new(kind)).ok()
}

/// `None` if the month lies outside what the calendar can represent.
pub(super) fn days_in_month(kind: AnyCalendarKind, year: i32, month: u32) -> Option<u32> {
    let first = date_in(kind, year, month, 1)?;
    Some(u32::from(first.days_in_month()))
}

pub(super) fn to_iso(
    kind: AnyCalendarKind,
    year: i32,
    month: u32,
    day: u32,
) -> Option<NaiveDate> {
    let length = days_in_month(kind, year, month)?;
    if day == 0 || day > length {
        return None;
    }

    let iso = date_in(kind, year, month, u8::try_from(day).ok()?)?.to_iso();
    NaiveDate::from_ymd_opt(
        iso.year().extended_year(),
        u32::from(iso.month().ordinal),
        u32::from(iso.day_of_month().0),
    )
}

pub(super) fn is_leap_year(kind: AnyCalendarKind, year: i32) -> bool {
    date_in(kind, year, 0, 1)
        .map(|first| first.is_in_leap_year())
        .unwrap_or(false)
}
