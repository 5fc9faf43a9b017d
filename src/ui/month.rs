use chrono::{Datelike, NaiveDate};
use std::cmp;

use crate::ctrl::{InputValue, VisibleMonth};
use crate::provider::{Calendar, Calendarlike, Day, MonthIndex};

/// Everything a host needs to draw one visible month.
#[derive(Debug, Clone)]
pub struct MonthTable<'a> {
    pub visible: VisibleMonth,
    pub range: bool,
    pub value: InputValue,
    pub selected_first_range: Option<NaiveDate>,
    pub hovered_day: Option<Day>,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    pub calendar: &'a Calendar,
    /// `false` when day level interactions are not wired into the picker.
    pub interactive: bool,
}

impl<'a> MonthTable<'a> {
    pub fn year(&self) -> i32 {
        self.visible.year()
    }

    pub fn month(&self) -> u32 {
        self.visible.month()
    }

    pub fn index(&self) -> MonthIndex {
        self.visible.index
    }

    pub fn key(&self) -> &str {
        &self.visible.key
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.calendar.month_name(self.month()), self.year())
    }

    /// Empty cells before the first day in a week row starting on the
    /// calendar's first weekday.
    pub fn leading_blanks(&self) -> u32 {
        match self.calendar.first_day_of_month(self.index()) {
            Some(first) => {
                let start = self.calendar.first_weekday().num_days_from_sunday();
                (first.weekday().num_days_from_sunday() + 7 - start) % 7
            }
            None => 0,
        }
    }

    /// Range highlighted in this table: the open selection previewed up to the
    /// hovered day, otherwise the committed range.
    fn highlighted_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        if !self.range {
            return None;
        }

        if let Some(first) = self.selected_first_range {
            let other = self.hovered_day.map_or(first, |day| day.date);
            return Some((cmp::min(first, other), cmp::max(first, other)));
        }

        match self.value {
            InputValue::Range(range) => match (range.start, range.end) {
                (Some(start), Some(end)) => Some((cmp::min(start, end), cmp::max(start, end))),
                (Some(date), None) | (None, Some(date)) => Some((date, date)),
                (None, None) => None,
            },
            InputValue::Single(_) => None,
        }
    }

    fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.map_or(false, |min| date < min) || self.max.map_or(false, |max| date > max)
    }

    pub fn days(&self) -> Vec<Day> {
        let highlighted = self.highlighted_range();

        self.calendar
            .dates_of_month(self.index())
            .into_iter()
            .filter_map(|date| {
                let mut day = self.calendar.day(date)?;
                day.disabled = self.is_disabled(date);

                if let Some((start, end)) = highlighted {
                    day.in_range = start <= date && date <= end;
                    day.range_start = date == start;
                    day.range_end = date == end;
                    day.selected = day.range_start || day.range_end;
                } else {
                    day.selected = !self.range && self.value.is_endpoint(date);
                }

                Some(day)
            })
            .collect()
    }
}
