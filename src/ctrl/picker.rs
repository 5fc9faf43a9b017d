//! Selection and pagination state of a date picker.
//!
//! A [`Picker`] owns the anchor month (the first of the visible months), the
//! endpoint of a range selection that is still open and the day currently
//! hovered. Hosts forward day interactions into it and receive the resulting
//! notifications through the [`EventSink`] handed over at construction.

use chrono::NaiveDate;
use serde::Deserialize;

use super::pages::{visible_months, VisibleMonth};
use super::value::{InputValue, RangeValue};
use crate::events::{Event, EventSink};
use crate::provider::{Calendar, Calendarlike, Day, Error, ErrorKind, MonthIndex, Result};
use crate::ui::MonthTable;

/// What happens to the visible page when the calendar system changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSwitch {
    /// Jump to the current month of the new calendar.
    Reset,
    /// Show the month of the new calendar containing the old anchor's first day.
    Preserve,
}

impl Default for CalendarSwitch {
    fn default() -> Self {
        CalendarSwitch::Reset
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub month_count: u32,
    pub current_calendar: usize,
    pub range: bool,
    pub read_only: bool,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    pub calendar_switch: CalendarSwitch,
}

impl Default for PickerOptions {
    fn default() -> Self {
        PickerOptions {
            month_count: 1,
            current_calendar: 0,
            range: false,
            read_only: false,
            min: None,
            max: None,
            calendar_switch: CalendarSwitch::default(),
        }
    }
}

impl PickerOptions {
    pub fn month_count(mut self, month_count: u32) -> Self {
        self.month_count = month_count;
        self
    }

    pub fn current_calendar(mut self, index: usize) -> Self {
        self.current_calendar = index;
        self
    }

    pub fn range(mut self, range: bool) -> Self {
        self.range = range;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn min(mut self, min: Option<NaiveDate>) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: Option<NaiveDate>) -> Self {
        self.max = max;
        self
    }

    pub fn calendar_switch(mut self, behaviour: CalendarSwitch) -> Self {
        self.calendar_switch = behaviour;
        self
    }

    fn validate(&self, calendars: &[Calendar]) -> Result<()> {
        if self.month_count == 0 {
            return Err(ErrorKind::InvalidMonthCount.into());
        }
        if self.current_calendar >= calendars.len() {
            return Err(invalid_index(self.current_calendar, calendars.len()));
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(Error::new(
                    ErrorKind::InvalidBounds,
                    &format!("{} > {}", min, max),
                ));
            }
        }
        Ok(())
    }
}

fn unsupported_date(date: NaiveDate, calendar: &Calendar) -> Error {
    Error::new(
        ErrorKind::UnsupportedDate,
        &format!("{} in the {} calendar", date, calendar.kind()),
    )
}

fn current_month_index(calendar: &Calendar) -> Result<MonthIndex> {
    calendar
        .current_month_index()
        .ok_or_else(|| unsupported_date(calendar.today(), calendar))
}

fn invalid_index(index: usize, len: usize) -> Error {
    Error::new(
        ErrorKind::InvalidCalendarIndex,
        &format!("index {} of {} calendars", index, len),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub anchor: MonthIndex,
    pub selected_first_range: Option<NaiveDate>,
    pub current_hovered_day: Option<Day>,
}

pub struct Picker<S: EventSink> {
    calendars: Vec<Calendar>,
    options: PickerOptions,
    value: InputValue,
    state: PickerState,
    sink: S,
}

impl<S: EventSink> Picker<S> {
    /// Opens on the month of `value`, else the month of `options.min`, else
    /// the active calendar's current month.
    pub fn new(
        calendars: Vec<Calendar>,
        options: PickerOptions,
        value: InputValue,
        sink: S,
    ) -> Result<Self> {
        options.validate(&calendars)?;
        check_mode(&value, options.range)?;

        let calendar = &calendars[options.current_calendar];
        let anchor = match value.anchor_date().or(options.min) {
            Some(date) => calendar
                .month_index_of(date)
                .ok_or_else(|| unsupported_date(date, calendar))?,
            None => current_month_index(calendar)?,
        };

        log::debug!(
            "Picker opens on {} ({} calendar, {} month(s))",
            anchor,
            calendar.kind(),
            options.month_count
        );

        Ok(Picker {
            calendars,
            options,
            value,
            state: PickerState {
                anchor,
                selected_first_range: None,
                current_hovered_day: None,
            },
            sink,
        })
    }

    pub fn month(&self) -> u32 {
        self.state.anchor.month()
    }

    pub fn year(&self) -> i32 {
        self.state.anchor.year()
    }

    pub fn anchor(&self) -> MonthIndex {
        self.state.anchor
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn selected_first_range(&self) -> Option<NaiveDate> {
        self.state.selected_first_range
    }

    pub fn current_hovered_day(&self) -> Option<&Day> {
        self.state.current_hovered_day.as_ref()
    }

    pub fn value(&self) -> &InputValue {
        &self.value
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendars[self.options.current_calendar]
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Replace the bound value without emitting anything.
    pub fn set_value(&mut self, value: InputValue) -> Result<()> {
        check_mode(&value, self.options.range)?;
        self.value = value;
        Ok(())
    }

    fn emit_page_change(&mut self) {
        let event = Event::PageChange {
            year: self.year(),
            month: self.month(),
        };
        self.sink.emit(event);
    }

    /// Page one month forward. Returns `false` if the last visible month
    /// would start after `max`, or if that cannot be told because the month
    /// has no days in the active calendar.
    pub fn next(&mut self) -> bool {
        let candidate = self.state.anchor.next();

        if let Some(max) = self.options.max {
            let last = candidate + (self.options.month_count - 1);
            match self.calendar().first_day_of_month(last) {
                Some(first_day) if first_day <= max => {}
                _ => {
                    log::debug!("Not paging past {}: {} starts after it", max, last);
                    return false;
                }
            }
        }

        self.state.anchor = candidate;
        self.emit_page_change();
        true
    }

    /// Page one month back. Returns `false` if the new anchor ends before
    /// `min`, or has no days in the active calendar while `min` is set.
    pub fn prev(&mut self) -> bool {
        let candidate = self.state.anchor.prev();

        if let Some(min) = self.options.min {
            match self.calendar().last_day_of_month(candidate) {
                Some(last_day) if last_day >= min => {}
                _ => {
                    log::debug!("Not paging before {}: {} ends before it", min, candidate);
                    return false;
                }
            }
        }

        self.state.anchor = candidate;
        self.emit_page_change();
        true
    }

    /// Make calendar `index` the active one and move the page according to
    /// [`CalendarSwitch`]. Selecting the active calendar again keeps the page.
    pub fn switch_calendar(&mut self, index: usize) -> Result<()> {
        if index >= self.calendars.len() {
            return Err(invalid_index(index, self.calendars.len()));
        }
        if index == self.options.current_calendar {
            log::trace!("Calendar {} is already active", index);
            return Ok(());
        }

        let calendar = self.calendars[index];
        let preserved = match self.options.calendar_switch {
            CalendarSwitch::Preserve => self
                .calendar()
                .first_day_of_month(self.state.anchor)
                .and_then(|date| calendar.month_index_of(date)),
            CalendarSwitch::Reset => None,
        };
        let anchor = match preserved {
            Some(anchor) => anchor,
            None => current_month_index(&calendar)?,
        };

        self.options.current_calendar = index;
        self.state.anchor = anchor;

        log::debug!(
            "Switched to {} calendar, anchor is {}",
            calendar.kind(),
            self.state.anchor
        );
        Ok(())
    }

    fn disconnected(&self, interaction: &str) -> bool {
        if self.options.read_only {
            log::trace!("Ignoring {} on read-only picker", interaction);
        }
        self.options.read_only
    }

    /// Start a range selection at `date`. Clears the current value.
    pub fn on_drag_start(&mut self, date: NaiveDate) {
        if self.disconnected("drag") {
            return;
        }
        if !self.options.range {
            log::warn!("Drag start on {} outside of range mode ignored", date);
            return;
        }

        self.commit(InputValue::Range(RangeValue::default()));
        self.sink.emit(Event::Drag);
        self.state.selected_first_range = Some(date);
    }

    /// Finish any open range selection and publish `value`.
    pub fn on_input(&mut self, value: InputValue) {
        if self.disconnected("input") {
            return;
        }
        if let Err(e) = check_mode(&value, self.options.range) {
            log::warn!("Input {} ignored: {}", value, e);
            return;
        }

        self.state.selected_first_range = None;
        self.commit(value);
    }

    pub fn on_day_hover(&mut self, day: Day) {
        if self.disconnected("hover") {
            return;
        }

        self.state.current_hovered_day = Some(day);
        self.sink.emit(Event::DayHover(day));
    }

    /// A day cell was clicked. Days outside the bounds are ignored.
    ///
    /// In range mode the first click opens a selection and the second one
    /// closes it, in either order of dates.
    pub fn on_day_click(&mut self, date: NaiveDate) {
        if self.disconnected("click") {
            return;
        }
        if self.is_disabled(date) {
            log::debug!("Click on disabled day {} ignored", date);
            return;
        }

        self.sink.emit(Event::DayClick(date));

        if !self.options.range {
            self.on_input(InputValue::from(date));
        } else if let Some(first) = self.state.selected_first_range {
            self.on_input(InputValue::from(RangeValue::spanning(first, date)));
        } else {
            self.on_drag_start(date);
        }
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.options.min.map_or(false, |min| date < min)
            || self.options.max.map_or(false, |max| date > max)
    }

    fn commit(&mut self, value: InputValue) {
        log::debug!("Committing value {}", value);
        self.value = value;
        self.sink.emit(Event::Input(value));
    }

    pub fn visible_months(&self) -> Vec<VisibleMonth> {
        visible_months(self.state.anchor, self.options.month_count)
    }

    pub fn month_tables(&self) -> Vec<MonthTable<'_>> {
        let calendar = self.calendar();

        self.visible_months()
            .into_iter()
            .map(|visible| MonthTable {
                visible,
                range: self.options.range,
                value: self.value,
                selected_first_range: self.state.selected_first_range,
                hovered_day: self.state.current_hovered_day,
                min: self.options.min,
                max: self.options.max,
                calendar,
                interactive: !self.options.read_only,
            })
            .collect()
    }
}

fn check_mode(value: &InputValue, range: bool) -> Result<()> {
    if value.is_range() == range {
        Ok(())
    } else {
        Err(Error::new(
            ErrorKind::ValueModeMismatch,
            &format!(
                "got {} value in {} mode",
                if value.is_range() { "range" } else { "single" },
                if range { "range" } else { "single" }
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::CalendarKind;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        ymd(2024, 3, 20)
    }

    fn calendars() -> Vec<Calendar> {
        vec![
            Calendar::with_today(CalendarKind::Gregorian, today()),
            Calendar::with_today(CalendarKind::Jalali, today()),
            Calendar::with_today(CalendarKind::Hijri, today()),
        ]
    }

    fn picker(options: PickerOptions, value: InputValue) -> Picker<Vec<Event>> {
        Picker::new(calendars(), options, value, Vec::new()).unwrap()
    }

    fn range_picker() -> Picker<Vec<Event>> {
        let options = PickerOptions::default().range(true);
        picker(options, InputValue::empty(true))
    }

    #[test]
    fn next_wraps_december() {
        let mut p = picker(PickerOptions::default(), ymd(2023, 12, 5).into());
        assert_eq!((p.month(), p.year()), (11, 2023));

        assert!(p.next());
        assert_eq!((p.month(), p.year()), (0, 2024));
        assert_eq!(
            p.sink().as_slice(),
            &[Event::PageChange {
                year: 2024,
                month: 0
            }]
        );
    }

    #[test]
    fn prev_wraps_january() {
        let mut p = picker(PickerOptions::default(), ymd(2024, 1, 5).into());
        assert!(p.prev());
        assert_eq!((p.month(), p.year()), (11, 2023));
        assert_eq!(
            p.sink().last(),
            Some(&Event::PageChange {
                year: 2023,
                month: 11
            })
        );
    }

    #[test]
    fn next_then_prev_restores_anchor() {
        for month in 1..=12 {
            let mut p = picker(PickerOptions::default(), ymd(2023, month, 1).into());
            let anchor = p.anchor();
            p.next();
            p.prev();
            assert_eq!(p.anchor(), anchor);
            p.prev();
            p.next();
            assert_eq!(p.anchor(), anchor);
        }
    }

    #[test]
    fn next_keeps_advancing() {
        let mut p = picker(PickerOptions::default(), ymd(2023, 6, 1).into());
        for _ in 0..14 {
            p.next();
        }
        assert_eq!((p.month(), p.year()), (7, 2024));
        assert_eq!(p.sink().len(), 14);
    }

    #[test]
    fn anchor_prefers_value_over_min() {
        let options = PickerOptions::default().min(Some(ymd(2020, 2, 1)));
        let p = picker(options.clone(), ymd(2022, 8, 9).into());
        assert_eq!((p.month(), p.year()), (7, 2022));

        let p = picker(options, InputValue::Single(None));
        assert_eq!((p.month(), p.year()), (1, 2020));

        let p = picker(PickerOptions::default(), InputValue::Single(None));
        assert_eq!((p.month(), p.year()), (2, 2024));
    }

    #[test]
    fn anchor_uses_range_start() {
        let value = RangeValue::new(Some(ymd(2021, 4, 2)), Some(ymd(2021, 9, 2)));
        let p = picker(PickerOptions::default().range(true), value.into());
        assert_eq!((p.month(), p.year()), (3, 2021));

        let value = RangeValue::new(None, Some(ymd(2021, 9, 2)));
        let p = picker(PickerOptions::default().range(true), value.into());
        assert_eq!((p.month(), p.year()), (2, 2024));
    }

    #[test]
    fn anchor_follows_active_calendar() {
        let p = picker(
            PickerOptions::default().current_calendar(1),
            InputValue::Single(None),
        );
        assert_eq!((p.month(), p.year()), (0, 1403));

        let p = picker(
            PickerOptions::default().current_calendar(2),
            ymd(2024, 3, 11).into(),
        );
        assert_eq!((p.month(), p.year()), (8, 1445));
    }

    #[test]
    fn construction_validates_options() {
        let err = |options: PickerOptions| {
            Picker::new(calendars(), options, InputValue::Single(None), Vec::new())
                .err()
                .map(|e| e.kind)
        };

        assert!(matches!(
            err(PickerOptions::default().current_calendar(3)),
            Some(ErrorKind::InvalidCalendarIndex)
        ));
        assert!(matches!(
            err(PickerOptions::default().month_count(0)),
            Some(ErrorKind::InvalidMonthCount)
        ));
        let inverted = PickerOptions::default()
            .min(Some(ymd(2024, 2, 1)))
            .max(Some(ymd(2024, 1, 1)));
        assert!(matches!(err(inverted), Some(ErrorKind::InvalidBounds)));
        assert!(matches!(
            err(PickerOptions::default().range(true)),
            Some(ErrorKind::ValueModeMismatch)
        ));
    }

    #[test]
    fn drag_then_input_commits_range() {
        let mut p = range_picker();
        let (d, d2) = (ymd(2024, 3, 4), ymd(2024, 3, 9));

        p.on_drag_start(d);
        assert_eq!(p.selected_first_range(), Some(d));

        let range = InputValue::from(RangeValue::new(Some(d), Some(d2)));
        p.on_input(range);

        assert_eq!(p.selected_first_range(), None);
        assert_eq!(p.value(), &range);
        assert_eq!(
            p.sink().as_slice(),
            &[
                Event::Input(InputValue::empty(true)),
                Event::Drag,
                Event::Input(range),
            ]
        );
    }

    #[test]
    fn second_drag_restarts_selection() {
        let mut p = range_picker();
        let range = RangeValue::spanning(ymd(2024, 1, 1), ymd(2024, 1, 2));
        p.on_input(range.into());
        p.on_drag_start(ymd(2024, 3, 4));
        p.on_drag_start(ymd(2024, 3, 7));

        assert_eq!(p.selected_first_range(), Some(ymd(2024, 3, 7)));
        assert_eq!(p.value(), &InputValue::empty(true));
        let clears = p
            .sink()
            .iter()
            .filter(|e| **e == Event::Input(InputValue::empty(true)))
            .count();
        assert_eq!(clears, 2);
    }

    #[test]
    fn drag_is_ignored_in_single_mode() {
        let mut p = picker(PickerOptions::default(), InputValue::Single(None));
        p.on_drag_start(ymd(2024, 3, 4));
        assert_eq!(p.selected_first_range(), None);
        assert!(p.sink().is_empty());
    }

    #[test]
    fn mismatched_input_is_ignored() {
        let mut p = range_picker();
        p.on_drag_start(ymd(2024, 3, 4));
        p.on_input(ymd(2024, 3, 5).into());
        assert_eq!(p.selected_first_range(), Some(ymd(2024, 3, 4)));
        assert_eq!(p.sink().len(), 2);
    }

    #[test]
    fn clicks_build_a_range_in_either_order() {
        let mut p = range_picker();
        p.on_day_click(ymd(2024, 3, 20));
        assert_eq!(p.selected_first_range(), Some(ymd(2024, 3, 20)));

        p.on_day_click(ymd(2024, 3, 12));
        assert_eq!(p.selected_first_range(), None);
        let committed = RangeValue::spanning(ymd(2024, 3, 12), ymd(2024, 3, 20));
        assert_eq!(p.value(), &InputValue::from(committed));
        assert_eq!(
            p.sink().as_slice(),
            &[
                Event::DayClick(ymd(2024, 3, 20)),
                Event::Input(InputValue::empty(true)),
                Event::Drag,
                Event::DayClick(ymd(2024, 3, 12)),
                Event::Input(*p.value()),
            ]
        );
    }

    #[test]
    fn click_in_single_mode_commits_date() {
        let mut p = picker(PickerOptions::default(), InputValue::Single(None));
        p.on_day_click(ymd(2024, 3, 2));
        assert_eq!(p.value(), &InputValue::from(ymd(2024, 3, 2)));
        assert_eq!(p.sink().last(), Some(&Event::Input(ymd(2024, 3, 2).into())));
    }

    #[test]
    fn clicks_outside_bounds_are_ignored() {
        let options = PickerOptions::default()
            .min(Some(ymd(2024, 3, 5)))
            .max(Some(ymd(2024, 3, 25)));
        let mut p = picker(options, InputValue::Single(None));
        p.on_day_click(ymd(2024, 3, 4));
        p.on_day_click(ymd(2024, 3, 26));
        assert!(p.sink().is_empty());
        assert_eq!(p.value(), &InputValue::Single(None));
    }

    #[test]
    fn hover_records_day_without_paging() {
        let mut p = range_picker();
        let anchor = p.anchor();
        let day = p.calendar().day(ymd(2024, 5, 1)).unwrap();
        p.on_day_hover(day);

        assert_eq!(p.current_hovered_day(), Some(&day));
        assert_eq!(p.anchor(), anchor);
        assert_eq!(p.value(), &InputValue::empty(true));
        assert_eq!(p.sink().as_slice(), &[Event::DayHover(day)]);
    }

    #[test]
    fn read_only_disconnects_day_interactions() {
        let mut p = picker(
            PickerOptions::default().range(true).read_only(true),
            InputValue::empty(true),
        );
        let day = p.calendar().day(ymd(2024, 3, 8)).unwrap();

        p.on_day_click(ymd(2024, 3, 8));
        p.on_drag_start(ymd(2024, 3, 8));
        p.on_day_hover(day);
        let range = RangeValue::spanning(ymd(2024, 3, 1), ymd(2024, 3, 2));
        p.on_input(range.into());

        assert_eq!(p.selected_first_range(), None);
        assert_eq!(p.current_hovered_day(), None);
        assert!(p.sink().is_empty());
        assert!(p.month_tables().iter().all(|t| !t.interactive));

        assert!(p.next());
        assert_eq!((p.month(), p.year()), (3, 2024));
        assert!(p.prev());
        assert!(p.prev());
        assert_eq!((p.month(), p.year()), (1, 2024));
    }

    #[test]
    fn paging_stops_at_bounds() {
        let options = PickerOptions::default()
            .month_count(2)
            .min(Some(ymd(2024, 2, 10)))
            .max(Some(ymd(2024, 5, 10)));
        let mut p = picker(options, InputValue::Single(None));
        assert_eq!((p.month(), p.year()), (1, 2024));

        assert!(!p.prev());
        assert!(p.next());
        assert!(p.next());
        assert_eq!((p.month(), p.year()), (3, 2024));
        assert!(!p.next());
        assert_eq!((p.month(), p.year()), (3, 2024));
        assert_eq!(p.sink().len(), 2);
    }

    #[test]
    fn switch_resets_to_current_month() {
        let mut p = picker(PickerOptions::default(), ymd(2019, 7, 1).into());
        p.switch_calendar(1).unwrap();
        assert_eq!((p.month(), p.year()), (0, 1403));
        assert_eq!(p.calendar().kind(), CalendarKind::Jalali);
        assert!(p.sink().is_empty());

        p.switch_calendar(0).unwrap();
        assert_eq!((p.month(), p.year()), (2, 2024));
    }

    #[test]
    fn switch_can_preserve_page() {
        let options = PickerOptions::default().calendar_switch(CalendarSwitch::Preserve);
        let mut p = picker(options, ymd(2024, 1, 15).into());
        p.switch_calendar(1).unwrap();
        // 2024-01-01 is 11 Dey 1402.
        assert_eq!((p.month(), p.year()), (9, 1402));
    }

    #[test]
    fn reselecting_active_calendar_keeps_page() {
        for behaviour in [CalendarSwitch::Reset, CalendarSwitch::Preserve].iter() {
            let options = PickerOptions::default().calendar_switch(*behaviour);
            let mut p = picker(options, ymd(2019, 7, 1).into());
            p.switch_calendar(0).unwrap();
            assert_eq!((p.month(), p.year()), (6, 2019));
            assert!(p.sink().is_empty());
        }
    }

    #[test]
    fn preserve_falls_back_to_current_month() {
        let options = PickerOptions::default().calendar_switch(CalendarSwitch::Preserve);
        let mut p = picker(options, NaiveDate::MIN.into());
        assert!(p.prev());
        assert_eq!(p.calendar().first_day_of_month(p.anchor()), None);

        p.switch_calendar(1).unwrap();
        assert_eq!((p.month(), p.year()), (0, 1403));
    }

    #[test]
    fn jalali_paging_stops_at_bounds() {
        let options = PickerOptions::default()
            .current_calendar(1)
            .min(Some(ymd(2024, 3, 10)))
            .max(Some(ymd(2024, 4, 25)));
        let mut p = picker(options, ymd(2024, 3, 25).into());
        assert_eq!((p.month(), p.year()), (0, 1403));

        // Ordibehesht 1403 starts on 2024-04-20, Khordad on 2024-05-21.
        assert!(p.next());
        assert!(!p.next());
        assert_eq!((p.month(), p.year()), (1, 1403));

        // Esfand 1402 ends on 2024-03-19, Bahman 1402 on 2024-02-19.
        assert!(p.prev());
        assert!(p.prev());
        assert!(!p.prev());
        assert_eq!((p.month(), p.year()), (11, 1402));
        assert_eq!(p.sink().len(), 3);
    }

    #[test]
    fn hijri_paging_stops_at_bounds() {
        let options = PickerOptions::default()
            .current_calendar(2)
            .min(Some(ymd(2024, 2, 15)))
            .max(Some(ymd(2024, 4, 20)));
        let mut p = picker(options, ymd(2024, 3, 15).into());
        assert_eq!((p.month(), p.year()), (8, 1445));

        // Shawwal 1445 starts on 2024-04-10, Dhu al-Qa'dah on 2024-05-09.
        assert!(p.next());
        assert!(!p.next());
        assert_eq!((p.month(), p.year()), (9, 1445));

        // Sha'ban 1445 ends on 2024-03-10, Rajab on 2024-02-10.
        assert!(p.prev());
        assert!(p.prev());
        assert!(!p.prev());
        assert_eq!((p.month(), p.year()), (7, 1445));
        assert_eq!(p.sink().len(), 3);
    }

    #[test]
    fn early_min_anchors_on_its_own_jalali_month() {
        let min = ymd(500, 1, 1);
        let options = PickerOptions::default().current_calendar(1).min(Some(min));
        let mut p = picker(options, InputValue::Single(None));

        assert_eq!(Some(p.anchor()), p.calendar().month_index_of(min));
        assert!(p.year() < -61);
        assert!(!p.prev());
        assert!(!p.month_tables()[0].days().is_empty());
        assert!(p.sink().is_empty());
    }

    #[test]
    fn paging_refuses_months_without_days_when_bounded() {
        let options = PickerOptions::default().max(Some(NaiveDate::MAX));
        let mut p = picker(options, NaiveDate::MAX.into());
        assert!(!p.next());
        assert!(p.sink().is_empty());
    }

    #[test]
    fn switch_rejects_unknown_calendar() {
        let mut p = picker(PickerOptions::default(), ymd(2019, 7, 1).into());
        let err = p.switch_calendar(7).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidCalendarIndex));
        assert_eq!((p.month(), p.year()), (6, 2019));
    }

    #[test]
    fn month_tables_follow_visible_months() {
        let mut p = picker(
            PickerOptions::default().month_count(3).range(true),
            RangeValue::new(Some(ymd(2023, 11, 20)), Some(ymd(2024, 1, 3))).into(),
        );
        let titles: Vec<String> = p.month_tables().iter().map(|t| t.title()).collect();
        assert_eq!(
            titles,
            vec!["November 2023", "December 2023", "January 2024"]
        );

        let keys: Vec<String> = p.visible_months().into_iter().map(|m| m.key).collect();
        assert_eq!(keys, vec!["2023-0", "2023-1", "2024-2"]);

        let in_range: usize = p
            .month_tables()
            .iter()
            .map(|t| t.days().iter().filter(|d| d.in_range).count())
            .sum();
        assert_eq!(in_range, 11 + 31 + 3);

        p.next();
        assert_eq!(p.month_tables()[2].title(), "February 2024");
    }
}
