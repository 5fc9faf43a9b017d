use chrono::NaiveDate;
use serde::Deserialize;
use std::cmp;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RangeValue {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeValue {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        RangeValue { start, end }
    }

    /// Range spanning both dates, whichever order they were picked in.
    pub fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        RangeValue {
            start: Some(cmp::min(a, b)),
            end: Some(cmp::max(a, b)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// The value a picker produces: one date, or a range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValue {
    Single(Option<NaiveDate>),
    Range(RangeValue),
}

impl InputValue {
    pub fn empty(range: bool) -> Self {
        if range {
            InputValue::Range(RangeValue::default())
        } else {
            InputValue::Single(None)
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, InputValue::Range(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            InputValue::Single(date) => date.is_none(),
            InputValue::Range(range) => range.is_empty(),
        }
    }

    /// The date a picker opens on: the value itself, or the start of a range.
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        match self {
            InputValue::Single(date) => *date,
            InputValue::Range(range) => range.start,
        }
    }

    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        match self {
            InputValue::Single(value) => *value == Some(date),
            InputValue::Range(range) => range.start == Some(date) || range.end == Some(date),
        }
    }
}

impl From<NaiveDate> for InputValue {
    fn from(date: NaiveDate) -> Self {
        InputValue::Single(Some(date))
    }
}

impl From<RangeValue> for InputValue {
    fn from(range: RangeValue) -> Self {
        InputValue::Range(range)
    }
}

fn fmt_date(date: &Option<NaiveDate>) -> String {
    date.map_or_else(|| "-".to_owned(), |d| d.to_string())
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Single(date) => write!(f, "{}", fmt_date(date)),
            InputValue::Range(range) => {
                write!(f, "{}..{}", fmt_date(&range.start), fmt_date(&range.end))
            }
        }
    }
}
