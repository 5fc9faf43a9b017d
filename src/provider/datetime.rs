use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

pub const MONTHS_PER_YEAR: u32 = 12;

/// A date expressed in some calendar system.
///
/// `month` is zero based (`0..=11`), `day` is one based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDate { year, month, day }
    }

    pub fn month_index(&self) -> MonthIndex {
        MonthIndex::new(self.month, self.year)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// A `(year, month)` pair with month arithmetic wrapping across years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthIndex {
    month: u32,
    year: i32,
}

impl MonthIndex {
    /// Months outside `0..=11` are carried into the year.
    pub fn new(month: u32, year: i32) -> Self {
        MonthIndex {
            month: month % MONTHS_PER_YEAR,
            year: year + (month / MONTHS_PER_YEAR) as i32,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn next(&self) -> Self {
        if self.month + 1 < MONTHS_PER_YEAR {
            MonthIndex {
                month: self.month + 1,
                year: self.year,
            }
        } else {
            MonthIndex {
                month: 0,
                year: self.year + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month > 0 {
            MonthIndex {
                month: self.month - 1,
                year: self.year,
            }
        } else {
            MonthIndex {
                month: MONTHS_PER_YEAR - 1,
                year: self.year - 1,
            }
        }
    }

    fn ordinal(&self) -> i64 {
        self.year as i64 * MONTHS_PER_YEAR as i64 + self.month as i64
    }

    fn from_ordinal(ordinal: i64) -> Self {
        MonthIndex {
            month: ordinal.rem_euclid(MONTHS_PER_YEAR as i64) as u32,
            year: ordinal.div_euclid(MONTHS_PER_YEAR as i64) as i32,
        }
    }
}

impl Add<u32> for MonthIndex {
    type Output = MonthIndex;
    fn add(self, rhs: u32) -> Self::Output {
        MonthIndex::from_ordinal(self.ordinal() + rhs as i64)
    }
}

impl Sub<u32> for MonthIndex {
    type Output = MonthIndex;
    fn sub(self, rhs: u32) -> Self::Output {
        MonthIndex::from_ordinal(self.ordinal() - rhs as i64)
    }
}

impl PartialOrd for MonthIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}
