use chrono::NaiveDate;
use std::fmt;
use std::sync::mpsc;

use crate::ctrl::InputValue;
use crate::provider::Day;

/// Notifications a picker hands to its host, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The anchor month changed. `month` is zero based.
    PageChange { year: i32, month: u32 },
    Input(InputValue),
    /// A range selection was started.
    Drag,
    DayHover(Day),
    DayClick(NaiveDate),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::PageChange { year, month } => write!(f, "page-change {}-{:02}", year, month + 1),
            Event::Input(value) => write!(f, "input {}", value),
            Event::Drag => write!(f, "drag"),
            Event::DayHover(day) => write!(f, "day-hover {}", day.date),
            Event::DayClick(date) => write!(f, "day-click {}", date),
        }
    }
}

/// Receiver for picker notifications. Delivery is synchronous.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl<F: FnMut(Event)> EventSink for F {
    fn emit(&mut self, event: Event) {
        self(event)
    }
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl EventSink for mpsc::Sender<Event> {
    fn emit(&mut self, event: Event) {
        if let Err(e) = self.send(event) {
            log::warn!("Dropped event, receiver is gone: {}", e.0);
        }
    }
}
