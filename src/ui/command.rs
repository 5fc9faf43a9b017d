use chrono::NaiveDate;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, char, digit1, space0, space1},
    combinator::{all_consuming, map, map_res, opt, recognize, verify},
    error::{ErrorKind as NomErrorKind, ParseError},
    sequence::{delimited, pair, preceded, tuple},
    Err, IResult,
};

use crate::ctrl::Picker;
use crate::events::EventSink;
use crate::provider::{Calendarlike, Error, ErrorKind, Result};

/// A host interaction, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next(u32),
    Prev(u32),
    Click(NaiveDate),
    Hover(NaiveDate),
    Drag(NaiveDate),
    Calendar(usize),
    Show,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Repeatable(fn(u32) -> Command),
    Date(fn(NaiveDate) -> Command),
    Index(fn(usize) -> Command),
    NoArg(Command),
}

const COMMANDS: &[(&str, Verb)] = &[
    ("next", Verb::Repeatable(Command::Next)),
    ("n", Verb::Repeatable(Command::Next)),
    ("prev", Verb::Repeatable(Command::Prev)),
    ("p", Verb::Repeatable(Command::Prev)),
    ("click", Verb::Date(Command::Click)),
    ("hover", Verb::Date(Command::Hover)),
    ("drag", Verb::Date(Command::Drag)),
    ("calendar", Verb::Index(Command::Calendar)),
    ("show", Verb::NoArg(Command::Show)),
    ("quit", Verb::NoArg(Command::Quit)),
    ("q", Verb::NoArg(Command::Quit)),
];

fn action(input: &str) -> IResult<&str, Verb> {
    let (rest, name) = alpha1(input)?;
    match COMMANDS.iter().find(|(n, _)| *n == name) {
        Some((_, verb)) => Ok((rest, *verb)),
        None => Err(Err::Failure(ParseError::from_error_kind(
            input,
            NomErrorKind::Tag,
        ))),
    }
}

/// Upper bound for a repeat prefix such as `12next`.
pub const MAX_REPEAT: u32 = 1200;

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse::<u32>)(input)
}

fn repeat(input: &str) -> IResult<&str, u32> {
    verify(number, |n: &u32| (1..=MAX_REPEAT).contains(n))(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateArg<'a> {
    Today,
    Iso(&'a str),
}

impl DateArg<'_> {
    fn resolve(self, today: NaiveDate) -> Result<NaiveDate> {
        match self {
            DateArg::Today => Ok(today),
            DateArg::Iso(text) => match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                Ok(date) => Ok(date),
                Err(e) => {
                    let message = format!("'{}' is not a date", text);
                    Err(Error::from(e).with_msg(&message))
                }
            },
        }
    }
}

fn date_arg(input: &str) -> IResult<&str, DateArg<'_>> {
    alt((
        map(tag("today"), |_: &str| DateArg::Today),
        map(
            recognize(tuple((
                opt(char('-')),
                digit1,
                char('-'),
                digit1,
                char('-'),
                digit1,
            ))),
            DateArg::Iso,
        ),
    ))(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arg<'a> {
    None,
    Date(DateArg<'a>),
    Index(usize),
}

fn command(input: &str) -> IResult<&str, (Verb, Option<u32>, Arg<'_>)> {
    let (rest, (count, verb)) = pair(opt(repeat), action)(input)?;

    match (verb, count) {
        (Verb::Repeatable(_), _) => Ok((rest, (verb, count, Arg::None))),
        (Verb::Date(_), None) => {
            let (rest, date) = preceded(space1, date_arg)(rest)?;
            Ok((rest, (verb, None, Arg::Date(date))))
        }
        (Verb::Index(_), None) => {
            let (rest, idx) = preceded(space1, number)(rest)?;
            Ok((rest, (verb, None, Arg::Index(idx as usize))))
        }
        (Verb::NoArg(_), None) => Ok((rest, (verb, None, Arg::None))),
        _ => Err(Err::Failure(ParseError::from_error_kind(
            input,
            NomErrorKind::Digit,
        ))),
    }
}

/// Parse one line of input.
///
/// Repeatable commands take a count prefix (`3next`) of at most
/// [`MAX_REPEAT`]. `click`, `hover` and `drag` take an ISO date or `today`.
pub fn parse_command(line: &str, today: NaiveDate) -> Result<Command> {
    let (_, (verb, count, arg)) = all_consuming(delimited(space0, command, space0))(line)?;

    match (verb, arg) {
        (Verb::Repeatable(f), _) => Ok(f(count.unwrap_or(1))),
        (Verb::Date(f), Arg::Date(date)) => Ok(f(date.resolve(today)?)),
        (Verb::Index(f), Arg::Index(idx)) => Ok(f(idx)),
        (Verb::NoArg(cmd), _) => Ok(cmd),
        _ => Err(Error::new(ErrorKind::CommandParse, line)),
    }
}

impl Command {
    /// Run the command against `picker`. `Show` and `Quit` are left to the
    /// caller.
    pub fn apply<S: EventSink>(&self, picker: &mut Picker<S>) -> Result<()> {
        match *self {
            Command::Next(n) => {
                for _ in 0..n {
                    if !picker.next() {
                        break;
                    }
                }
            }
            Command::Prev(n) => {
                for _ in 0..n {
                    if !picker.prev() {
                        break;
                    }
                }
            }
            Command::Click(date) => picker.on_day_click(date),
            Command::Hover(date) => {
                let day = picker
                    .calendar()
                    .day(date)
                    .ok_or_else(|| Error::new(ErrorKind::UnsupportedDate, &date.to_string()))?;
                picker.on_day_hover(day);
            }
            Command::Drag(date) => {
                if !picker.options().range {
                    return Err(Error::new(
                        ErrorKind::CommandParse,
                        "drag needs a picker in range mode",
                    ));
                }
                picker.on_drag_start(date);
            }
            Command::Calendar(index) => picker.switch_calendar(index)?,
            Command::Show | Command::Quit => {}
        }
        Ok(())
    }
}
