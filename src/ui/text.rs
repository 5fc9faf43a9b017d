use chrono::Weekday;
use itertools::Itertools;
use std::fmt::{self, Display, Write};

use super::MonthTable;
use crate::provider::Day;

#[derive(Clone, Debug)]
pub struct Theme {
    pub today_char: char,
    pub selected_char: char,
    pub in_range_char: char,
    pub disabled_char: char,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            today_char: '*',
            selected_char: '#',
            in_range_char: '~',
            disabled_char: 'x',
        }
    }
}

struct DayCell<'a> {
    day: &'a Day,
    theme: &'a Theme,
}

impl DayCell<'_> {
    const CELL_WIDTH: usize = 4;
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arg_today = if self.day.today {
            self.theme.today_char
        } else {
            ' '
        };

        let arg_state = if self.day.selected {
            self.theme.selected_char
        } else if self.day.in_range {
            self.theme.in_range_char
        } else if self.day.disabled {
            self.theme.disabled_char
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_state, self.day.day_num())
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Plain text grid of one month: title, weekday header and one line per week.
pub fn render_month(table: &MonthTable<'_>, theme: &Theme) -> Result<String, fmt::Error> {
    use crate::provider::Calendarlike;

    const COLUMNS: usize = 7;
    let mut out = String::new();

    writeln!(
        out,
        "{:^width$}",
        table.title(),
        width = COLUMNS * DayCell::CELL_WIDTH
    )?;

    let mut weekday = table.calendar.first_weekday();
    let header = (0..COLUMNS)
        .map(|_| {
            let label = format!(
                "{:>width$}",
                weekday_label(weekday),
                width = DayCell::CELL_WIDTH
            );
            weekday = weekday.succ();
            label
        })
        .join("");
    writeln!(out, "{}", header)?;

    let days = table.days();
    let blanks = std::iter::repeat(" ".repeat(DayCell::CELL_WIDTH))
        .take(table.leading_blanks() as usize);
    let cells = days.iter().map(|day| DayCell { day, theme }.to_string());

    for week in &blanks.chain(cells).chunks(COLUMNS) {
        writeln!(out, "{}", week.collect::<String>().trim_end())?;
    }

    Ok(out)
}

/// All visible months, separated by an empty line.
pub fn render_months(tables: &[MonthTable<'_>], theme: &Theme) -> Result<String, fmt::Error> {
    let rendered: Vec<String> = tables
        .iter()
        .map(|table| render_month(table, theme))
        .collect::<Result<_, _>>()?;
    Ok(rendered.join("\n"))
}
