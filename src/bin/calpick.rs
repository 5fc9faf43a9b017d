extern crate calpick as lib;

use flexi_logger::{FileSpec, Logger};
use lib::config::{load_suitable_config, Config};
use lib::ctrl::Picker;
use lib::events::{Event, EventSink};
use lib::provider::{CalendarKind, Calendarlike};
use lib::ui::{parse_command, render_months, Command, Theme};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "calpick",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "calpick - A date picker for the gregorian, jalali and hijri calendars."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the visible months non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(long = "months", help = "number of months shown side by side")]
    pub months: Option<u32>,

    #[structopt(
        long = "calendar",
        help = "calendar to open with (gregorian, jalali, hijri)"
    )]
    pub calendar: Option<CalendarKind>,

    #[structopt(long = "range", help = "select a range instead of a single date")]
    pub range: bool,

    #[structopt(long = "read-only", help = "ignore day interactions")]
    pub read_only: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(months) = self.months {
            config.month_count = months;
        }

        if let Some(kind) = self.calendar {
            let position = config.calendars.iter().position(|k| *k == kind);
            config.current_calendar = match position {
                Some(index) => index,
                None => {
                    config.calendars.push(kind);
                    config.calendars.len() - 1
                }
            };
        }

        if self.range && !config.range {
            config.range = true;
            config.value = None;
        }

        config.read_only |= self.read_only;
    }
}

fn print_page<S: EventSink>(
    picker: &Picker<S>,
    theme: &Theme,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", render_months(&picker.month_tables(), theme)?)?;
    writeln!(out, "value: {}", picker.value())?;
    out.flush()?;
    Ok(())
}

fn drain_events(events: &Receiver<Event>) {
    for event in events.try_iter() {
        log::info!("{}", event);
        println!("> {}", event);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let mut config = load_suitable_config(args.configfile.as_deref())?;
    args.apply_to(&mut config);

    let (sender, events) = mpsc::channel();
    let mut picker = config.build_picker(sender)?;
    let theme = Theme::default();

    print_page(&picker, &theme)?;

    if args.show {
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let today = picker.calendar().today();
        let command = match parse_command(&line, today) {
            Ok(command) => command,
            Err(err) => {
                log::warn!("{}", err);
                eprintln!("{}", err);
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        if let Err(err) = command.apply(&mut picker) {
            log::warn!("{}", err);
            eprintln!("{}", err);
        }

        drain_events(&events);
        print_page(&picker, &theme)?;
    }

    Ok(())
}
