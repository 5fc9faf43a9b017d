use chrono::NaiveDate;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ctrl::{CalendarSwitch, InputValue, Picker, PickerOptions, RangeValue};
use crate::events::EventSink;
use crate::provider::{Calendar, CalendarKind, Error, ErrorKind, Result};

const CONFIG_PATH_ENV_VAR: &str = "CALPICK_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("calpick").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".calpick.toml"));
    }

    locations
}

/// Initial value as written in the config file: a bare date or a table with
/// `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ValueSpec {
    Date(NaiveDate),
    Range(RangeValue),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub calendars: Vec<CalendarKind>,
    pub current_calendar: usize,
    pub month_count: u32,
    pub range: bool,
    pub read_only: bool,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    pub value: Option<ValueSpec>,
    pub calendar_switch: CalendarSwitch,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            calendars: vec![CalendarKind::Gregorian],
            current_calendar: 0,
            month_count: 1,
            range: false,
            read_only: false,
            min: None,
            max: None,
            value: None,
            calendar_switch: CalendarSwitch::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        Config::from_toml_str(&content).map_err(|err| {
            Error::new(
                ErrorKind::ConfigParse,
                &format!("{}: {}", path.display(), err),
            )
        })
    }

    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions::default()
            .month_count(self.month_count)
            .current_calendar(self.current_calendar)
            .range(self.range)
            .read_only(self.read_only)
            .min(self.min)
            .max(self.max)
            .calendar_switch(self.calendar_switch)
    }

    /// The configured value in the shape the picker's mode expects.
    pub fn input_value(&self) -> Result<InputValue> {
        match (self.value, self.range) {
            (None, range) => Ok(InputValue::empty(range)),
            (Some(ValueSpec::Date(date)), false) => Ok(InputValue::Single(Some(date))),
            (Some(ValueSpec::Range(range)), true) => Ok(InputValue::Range(range)),
            (Some(ValueSpec::Date(date)), true) => Err(Error::new(
                ErrorKind::ValueModeMismatch,
                &format!("single date {} given in range mode", date),
            )),
            (Some(ValueSpec::Range(_)), false) => Err(Error::new(
                ErrorKind::ValueModeMismatch,
                "range given in single date mode",
            )),
        }
    }

    pub fn calendars(&self) -> Vec<Calendar> {
        self.calendars
            .iter()
            .map(|kind| Calendar::new(*kind))
            .collect()
    }

    pub fn build_picker<S: EventSink>(&self, sink: S) -> Result<Picker<S>> {
        let value = self.input_value()?;
        Picker::new(self.calendars(), self.picker_options(), value, sink)
    }
}

/// Load `path` if given, otherwise the first existing file among the default
/// locations. Falls back to the defaults when there is none.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Loading config from {}", path.display());
        return Config::from_file(path);
    }

    let found = find_configfile_locations().into_iter().find(|p| p.is_file());
    match found {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            Config::from_file(&path)
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
