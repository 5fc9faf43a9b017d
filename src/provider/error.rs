use nom;
use std::convert::From;
use std::error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    InvalidCalendarIndex,
    InvalidBounds,
    InvalidMonthCount,
    UnsupportedDate,
    ValueModeMismatch,
    UnknownCalendar,
    ConfigParse,
    DateParse,
    CommandParse,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::ErrorKind> for Error {
    fn from(kind: io::ErrorKind) -> Error {
        Error::from(io::Error::from(kind))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(parse_error: chrono::ParseError) -> Error {
        Error::new(
            ErrorKind::DateParse,
            format!("Could not parse date: {}", parse_error).as_str(),
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &toml_error.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl<E: std::fmt::Debug> From<nom::Err<E>> for Error {
    fn from(error: nom::Err<E>) -> Self {
        Error::new(
            ErrorKind::CommandParse,
            &format!("Error while parsing: {:?}", error),
        )
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        if let ErrorKind::IOError(err) = err.kind {
            err
        } else {
            let message = match err.message {
                Some(msg) => msg,
                None => err.kind.as_str(),
            };
            io::Error::new(io::ErrorKind::InvalidInput, message)
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::InvalidCalendarIndex => "calendar index out of range".to_owned(),
            ErrorKind::InvalidBounds => "minimum date lies after maximum date".to_owned(),
            ErrorKind::InvalidMonthCount => "month count must be at least 1".to_owned(),
            ErrorKind::UnsupportedDate => "date outside the calendar's range".to_owned(),
            ErrorKind::ValueModeMismatch => "value does not match selection mode".to_owned(),
            ErrorKind::UnknownCalendar => "unknown calendar system".to_owned(),
            ErrorKind::ConfigParse => "invalid configuration".to_owned(),
            ErrorKind::DateParse => "invalid date format".to_owned(),
            ErrorKind::CommandParse => "invalid command".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = Error::new(ErrorKind::InvalidCalendarIndex, "index 3 of 2 calendars");
        assert_eq!(
            err.to_string(),
            "calendar index out of range: index 3 of 2 calendars"
        );
    }

    #[test]
    fn io_error_round_trips() {
        let err = Error::from(io::ErrorKind::NotFound);
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn chrono_parse_error_is_date_parse() {
        let parse_err = "2024-13-01"
            .parse::<chrono::NaiveDate>()
            .expect_err("month 13 does not exist");
        assert!(matches!(Error::from(parse_err).kind, ErrorKind::DateParse));
    }
}
