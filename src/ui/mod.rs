pub mod command;
pub mod month;
pub mod text;

pub use command::{parse_command, Command};
pub use month::MonthTable;
pub use text::{render_month, render_months, Theme};
