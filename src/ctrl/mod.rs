pub mod pages;
pub mod picker;
pub mod value;

pub use pages::{visible_months, VisibleMonth};
pub use picker::{CalendarSwitch, Picker, PickerOptions, PickerState};
pub use value::{InputValue, RangeValue};
