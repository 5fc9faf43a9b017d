//! Headless date picker core for several calendar systems.
//!
//! [`provider`] holds the calendar arithmetic, [`ctrl`] the selection and
//! pagination state machine, [`ui`] what a host needs to draw and drive it.

pub mod config;
pub mod ctrl;
pub mod events;
pub mod provider;
pub mod ui;
