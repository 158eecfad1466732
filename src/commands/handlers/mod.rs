//! Command handler implementations
//!
//! Each submodule owns one handler struct covering a group of related
//! commands.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod help;
pub mod reminders;

pub use help::HelpHandler;
pub use reminders::RemindersHandler;
