//! Usage message handler
//!
//! Handles: start, help
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;

use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;

/// Usage text sent for /start and /help
const USAGE: &str = "Hi!\nUse /set <YYYY-MM-DD> <REMINDER> to add a reminder, \
                     /view to view all reminders, and /delete <index> to delete a reminder";

/// Handler for the greeting/usage commands
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start", "help"]
    }

    fn handle(&self, _ctx: &CommandContext, _name: &str, _arg_text: &str) -> Result<String> {
        Ok(USAGE.to_string())
    }
}
