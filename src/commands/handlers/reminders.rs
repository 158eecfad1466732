//! Reminder command handlers
//!
//! Handles: set, view, delete
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{bail, Result};
use log::info;

use crate::commands::context::CommandContext;
use crate::commands::handler::CommandHandler;
use crate::store::StoreError;

const INVALID_FORMAT_REPLY: &str =
    "Invalid reminder format. Please use /set <YYYY-MM-DD> <REMINDER>.";
const SET_REPLY: &str = "Reminder set.";
const NO_REMINDERS_REPLY: &str = "No reminders.";
const INVALID_INDEX_FORMAT_REPLY: &str = "Invalid index format. Please enter a valid index.";
const INVALID_INDEX_REPLY: &str = "Invalid index. Please enter a valid index.";
const DELETED_REPLY: &str = "Reminder deleted.";

/// Handler for reminder-related commands
pub struct RemindersHandler;

impl CommandHandler for RemindersHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["set", "view", "delete"]
    }

    fn handle(&self, ctx: &CommandContext, name: &str, arg_text: &str) -> Result<String> {
        match name {
            "set" => self.handle_set(ctx, arg_text),
            "view" => self.handle_view(ctx),
            "delete" => self.handle_delete(ctx, arg_text),
            other => bail!("handler received unroutable command '{other}'"),
        }
    }
}

impl RemindersHandler {
    /// Handle /set - create a new reminder
    fn handle_set(&self, ctx: &CommandContext, arg_text: &str) -> Result<String> {
        let (date, body) = match split_date_and_body(arg_text) {
            Some(parts) => parts,
            None => return Ok(INVALID_FORMAT_REPLY.to_string()),
        };

        ctx.store.append(date, body)?;
        info!("set reminder for {date}");
        Ok(SET_REPLY.to_string())
    }

    /// Handle /view - list all reminders
    fn handle_view(&self, ctx: &CommandContext) -> Result<String> {
        let reminders = ctx.store.list()?;
        if reminders.is_empty() {
            return Ok(NO_REMINDERS_REPLY.to_string());
        }

        let mut message = String::new();
        for (index, reminder) in reminders.iter().enumerate() {
            message.push_str(&format!("{}: {} ({})\n", index, reminder.text, reminder.date));
        }
        Ok(message)
    }

    /// Handle /delete - remove a reminder by display index
    fn handle_delete(&self, ctx: &CommandContext, arg_text: &str) -> Result<String> {
        let run = match first_digit_run(arg_text) {
            Some(r) => r,
            None => return Ok(INVALID_INDEX_FORMAT_REPLY.to_string()),
        };

        // A run too long for usize cannot index any list.
        let index: usize = match run.parse() {
            Ok(i) => i,
            Err(_) => return Ok(INVALID_INDEX_REPLY.to_string()),
        };

        match ctx.store.delete_at(index) {
            Ok(()) => {
                info!("deleted reminder at index {index}");
                Ok(DELETED_REPLY.to_string())
            }
            Err(StoreError::IndexOutOfRange { .. }) => Ok(INVALID_INDEX_REPLY.to_string()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Split trailing text into a date token and reminder body
///
/// Two-stage parse: trim leading whitespace, cut at the first interior
/// whitespace run, shape-check the head token as `YYYY-MM-DD`, keep
/// everything after the run as the body with no further trimming. The body
/// must be non-empty; internal and trailing whitespace stay part of it.
fn split_date_and_body(arg_text: &str) -> Option<(&str, &str)> {
    let text = arg_text.trim_start();
    let cut = text.find(char::is_whitespace)?;
    let (date, rest) = text.split_at(cut);
    if !is_date_shaped(date) {
        return None;
    }

    let body = rest.trim_start();
    if body.is_empty() {
        return None;
    }
    Some((date, body))
}

/// Check the `\d{4}-\d{2}-\d{2}` shape without interpreting the value
///
/// 2024-13-99 passes; dates are stored as entered, never as calendar values.
fn is_date_shaped(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 10
        && bytes[..4].iter().all(|b| b.is_ascii_digit())
        && bytes[4] == b'-'
        && bytes[5].is_ascii_digit()
        && bytes[6].is_ascii_digit()
        && bytes[7] == b'-'
        && bytes[8].is_ascii_digit()
        && bytes[9].is_ascii_digit()
}

/// Find the first run of ASCII digits anywhere in the text
///
/// Surrounding non-digit text is tolerated; with several runs present only
/// the first counts.
fn first_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
