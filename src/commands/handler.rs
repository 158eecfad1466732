//! Command handler trait and infrastructure
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;

use super::context::CommandContext;

/// Trait for chat command handlers
///
/// Each handler processes one or more commands. Handlers are registered with
/// a [`CommandRegistry`](super::registry::CommandRegistry) and dispatched by
/// command name. A handler receives the name it was dispatched under plus the
/// trailing text after the command word (the transport strips the word
/// itself) and returns the reply to send back.
///
/// Malformed user input is answered inside the handler with a corrective
/// reply (`Ok`). An `Err` means the reminder file itself failed; the registry
/// logs it and substitutes a generic failure reply, so the user always gets
/// an answer.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// impl CommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     fn handle(&self, _ctx: &CommandContext, _name: &str, _arg_text: &str) -> Result<String> {
///         Ok("pong".to_string())
///     }
/// }
/// ```
pub trait CommandHandler: Send + Sync {
    /// Command name(s) this handler processes
    ///
    /// A handler can process multiple commands if they share logic.
    fn command_names(&self) -> &'static [&'static str];

    /// Handle the command and produce the reply text
    ///
    /// # Arguments
    ///
    /// * `ctx` - Shared command context with the reminder store
    /// * `name` - Command name this dispatch matched
    /// * `arg_text` - Raw trailing text after the command word
    fn handle(&self, ctx: &CommandContext, name: &str, arg_text: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait must stay object-safe; the registry stores dyn handlers.
    fn _assert_object_safe(_: &dyn CommandHandler) {}
}
