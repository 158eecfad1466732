//! Command handler registry and dispatch
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, error};

use super::context::CommandContext;
use super::handler::CommandHandler;

/// Reply sent when a handler fails on the storage side
///
/// The diagnostic detail goes to the operator log; the user only learns that
/// the command did not take effect.
pub const FAILURE_REPLY: &str =
    "Something went wrong while accessing your reminders. Please try again.";

/// Registry mapping command names to handlers
///
/// Multiple command names can map to the same handler if they share logic.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(HelpHandler));
/// registry.register(Arc::new(RemindersHandler));
///
/// if let Some(reply) = registry.dispatch(&ctx, "view", "") {
///     send(reply);
/// }
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for its declared command names
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        for name in handler.command_names() {
            self.handlers.insert(name, Arc::clone(&handler));
        }
    }

    /// Get handler for a command name
    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered command names
    ///
    /// Counts names, not unique handlers; a handler registered for several
    /// names is counted once per name.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Get all registered command names
    pub fn command_names(&self) -> impl Iterator<Item = &&'static str> {
        self.handlers.keys()
    }

    /// Dispatch a command and produce the reply text
    ///
    /// Returns `None` for an unregistered command name (the transport stays
    /// silent, matching a bot that never routes unknown commands to a
    /// handler). A handler error is logged with the command that triggered
    /// it and turned into [`FAILURE_REPLY`], so dispatch always answers a
    /// known command.
    pub fn dispatch(&self, ctx: &CommandContext, name: &str, arg_text: &str) -> Option<String> {
        let handler = match self.get(name) {
            Some(h) => h,
            None => {
                debug!("ignoring unknown command '{name}'");
                return None;
            }
        };

        match handler.handle(ctx, name, arg_text) {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!("command '{name}' failed: {e:#}");
                Some(FAILURE_REPLY.to_string())
            }
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
