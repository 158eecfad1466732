//! # Command System
//!
//! Text command dispatch for the reminder bot: a handler trait, a registry
//! mapping command names to handlers, and the handlers themselves. Commands
//! are stateless request/response; each dispatch takes the trailing text and
//! returns the reply string.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;

pub use context::CommandContext;
pub use handler::CommandHandler;
pub use handlers::{HelpHandler, RemindersHandler};
pub use registry::{CommandRegistry, FAILURE_REPLY};

use std::sync::Arc;

/// Build a registry with every built-in handler registered
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(HelpHandler));
    registry.register(Arc::new(RemindersHandler));
    registry
}
