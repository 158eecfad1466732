// Core layer - configuration
pub mod core;

// Store layer - durable reminder records
pub mod store;

// Application layer - command dispatch
pub mod commands;

// Re-export config for convenience
pub use self::core::Config;

// Re-export the command system surface
pub use commands::{default_registry, CommandContext, CommandHandler, CommandRegistry};

// Re-export store items
pub use store::{Reminder, ReminderStore, StoreError, StoreResult};
