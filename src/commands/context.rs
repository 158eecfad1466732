//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::sync::Arc;

use crate::store::ReminderStore;

/// Shared context for all command handlers
///
/// Carries the services a handler needs to produce a reply. Today that is
/// only the reminder store; the store holds no in-memory state, so the
/// context is cheap to clone and share across handlers.
#[derive(Clone)]
pub struct CommandContext {
    pub store: Arc<ReminderStore>,
}

impl CommandContext {
    /// Create a new CommandContext around the given store
    pub fn new(store: ReminderStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
