use std::io::{self, BufRead, Write};

use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, info};

use memobot::commands::{default_registry, CommandContext};
use memobot::core::Config;
use memobot::store::ReminderStore;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting reminder bot...");

    let store = ReminderStore::new(config.store_path.clone());
    store.init()?;
    info!("reminder file ready at {}", store.path().display());

    let ctx = CommandContext::new(store);
    let registry = default_registry();

    // Console transport: one command per line in, one reply out. Commands
    // look like "/set 2024-01-01 pay rent"; everything after the command
    // word is handed to the handler verbatim.
    let stdin = io::stdin();
    let stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim_start();
        if input.is_empty() {
            continue;
        }
        if input.trim_end() == "/quit" {
            break;
        }

        let Some((name, arg_text)) = parse_command(input) else {
            debug!("ignoring non-command input");
            continue;
        };

        if let Some(reply) = registry.dispatch(&ctx, name, arg_text) {
            let mut out = stdout.lock();
            writeln!(out, "{reply}")?;
        }
    }

    info!("Shutting down");
    Ok(())
}

/// Split `/set 2024-01-01 rent` into `("set", "2024-01-01 rent")`
///
/// Only the single separator character after the command word is consumed;
/// any further whitespace stays part of the trailing text for the handlers
/// to interpret. Input without a leading `/` is not a command.
fn parse_command(input: &str) -> Option<(&str, &str)> {
    let rest = input.strip_prefix('/')?;
    let (name, arg_text) = match rest.split_once(char::is_whitespace) {
        Some(parts) => parts,
        None => (rest, ""),
    };
    if name.is_empty() {
        return None;
    }
    Some((name, arg_text))
}
