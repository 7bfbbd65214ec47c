//! Line-oriented control channel for the running simulation
//!
//! A dedicated thread drains [`ControlMessage`]s and applies each command
//! to the shared store, taking the same exclusive lock the scheduler uses
//! for exactly one mutation at a time. `Shutdown` (or a disconnected
//! sender) ends the loop promptly; the blocking read on the raw input
//! stream stays with the host.

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use log::{info, warn};

use crate::simulation::states::BodyId;
use crate::simulation::store::BodyStore;

/// Messages consumed by the command thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlMessage {
    /// One raw command line from the control channel.
    Line(String),
    /// Cooperative stop; the thread exits after the current message.
    Shutdown,
}

/// What a single dispatched command did; surfaced for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// `clear` / `clear --all`: store truncated, capacity reset.
    Cleared,
    /// `clear --id` marked this body dead.
    Removed(BodyId),
    /// `clear --id` named a body that does not exist; nothing mutated.
    NotFound(BodyId),
    /// Malformed arguments: bad flag, missing or non-integer id.
    Invalid(String),
    /// Keyword reserved for a later revision (`create`, `set`).
    Reserved(&'static str),
    /// Unknown keyword; nothing mutated.
    Unsupported(String),
    /// Blank line.
    Ignored,
}

/// Applies control commands to the shared body store.
pub struct CommandProcessor {
    store: Arc<Mutex<BodyStore>>,
}

impl CommandProcessor {
    pub fn new(store: Arc<Mutex<BodyStore>>) -> Self {
        Self { store }
    }

    /// Spawn the consumer thread. It drains `commands` until a `Shutdown`
    /// message arrives or every sender is gone.
    pub fn spawn(self, commands: Receiver<ControlMessage>) -> JoinHandle<()> {
        thread::spawn(move || {
            while let Ok(message) = commands.recv() {
                match message {
                    ControlMessage::Line(line) => {
                        self.dispatch(&line);
                    }
                    ControlMessage::Shutdown => break,
                }
            }
        })
    }

    /// Parse and apply one command line. Keywords match case-insensitively
    /// and mutations hold the store lock only for this single command.
    pub fn dispatch(&self, line: &str) -> CommandOutcome {
        let mut tokens = line.split_whitespace();
        let outcome = match tokens.next() {
            None => CommandOutcome::Ignored,
            Some(word) if word.eq_ignore_ascii_case("create") => CommandOutcome::Reserved("create"),
            Some(word) if word.eq_ignore_ascii_case("clear") => self.clear(tokens),
            Some(word) if word.eq_ignore_ascii_case("set") => CommandOutcome::Reserved("set"),
            Some(word) => CommandOutcome::Unsupported(word.to_string()),
        };
        report(&outcome);
        outcome
    }

    fn clear<'a>(&self, mut args: impl Iterator<Item = &'a str>) -> CommandOutcome {
        match args.next() {
            None => {
                self.lock().clear_all();
                CommandOutcome::Cleared
            }
            Some(flag) if flag.eq_ignore_ascii_case("--all") => {
                self.lock().clear_all();
                CommandOutcome::Cleared
            }
            Some(flag) if flag.eq_ignore_ascii_case("--id") => match args.next() {
                None => CommandOutcome::Invalid("id not provided".to_string()),
                Some(raw) => match raw.parse::<u32>() {
                    Err(_) => CommandOutcome::Invalid(format!("id field is invalid: {raw}")),
                    Ok(id) => {
                        let id = BodyId(id);
                        if self.lock().mark_dead(id) {
                            CommandOutcome::Removed(id)
                        } else {
                            CommandOutcome::NotFound(id)
                        }
                    }
                },
            },
            Some(flag) => CommandOutcome::Invalid(format!("invalid flag: {flag}")),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BodyStore> {
        self.store.lock().expect("body store lock poisoned")
    }
}

fn report(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Cleared => info!("store cleared"),
        CommandOutcome::Removed(id) => info!("body {id} marked for removal"),
        CommandOutcome::NotFound(id) => warn!("body {id} does not exist"),
        CommandOutcome::Invalid(reason) => warn!("{reason}"),
        CommandOutcome::Reserved(word) => {
            info!("{word} takes its parameters from the host parser; ignored")
        }
        CommandOutcome::Unsupported(word) => warn!("{word} is not a supported command"),
        CommandOutcome::Ignored => {}
    }
}
