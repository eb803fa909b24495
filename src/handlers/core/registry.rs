//! Top-level command registry.
//!
//! The `Registry` maps every top-level command name to its tree and keeps
//! per-command usage counters. It is written during startup and read
//! concurrently by every dispatch afterwards.

use crate::command::Command;
use crate::error::RegistrationError;
use chatcmd_proto::fold_key;
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// A top-level command as stored in the registry.
#[derive(Debug)]
pub struct RegisteredCommand {
    command: Command,
    /// Set once at registration; selects the router path that may reach it.
    as_interaction: bool,
    uses: AtomicU64,
}

impl RegisteredCommand {
    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn name(&self) -> &str {
        self.command.name()
    }

    /// Whether this command was registered for the interaction path.
    pub fn is_interaction(&self) -> bool {
        self.as_interaction
    }

    pub(crate) fn record_use(&self) {
        self.uses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uses(&self) -> u64 {
        self.uses.load(Ordering::Relaxed)
    }
}

/// Registry of top-level commands.
#[derive(Default)]
pub struct Registry {
    commands: RwLock<HashMap<String, Arc<RegisteredCommand>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level command.
    ///
    /// Fails without touching the registry if the command is a sub node or
    /// if its name or any alias is already claimed by another top-level
    /// command's name or alias.
    pub fn register(
        &self,
        command: Command,
        as_interaction: bool,
    ) -> Result<Arc<RegisteredCommand>, RegistrationError> {
        if !command.is_parent() {
            return Err(RegistrationError::NotAParent(command.name().to_string()));
        }

        let mut commands = self.commands.write();
        for key in command.keys() {
            if commands.values().any(|c| c.command.answers_to(key)) {
                return Err(RegistrationError::AlreadyExists(key.to_string()));
            }
        }

        let entry = Arc::new(RegisteredCommand {
            command,
            as_interaction,
            uses: AtomicU64::new(0),
        });
        commands.insert(entry.name().to_string(), Arc::clone(&entry));

        info!(
            command = %entry.name(),
            aliases = ?entry.command.aliases(),
            interaction = as_interaction,
            "Registered command"
        );
        Ok(entry)
    }

    /// Exact, case-insensitive lookup by name. Aliases are not consulted.
    pub fn lookup_by_name(&self, name: &str) -> Option<Arc<RegisteredCommand>> {
        self.commands.read().get(&fold_key(name)).cloned()
    }

    /// Lookup by name, falling back to a scan of every alias.
    pub fn lookup_by_name_or_alias(&self, key: &str) -> Option<Arc<RegisteredCommand>> {
        let folded = fold_key(key);
        let commands = self.commands.read();
        commands
            .get(&folded)
            .or_else(|| {
                commands
                    .values()
                    .find(|c| c.command.aliases().iter().any(|a| *a == folded))
            })
            .cloned()
    }

    pub fn all_names(&self) -> BTreeSet<String> {
        self.commands.read().keys().cloned().collect()
    }

    /// Snapshot of every registered command, sorted by name.
    pub fn all(&self) -> Vec<Arc<RegisteredCommand>> {
        let mut all: Vec<_> = self.commands.read().values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }

    pub fn len(&self) -> usize {
        self.commands.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.read().is_empty()
    }

    /// Usage counts, most used first. Unused commands are omitted.
    pub fn command_stats(&self) -> Vec<(String, u64)> {
        let mut stats: Vec<_> = self
            .commands
            .read()
            .values()
            .map(|c| (c.name().to_string(), c.uses()))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        stats
    }
}
