//! Named command registration and dispatch.
//!
//! Extensions register callbacks under a command name; the host (menus,
//! keybindings, other extensions) invokes them later by that name.
//! Registration hands back a [`Disposable`] that unregisters the command.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use serde_json::Value;
use thiserror::Error;

use crate::dispose::Disposable;

/// Errors from command registration and dispatch.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command name is already taken by a live registration.
    #[error("Command already registered: {0}")]
    AlreadyRegistered(String),

    /// No command is registered under that name.
    #[error("Command not found: {0}")]
    NotFound(String),

    /// The command callback reported a failure.
    #[error("Command failed: {0}")]
    Failed(String),
}

/// Result of running a command callback.
pub type CommandResult = Result<Value, CommandError>;

type CommandCallback = Arc<dyn Fn(&[Value]) -> CommandResult + Send + Sync>;

struct Entry {
    /// Distinguishes this registration from any later one under the same
    /// name, so a stale unregistration cannot evict a successor.
    generation: u64,
    callback: CommandCallback,
}

#[derive(Default)]
struct RegistryInner {
    commands: HashMap<String, Entry>,
    next_generation: u64,
}

/// Registry of named commands shared by the host and all extensions.
///
/// Cheap to clone; clones share the same table.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `callback` under `command`.
    ///
    /// Returns a [`Disposable`] that unregisters the command; park it on the
    /// extension context so deactivation cleans it up. Names are first come,
    /// first served: a second registration under a live name fails with
    /// [`CommandError::AlreadyRegistered`].
    pub fn register(
        &self,
        command: impl Into<String>,
        callback: impl Fn(&[Value]) -> CommandResult + Send + Sync + 'static,
    ) -> Result<Disposable, CommandError> {
        let command = command.into();
        let generation = {
            let mut inner = self.lock();
            if inner.commands.contains_key(&command) {
                return Err(CommandError::AlreadyRegistered(command));
            }
            let generation = inner.next_generation;
            inner.next_generation += 1;
            inner.commands.insert(
                command.clone(),
                Entry {
                    generation,
                    callback: Arc::new(callback),
                },
            );
            generation
        };

        let weak = Arc::downgrade(&self.inner);
        Ok(Disposable::with_callback(move || {
            remove_registration(&weak, &command, generation);
        }))
    }

    /// Run the command registered under `command` with `args`.
    ///
    /// The callback runs outside the registry lock, so commands may freely
    /// register or unregister other commands.
    pub fn run(&self, command: &str, args: &[Value]) -> CommandResult {
        let callback = self
            .lock()
            .commands
            .get(command)
            .map(|entry| Arc::clone(&entry.callback));
        match callback {
            Some(callback) => callback(args),
            None => Err(CommandError::NotFound(command.to_string())),
        }
    }

    /// Whether a command is currently registered under `command`.
    #[must_use]
    pub fn is_registered(&self, command: &str) -> bool {
        self.lock().commands.contains_key(command)
    }

    /// Names of all currently registered commands, sorted.
    #[must_use]
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().commands.keys().cloned().collect();
        names.sort();
        names
    }
}

fn remove_registration(
    weak: &Weak<Mutex<RegistryInner>>,
    command: &str,
    generation: u64,
) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
    let matches = inner
        .commands
        .get(command)
        .is_some_and(|entry| entry.generation == generation);
    if matches {
        inner.commands.remove(command);
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.lock().commands.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_and_run() {
        let registry = CommandRegistry::new();
        registry
            .register("curate.count", |args| {
                Ok(json!(args.len()))
            })
            .unwrap();

        let result = registry.run("curate.count", &[json!(1), json!(2)]).unwrap();
        assert_eq!(result, json!(2));
    }

    #[test]
    fn unknown_command_is_not_found() {
        let registry = CommandRegistry::new();
        assert!(matches!(
            registry.run("nope", &[]),
            Err(CommandError::NotFound(_))
        ));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let registry = CommandRegistry::new();
        let _keep = registry.register("x", |_| Ok(Value::Null)).unwrap();
        assert!(matches!(
            registry.register("x", |_| Ok(Value::Null)),
            Err(CommandError::AlreadyRegistered(_))
        ));
    }

    #[test]
    fn dispose_unregisters() {
        let registry = CommandRegistry::new();
        let sub = registry.register("x", |_| Ok(Value::Null)).unwrap();
        assert!(registry.is_registered("x"));

        sub.dispose();
        assert!(!registry.is_registered("x"));
        assert!(matches!(
            registry.run("x", &[]),
            Err(CommandError::NotFound(_))
        ));
    }

    #[test]
    fn stale_disposable_does_not_evict_successor() {
        let registry = CommandRegistry::new();
        let first = registry.register("x", |_| Ok(json!("first"))).unwrap();
        first.dispose();

        let _second = registry.register("x", |_| Ok(json!("second"))).unwrap();
        // Disposing the dead handle again must not touch the new entry.
        first.dispose();

        assert_eq!(registry.run("x", &[]).unwrap(), json!("second"));
    }

    #[test]
    fn callback_may_use_the_registry() {
        let registry = CommandRegistry::new();
        let inner = registry.clone();
        registry
            .register("outer", move |_| {
                // Must not deadlock.
                Ok(json!(inner.is_registered("outer")))
            })
            .unwrap();

        assert_eq!(registry.run("outer", &[]).unwrap(), json!(true));
    }

    #[test]
    fn names_are_sorted() {
        let registry = CommandRegistry::new();
        let _b = registry.register("b", |_| Ok(Value::Null)).unwrap();
        let _a = registry.register("a", |_| Ok(Value::Null)).unwrap();
        assert_eq!(registry.command_names(), vec!["a", "b"]);
    }
}
