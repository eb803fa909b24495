//! Accumulator that validates and freezes a [`Command`].

use super::{Command, CommandArgument, Permission};
use crate::error::RegistrationError;
use crate::handlers::{Handler, InteractionHandler, TextHandler};
use chatcmd_proto::fold_key;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// Collects the fields of a command, then validates them on `build_*`.
///
/// ```ignore
/// let say = CommandBuilder::new("say")
///     .alias("s")
///     .description("Say something")
///     .usage("s!say <greetings|farewell>")
///     .text_handler(SayHandler)
///     .subcommand(greetings)
///     .build_parent()?;
/// ```
#[derive(Default)]
pub struct CommandBuilder {
    name: String,
    aliases: Vec<String>,
    description: Option<String>,
    usage: Option<String>,
    permission: Option<Arc<dyn Permission>>,
    arguments: Vec<CommandArgument>,
    handler: Option<Handler>,
    children: Vec<Command>,
}

impl CommandBuilder {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: fold_key(name.as_ref()),
            ..Self::default()
        }
    }

    pub fn alias(mut self, alias: impl AsRef<str>) -> Self {
        self.aliases.push(fold_key(alias.as_ref()));
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|a| fold_key(a.as_ref())));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn argument(mut self, argument: CommandArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn arguments(mut self, arguments: impl IntoIterator<Item = CommandArgument>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    pub fn permission(mut self, permission: Arc<dyn Permission>) -> Self {
        self.permission = Some(permission);
        self
    }

    pub fn handler(mut self, handler: Handler) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn text_handler<H: TextHandler + 'static>(self, handler: H) -> Self {
        self.handler(Handler::text(handler))
    }

    pub fn interaction_handler<H: InteractionHandler + 'static>(self, handler: H) -> Self {
        self.handler(Handler::interaction(handler))
    }

    /// Attach a child. Sibling collisions are reported by `build_parent`.
    pub fn subcommand(mut self, child: Command) -> Self {
        self.children.push(child);
        self
    }

    /// Finish as a parent node (may be registered, may host children).
    pub fn build_parent(self) -> Result<Command, RegistrationError> {
        let children = self.validate_children()?;
        self.finish(Some(children))
    }

    /// Finish as a leaf sub node. Fails if children were attached.
    pub fn build_sub(self) -> Result<Command, RegistrationError> {
        if !self.children.is_empty() {
            return Err(RegistrationError::SubcommandOnLeaf(self.name));
        }
        self.finish(None)
    }

    fn finish(
        mut self,
        children: Option<BTreeMap<String, Command>>,
    ) -> Result<Command, RegistrationError> {
        if !is_valid_key(&self.name) {
            return Err(RegistrationError::InvalidName(self.name));
        }
        if let Some(bad) = self.aliases.iter().find(|a| !is_valid_key(a)) {
            return Err(RegistrationError::InvalidName(bad.clone()));
        }

        // Drop repeats and aliases equal to the name.
        let mut seen = HashSet::new();
        let name = self.name.clone();
        self.aliases
            .retain(|a| *a != name && seen.insert(a.clone()));

        let mut argument_names = HashSet::new();
        if let Some(dup) = self
            .arguments
            .iter()
            .find(|a| !argument_names.insert(a.name().to_string()))
        {
            return Err(RegistrationError::DuplicateArgument {
                command: self.name,
                argument: dup.name().to_string(),
            });
        }

        let Some(handler) = self.handler else {
            return Err(RegistrationError::MissingHandler(self.name));
        };

        Ok(Command {
            name: self.name,
            aliases: self.aliases,
            description: self.description,
            usage: self.usage,
            permission: self.permission,
            arguments: self.arguments,
            handler,
            children,
        })
    }

    /// No child name or alias may collide with any sibling's name or alias.
    fn validate_children(&self) -> Result<BTreeMap<String, Command>, RegistrationError> {
        let mut owners: HashMap<&str, &str> = HashMap::new();
        for child in &self.children {
            for key in child.keys() {
                if owners.insert(key, child.name()).is_some() {
                    return Err(RegistrationError::ChildConflict {
                        parent: self.name.clone(),
                        name: key.to_string(),
                    });
                }
            }
        }

        Ok(self
            .children
            .iter()
            .map(|c| (c.name().to_string(), c.clone()))
            .collect())
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.chars().any(char::is_whitespace)
}
