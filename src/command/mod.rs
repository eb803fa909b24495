//! Command tree model.
//!
//! A [`Command`] is an immutable node of a command hierarchy. Parent nodes
//! own a name-keyed map of children (possibly empty); sub nodes own none.
//! Nodes are assembled with [`CommandBuilder`] and never change after
//! `build_*` returns.

mod argument;
mod builder;
mod permission;

pub use argument::CommandArgument;
pub use builder::CommandBuilder;
pub use permission::{
    FlagPermission, PERMISSION_PLACEHOLDER, Permission, PermissionCache, PredicatePermission,
    RolePermission,
};

use crate::handlers::Handler;
use chatcmd_proto::fold_key;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// One node of a command hierarchy.
#[derive(Clone)]
pub struct Command {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) description: Option<String>,
    pub(crate) usage: Option<String>,
    pub(crate) permission: Option<Arc<dyn Permission>>,
    pub(crate) arguments: Vec<CommandArgument>,
    pub(crate) handler: Handler,
    /// `Some` for parent nodes, `None` for sub nodes.
    pub(crate) children: Option<BTreeMap<String, Command>>,
}

impl Command {
    /// Folded, unique among siblings.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    /// `None` means no restriction.
    pub fn permission(&self) -> Option<&Arc<dyn Permission>> {
        self.permission.as_ref()
    }

    pub fn arguments(&self) -> &[CommandArgument] {
        &self.arguments
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Whether this node can host children (even if it has none).
    pub fn is_parent(&self) -> bool {
        self.children.is_some()
    }

    /// Whether this node has at least one child.
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Children in name order. Empty for sub nodes.
    pub fn children(&self) -> impl Iterator<Item = &Command> {
        self.children.iter().flat_map(|c| c.values())
    }

    /// Exact child lookup by name (case-insensitive).
    pub fn child(&self, name: &str) -> Option<&Command> {
        self.children.as_ref()?.get(&fold_key(name))
    }

    /// Find a child whose name or alias matches `key` (case-insensitive).
    pub fn find_child(&self, key: &str) -> Option<&Command> {
        let children = self.children.as_ref()?;
        let folded = fold_key(key);
        children
            .get(&folded)
            .or_else(|| children.values().find(|c| c.answers_to_folded(&folded)))
    }

    /// Whether `key` is this node's name or one of its aliases.
    pub fn answers_to(&self, key: &str) -> bool {
        self.answers_to_folded(&fold_key(key))
    }

    /// Name followed by aliases; every key this node can be reached by.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    fn answers_to_folded(&self, folded: &str) -> bool {
        self.name == folded || self.aliases.iter().any(|a| a == folded)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("handler", &self.handler.kind())
            .field("restricted", &self.permission.is_some())
            .field(
                "children",
                &self.children.as_ref().map(|c| c.keys().collect::<Vec<_>>()),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{Invocation, TextHandler};
    use crate::error::HandlerResult;
    use async_trait::async_trait;

    struct Noop;

    #[async_trait]
    impl TextHandler for Noop {
        async fn handle(&self, _inv: &mut Invocation<'_>) -> HandlerResult {
            Ok(())
        }
    }

    fn tree() -> Command {
        CommandBuilder::new("Say")
            .text_handler(Noop)
            .subcommand(
                CommandBuilder::new("greetings")
                    .aliases(["hi", "Hello"])
                    .text_handler(Noop)
                    .build_sub()
                    .unwrap(),
            )
            .subcommand(CommandBuilder::new("farewell").text_handler(Noop).build_sub().unwrap())
            .build_parent()
            .unwrap()
    }

    #[test]
    fn test_find_child_by_name_and_alias() {
        let say = tree();
        assert_eq!(say.name(), "say");
        assert_eq!(say.find_child("GREETINGS").map(Command::name), Some("greetings"));
        assert_eq!(say.find_child("hello").map(Command::name), Some("greetings"));
        assert_eq!(say.find_child("Hi").map(Command::name), Some("greetings"));
        assert!(say.find_child("bye").is_none());
    }

    #[test]
    fn test_exact_child_ignores_aliases() {
        let say = tree();
        assert!(say.child("farewell").is_some());
        assert!(say.child("hi").is_none());
    }

    #[test]
    fn test_parent_and_sub_shape() {
        let say = tree();
        assert!(say.is_parent());
        assert!(say.has_children());
        let names: Vec<_> = say.children().map(Command::name).collect();
        assert_eq!(names, vec!["farewell", "greetings"]);

        let leaf = say.child("farewell").unwrap();
        assert!(!leaf.is_parent());
        assert!(leaf.find_child("anything").is_none());
        assert_eq!(leaf.children().count(), 0);

        let empty_parent = CommandBuilder::new("solo").text_handler(Noop).build_parent().unwrap();
        assert!(empty_parent.is_parent());
        assert!(!empty_parent.has_children());
    }
}
