//! Permission gate.

use crate::command::Command;
use chatcmd_proto::Principal;

/// Outcome of a permission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    /// Carries the message to show the principal.
    Denied(String),
}

impl GateDecision {
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Check `node`'s own permission against `principal`.
///
/// Only the node that will execute is consulted; ancestors on the path are
/// never checked.
pub fn check(node: &Command, principal: &Principal) -> GateDecision {
    match node.permission() {
        Some(permission) if !permission.has_permission(principal) => {
            GateDecision::Denied(permission.no_permission_message())
        }
        _ => GateDecision::Allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandBuilder, FlagPermission, Permission};
    use crate::error::HandlerResult;
    use crate::handlers::{Invocation, TextHandler};
    use async_trait::async_trait;
    use chatcmd_proto::PlatformPermission;
    use std::sync::Arc;

    struct Noop;

    #[async_trait]
    impl TextHandler for Noop {
        async fn handle(&self, _inv: &mut Invocation<'_>) -> HandlerResult {
            Ok(())
        }
    }

    fn manage_messages() -> Arc<dyn Permission> {
        Arc::new(FlagPermission::new(
            PlatformPermission::ManageMessages,
            "You need %perm%.",
        ))
    }

    #[test]
    fn test_unrestricted_always_allowed() {
        let cmd = CommandBuilder::new("ping").text_handler(Noop).build_parent().unwrap();
        assert!(check(&cmd, &Principal::new("1", "anyone")).is_allowed());
    }

    #[test]
    fn test_denied_carries_message() {
        let cmd = CommandBuilder::new("purge")
            .permission(manage_messages())
            .text_handler(Noop)
            .build_parent()
            .unwrap();

        let user = Principal::new("1", "user");
        assert_eq!(
            check(&cmd, &user),
            GateDecision::Denied("You need Manage Messages.".into())
        );

        let moderator = user.with_permission(PlatformPermission::ManageMessages);
        assert!(check(&cmd, &moderator).is_allowed());
    }

    #[test]
    fn test_only_leaf_is_checked() {
        let open_leaf = CommandBuilder::new("list").text_handler(Noop).build_sub().unwrap();
        let gated_parent = CommandBuilder::new("mod")
            .permission(manage_messages())
            .text_handler(Noop)
            .subcommand(open_leaf)
            .build_parent()
            .unwrap();

        let user = Principal::new("1", "user");
        assert!(!check(&gated_parent, &user).is_allowed());
        let leaf = gated_parent.child("list").unwrap();
        assert!(check(leaf, &user).is_allowed());
    }
}
