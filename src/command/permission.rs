//! Permission predicates consulted by the permission gate.
//!
//! The gate only calls [`Permission::has_permission`] and
//! [`Permission::no_permission_message`]; what a predicate checks is opaque
//! to the engine. Predicates are shared read-only via `Arc`, so one object
//! may guard many commands.

use chatcmd_proto::{PlatformPermission, Principal};
use dashmap::DashMap;
use std::sync::Arc;

/// Replaced with the permission's display name in denial templates.
pub const PERMISSION_PLACEHOLDER: &str = "%perm%";

/// A permission predicate attached to a command.
pub trait Permission: Send + Sync {
    /// Whether `principal` may execute the guarded command.
    fn has_permission(&self, principal: &Principal) -> bool;

    /// Message shown to a principal who lacks the permission.
    fn no_permission_message(&self) -> String;
}

/// Requires one platform permission flag.
#[derive(Debug, Clone)]
pub struct FlagPermission {
    flag: PlatformPermission,
    template: Arc<str>,
}

impl FlagPermission {
    /// `template` may contain [`PERMISSION_PLACEHOLDER`].
    pub fn new(flag: PlatformPermission, template: impl Into<Arc<str>>) -> Self {
        Self {
            flag,
            template: template.into(),
        }
    }

    pub fn flag(&self) -> PlatformPermission {
        self.flag
    }
}

impl Permission for FlagPermission {
    fn has_permission(&self, principal: &Principal) -> bool {
        principal.has_permission(self.flag)
    }

    fn no_permission_message(&self) -> String {
        self.template
            .replace(PERMISSION_PLACEHOLDER, self.flag.display_name())
    }
}

/// Requires a named server role.
#[derive(Debug, Clone)]
pub struct RolePermission {
    role: String,
    template: String,
}

impl RolePermission {
    /// `template` may contain [`PERMISSION_PLACEHOLDER`], replaced with the
    /// role name.
    pub fn new(role: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            template: template.into(),
        }
    }
}

impl Permission for RolePermission {
    fn has_permission(&self, principal: &Principal) -> bool {
        principal.has_role(&self.role)
    }

    fn no_permission_message(&self) -> String {
        self.template.replace(PERMISSION_PLACEHOLDER, &self.role)
    }
}

/// Arbitrary predicate over the principal with a fixed denial message.
pub struct PredicatePermission<F> {
    predicate: F,
    message: String,
}

impl<F> PredicatePermission<F>
where
    F: Fn(&Principal) -> bool + Send + Sync,
{
    pub fn new(predicate: F, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }
}

impl<F> Permission for PredicatePermission<F>
where
    F: Fn(&Principal) -> bool + Send + Sync,
{
    fn has_permission(&self, principal: &Principal) -> bool {
        (self.predicate)(principal)
    }

    fn no_permission_message(&self) -> String {
        self.message.clone()
    }
}

/// Hands out one shared [`FlagPermission`] per flag, all rendered with the
/// same denial template.
pub struct PermissionCache {
    template: Arc<str>,
    flags: DashMap<PlatformPermission, Arc<FlagPermission>>,
}

impl PermissionCache {
    pub fn new(template: impl Into<Arc<str>>) -> Self {
        Self {
            template: template.into(),
            flags: DashMap::new(),
        }
    }

    /// The shared predicate for `flag`, created on first request.
    pub fn flag(&self, flag: PlatformPermission) -> Arc<dyn Permission> {
        let entry = self
            .flags
            .entry(flag)
            .or_insert_with(|| Arc::new(FlagPermission::new(flag, Arc::clone(&self.template))));
        Arc::clone(entry.value()) as Arc<dyn Permission>
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Number of distinct flags handed out so far.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
