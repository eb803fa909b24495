//! The actor behind an inbound event.

use crate::error::ProtoError;
use crate::ids::UserId;
use crate::casemap::key_eq;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Server-level permission flags a platform can grant to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlatformPermission {
    Administrator,
    ManageServer,
    ManageRoles,
    ManageChannels,
    ManageMessages,
    KickMembers,
    BanMembers,
    ModerateMembers,
    MentionEveryone,
    SendMessages,
    ViewAuditLog,
}

impl PlatformPermission {
    /// Every known flag, in declaration order.
    pub const ALL: [PlatformPermission; 11] = [
        Self::Administrator,
        Self::ManageServer,
        Self::ManageRoles,
        Self::ManageChannels,
        Self::ManageMessages,
        Self::KickMembers,
        Self::BanMembers,
        Self::ModerateMembers,
        Self::MentionEveryone,
        Self::SendMessages,
        Self::ViewAuditLog,
    ];

    /// Config/key form, e.g. `manage_messages`.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::ManageServer => "manage_server",
            Self::ManageRoles => "manage_roles",
            Self::ManageChannels => "manage_channels",
            Self::ManageMessages => "manage_messages",
            Self::KickMembers => "kick_members",
            Self::BanMembers => "ban_members",
            Self::ModerateMembers => "moderate_members",
            Self::MentionEveryone => "mention_everyone",
            Self::SendMessages => "send_messages",
            Self::ViewAuditLog => "view_audit_log",
        }
    }

    /// Human-readable name shown to end users.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::ManageServer => "Manage Server",
            Self::ManageRoles => "Manage Roles",
            Self::ManageChannels => "Manage Channels",
            Self::ManageMessages => "Manage Messages",
            Self::KickMembers => "Kick Members",
            Self::BanMembers => "Ban Members",
            Self::ModerateMembers => "Moderate Members",
            Self::MentionEveryone => "Mention Everyone",
            Self::SendMessages => "Send Messages",
            Self::ViewAuditLog => "View Audit Log",
        }
    }
}

impl fmt::Display for PlatformPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PlatformPermission {
    type Err = ProtoError;

    /// Accepts the key form (`manage_messages`) or the display name
    /// (`Manage Messages`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| key_eq(p.key(), trimmed) || key_eq(p.display_name(), trimmed))
            .ok_or_else(|| ProtoError::UnknownPermission(trimmed.to_string()))
    }
}

/// The authenticated actor who triggered an event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Principal {
    /// Platform user id.
    pub id: UserId,
    /// Display name at the time of the event.
    pub name: String,
    /// Automated accounts never dispatch text commands.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bot: bool,
    /// Permission flags granted in the originating server.
    #[cfg_attr(feature = "serde", serde(default))]
    pub permissions: BTreeSet<PlatformPermission>,
    /// Role names held in the originating server.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roles: Vec<String>,
}

impl Principal {
    /// A human member with no permissions and no roles.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bot: false,
            permissions: BTreeSet::new(),
            roles: Vec::new(),
        }
    }

    /// Mark this principal as an automated account.
    pub fn as_bot(mut self) -> Self {
        self.bot = true;
        self
    }

    /// Grant a permission flag.
    pub fn with_permission(mut self, permission: PlatformPermission) -> Self {
        self.permissions.insert(permission);
        self
    }

    /// Add a role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn is_bot(&self) -> bool {
        self.bot
    }

    /// Whether the exact flag was granted.
    pub fn has_permission(&self, permission: PlatformPermission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Whether a role with this name is held (case-insensitive).
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| key_eq(r, role))
    }
}
