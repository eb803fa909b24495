//! Default value functions for configuration.

use chatcmd_proto::PlatformPermission;

// =============================================================================
// Bot Defaults
// =============================================================================

pub fn default_prefix() -> String {
    "!".to_string()
}

pub fn default_no_permission_message() -> String {
    "You need the %perm% permission to do that.".to_string()
}

// =============================================================================
// Logging Defaults
// =============================================================================

pub fn default_log_filter() -> String {
    "info".to_string()
}

// =============================================================================
// Console Defaults
// =============================================================================

pub fn default_console_user() -> String {
    "console".to_string()
}

pub fn default_console_server() -> String {
    "console".to_string()
}

pub fn default_console_channel() -> String {
    "general".to_string()
}

pub fn default_console_permissions() -> Vec<PlatformPermission> {
    vec![PlatformPermission::Administrator]
}
