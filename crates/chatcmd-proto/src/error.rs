//! Error types for the proto crate.

use thiserror::Error;

/// Errors produced while parsing proto values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtoError {
    /// A permission name did not match any known platform permission.
    #[error("unknown platform permission: {0}")]
    UnknownPermission(String),

    /// An argument type name did not match any known argument type.
    #[error("unknown argument type: {0}")]
    UnknownArgumentType(String),
}
