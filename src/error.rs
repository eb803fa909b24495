//! Unified error handling for chatcmd.
//!
//! This module provides the error hierarchy for the dispatch engine: errors
//! raised while building and registering commands, errors returned by
//! command handlers, errors reported by the host session, and the dispatch
//! errors surfaced to operators.

use thiserror::Error;

// ============================================================================
// Registration Errors (startup time, always fatal to the call)
// ============================================================================

/// Errors raised while building or registering a command.
///
/// Registration failures are reported synchronously to the caller and leave
/// the registry and the parent being built unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A top-level command name or alias is already taken.
    #[error("command already exists: {0}")]
    AlreadyExists(String),

    /// A child name or alias collides with a sibling's name or alias.
    #[error("command {name} already exists under {parent}")]
    ChildConflict { parent: String, name: String },

    /// Only parent nodes can be registered at the top level.
    #[error("{0} is a sub command and cannot be registered on its own")]
    NotAParent(String),

    #[error("command {0} has no handler")]
    MissingHandler(String),

    #[error("invalid command name: {0:?}")]
    InvalidName(String),

    #[error("command {command} declares argument {argument} twice")]
    DuplicateArgument { command: String, argument: String },

    /// Sub commands were attached to a builder finished as a leaf.
    #[error("{0} was built as a sub command but has children")]
    SubcommandOnLeaf(String),
}

// ============================================================================
// Host Errors (outbound calls into the chat platform)
// ============================================================================

/// Errors reported by the host session when delivering output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("host session closed")]
    Closed,

    #[error("host rejected request: {0}")]
    Rejected(String),
}

// ============================================================================
// Handler Errors (command execution)
// ============================================================================

/// Errors that can occur while a command handler runs.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("not enough arguments")]
    NeedMoreArgs,

    /// The initial interaction response was already committed.
    #[error("interaction already responded to")]
    AlreadyResponded,

    #[error("host error: {0}")]
    Host(#[from] HostError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreArgs => "need_more_args",
            Self::AlreadyResponded => "already_responded",
            Self::Host(_) => "host_error",
            Self::Internal(_) => "internal_error",
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Dispatch Errors (operator-facing, never shown to end users)
// ============================================================================

/// Errors surfaced by the router for a single inbound event.
///
/// None of these stop the service from handling the next event.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The event names something the registry cannot resolve. Indicates the
    /// host and the registry are out of sync.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// The resolved command's handler cannot run on this entry path.
    #[error("handler mismatch: {0}")]
    HandlerMismatch(String),

    #[error("handler failed: {0}")]
    Handler(#[from] HandlerError),

    #[error("host error: {0}")]
    Host(#[from] HostError),
}

impl DispatchError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedEvent(_) => "malformed_event",
            Self::HandlerMismatch(_) => "handler_mismatch",
            Self::Handler(e) => e.error_code(),
            Self::Host(_) => "host_error",
        }
    }
}

/// Result type for a single dispatch.
pub type DispatchResult = Result<DispatchOutcome, DispatchError>;

// ============================================================================
// Dispatch Outcomes (normal traffic)
// ============================================================================

/// Why an inbound event did not invoke anything.
///
/// Ignoring is normal traffic, not failure: most chat messages are not
/// command invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The event came from a server other than the restricted one.
    WrongServer,
    /// The event has no server and a server is required.
    NoServer,
    /// No member behind the event (webhooks, system messages).
    NoPrincipal,
    /// Automated senders never dispatch text commands.
    BotSender,
    NoPrefix,
    /// Nothing but the prefix was sent.
    EmptyCommand,
    UnknownCommand,
    /// The command is reachable only through interactions.
    InteractionOnly,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WrongServer => "wrong_server",
            Self::NoServer => "no_server",
            Self::NoPrincipal => "no_principal",
            Self::BotSender => "bot_sender",
            Self::NoPrefix => "no_prefix",
            Self::EmptyCommand => "empty_command",
            Self::UnknownCommand => "unknown_command",
            Self::InteractionOnly => "interaction_only",
        }
    }
}

/// What happened to an inbound event that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Ignored(IgnoreReason),
    /// The resolved command's permission check failed; carries the message
    /// that was (or would have been) shown to the principal.
    Denied(String),
    /// A handler ran. `command` is the space-joined path of the resolved node.
    Dispatched { command: String },
}

impl DispatchOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_codes() {
        assert_eq!(HandlerError::NeedMoreArgs.error_code(), "need_more_args");
        assert_eq!(HandlerError::AlreadyResponded.error_code(), "already_responded");
        assert_eq!(HandlerError::Internal("x".into()).error_code(), "internal_error");
        assert_eq!(HandlerError::from(HostError::Closed).error_code(), "host_error");
    }

    #[test]
    fn test_dispatch_error_codes_delegate_to_handler() {
        let err = DispatchError::from(HandlerError::NeedMoreArgs);
        assert_eq!(err.error_code(), "need_more_args");
        assert_eq!(
            DispatchError::MalformedEvent("nope".into()).error_code(),
            "malformed_event"
        );
    }

    #[test]
    fn test_registration_error_messages() {
        let err = RegistrationError::ChildConflict {
            parent: "say".into(),
            name: "hi".into(),
        };
        assert_eq!(err.to_string(), "command hi already exists under say");
        assert_eq!(
            RegistrationError::AlreadyExists("greet".into()).to_string(),
            "command already exists: greet"
        );
    }
}
