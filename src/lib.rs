//! # chatcmd
//!
//! Command-dispatch engine for chat-platform bots.
//!
//! Register a tree of named commands, then feed inbound chat messages and
//! structured interactions to a [`DispatchService`]. The engine resolves the
//! command by name or alias, walks sub commands greedily, checks the
//! resolved node's permission and runs its handler with the leftover
//! argument tokens.
//!
//! Platform I/O stays behind [`HostSession`]; data types shared with the
//! host live in [`chatcmd_proto`].

pub mod command;
pub mod config;
pub mod error;
pub mod handlers;
pub mod host;
pub mod metrics;
pub mod router;
pub mod schema;
pub mod service;
pub mod telemetry;

pub use chatcmd_proto as proto;

pub use command::{
    Command, CommandArgument, CommandBuilder, FlagPermission, Permission, PermissionCache,
    PredicatePermission, RolePermission,
};
pub use config::{Config, ConfigError};
pub use error::{
    DispatchError, DispatchOutcome, DispatchResult, HandlerError, HandlerResult, HostError,
    IgnoreReason, RegistrationError,
};
pub use handlers::{
    Handler, InteractionHandler, Invocation, RegisteredCommand, Registry, TextHandler,
};
pub use host::HostSession;
pub use router::Router;
pub use service::DispatchService;
