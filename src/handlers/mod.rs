//! Command handler infrastructure.
//!
//! Handlers receive an [`Invocation`] that borrows the inbound event, the
//! resolved command node and the unconsumed argument tokens, so dispatch
//! allocates nothing beyond the token vector itself.

pub mod core;

pub use self::core::{
    EventSource, GateDecision, Handler, InteractionHandler, Invocation, RegisteredCommand,
    Registry, Resolution, Responder, TextHandler,
};
