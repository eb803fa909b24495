//! Core dispatch infrastructure.
//!
//! This module contains the fundamental types of the dispatch engine: the
//! command registry, the resolver that walks a token sequence through a
//! command tree, the permission gate, handler traits, the invocation
//! context, and the responder that routes handler output.
//!
//! ### Handler Traits
//!
//! - [`TextHandler`]: single async step, replies through the invocation
//! - [`InteractionHandler`]: initial response, then a follow-up step once
//!   the router has committed it

pub mod context;
pub mod gate;
pub mod middleware;
pub mod registry;
pub mod resolver;
pub mod traits;

pub use context::{EventSource, Invocation};
pub use gate::{GateDecision, check};
pub use middleware::Responder;
pub use registry::{RegisteredCommand, Registry};
pub use resolver::{Resolution, resolve};
pub use traits::{Handler, InteractionHandler, TextHandler};
