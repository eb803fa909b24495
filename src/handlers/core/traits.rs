//! Response handler traits.
//!
//! A command's handler comes in one of two shapes:
//!
//! - [`TextHandler`]: a single async step that receives the invocation and
//!   may reply any number of times through it.
//! - [`InteractionHandler`]: a two-step handler for structured
//!   interactions. The router first asks for an initial
//!   [`ResponseDescriptor`], commits it exactly once, then calls
//!   [`InteractionHandler::on_response_committed`] with the committed
//!   handle so the handler can emit follow-up output.
//!
//! [`Handler`] is the type-erased enum stored on every command node.

use super::context::Invocation;
use crate::error::HandlerResult;
use async_trait::async_trait;
use chatcmd_proto::{InteractionHandle, ResponseDescriptor};
use std::sync::Arc;

/// Handler for commands answered with ordinary messages.
#[async_trait]
pub trait TextHandler: Send + Sync {
    async fn handle(&self, inv: &mut Invocation<'_>) -> HandlerResult;
}

/// Two-phase handler for structured interaction commands.
#[async_trait]
pub trait InteractionHandler: Send + Sync {
    /// Produce the initial response. Must not block.
    fn initial_response(&self, inv: &Invocation<'_>) -> ResponseDescriptor;

    /// Called once the initial response is committed.
    async fn on_response_committed(
        &self,
        _handle: &InteractionHandle,
        _inv: &mut Invocation<'_>,
    ) -> HandlerResult {
        Ok(())
    }
}

/// The response handler attached to a command node.
#[derive(Clone)]
pub enum Handler {
    Text(Arc<dyn TextHandler>),
    Interaction(Arc<dyn InteractionHandler>),
}

impl Handler {
    pub fn text<H: TextHandler + 'static>(handler: H) -> Self {
        Self::Text(Arc::new(handler))
    }

    pub fn interaction<H: InteractionHandler + 'static>(handler: H) -> Self {
        Self::Interaction(Arc::new(handler))
    }

    #[inline]
    pub fn is_interaction(&self) -> bool {
        matches!(self, Self::Interaction(_))
    }

    /// Label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Interaction(_) => "interaction",
        }
    }
}
