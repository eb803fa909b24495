//! Response routing for handler output.
//!
//! On the text path every reply is a new message in the originating
//! channel. On the interaction path the first output commits the initial
//! response; everything after it is a follow-up on the committed handle.

use super::context::EventSource;
use crate::error::{HandlerError, HandlerResult};
use crate::host::HostSession;
use chatcmd_proto::{InteractionHandle, MessagePayload, ResponseDescriptor};
use tracing::trace;

/// Routes one invocation's output back into the host session.
pub struct Responder<'a> {
    host: &'a dyn HostSession,
    source: EventSource<'a>,
    handle: Option<InteractionHandle>,
}

impl<'a> Responder<'a> {
    pub fn new(host: &'a dyn HostSession, source: EventSource<'a>) -> Self {
        Self {
            host,
            source,
            handle: None,
        }
    }

    /// Whether the initial interaction response has been committed.
    pub fn is_committed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&InteractionHandle> {
        self.handle.as_ref()
    }

    /// Send a message payload.
    ///
    /// On an uncommitted interaction this commits a public full-message
    /// response.
    pub async fn send(&mut self, payload: MessagePayload) -> HandlerResult {
        match self.source {
            EventSource::Text(msg) => {
                self.host.send_message(&msg.channel, payload).await?;
            }
            EventSource::Interaction(_) => {
                if let Some(handle) = &self.handle {
                    trace!(interaction = %handle.interaction, "follow-up");
                    self.host.follow_up(handle, payload).await?;
                } else {
                    self.commit(&ResponseDescriptor::message(payload)).await?;
                }
            }
        }
        Ok(())
    }

    /// Commit the initial interaction response. Succeeds at most once.
    pub async fn commit(
        &mut self,
        descriptor: &ResponseDescriptor,
    ) -> Result<InteractionHandle, HandlerError> {
        let EventSource::Interaction(event) = self.source else {
            return Err(HandlerError::Internal(
                "text messages have no interaction response".to_string(),
            ));
        };
        if self.handle.is_some() {
            return Err(HandlerError::AlreadyResponded);
        }

        let handle = self.host.commit_interaction(event, descriptor).await?;
        trace!(
            interaction = %event.id,
            ephemeral = descriptor.ephemeral,
            deferred = descriptor.is_deferred(),
            "initial response committed"
        );
        self.handle = Some(handle.clone());
        Ok(handle)
    }
}
