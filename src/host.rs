//! Boundary to the chat-platform host session.
//!
//! The engine never talks to a platform directly. Every outbound effect
//! goes through a [`HostSession`] supplied by the embedding application.

use crate::error::HostError;
use async_trait::async_trait;
use chatcmd_proto::{
    ChannelId, CommandData, InteractionEvent, InteractionHandle, MessagePayload,
    ResponseDescriptor, ServerId,
};

/// Sink for everything the engine and its handlers emit.
#[async_trait]
pub trait HostSession: Send + Sync {
    /// Post a new message to a channel.
    async fn send_message(
        &self,
        channel: &ChannelId,
        payload: MessagePayload,
    ) -> Result<(), HostError>;

    /// Commit the initial response to an interaction.
    ///
    /// The engine calls this at most once per interaction.
    async fn commit_interaction(
        &self,
        event: &InteractionEvent,
        response: &ResponseDescriptor,
    ) -> Result<InteractionHandle, HostError>;

    /// Emit additional output after the initial response.
    async fn follow_up(
        &self,
        handle: &InteractionHandle,
        payload: MessagePayload,
    ) -> Result<(), HostError>;

    /// Replace the interaction commands published for a server.
    async fn publish_commands(
        &self,
        server: &ServerId,
        commands: &[CommandData],
    ) -> Result<(), HostError>;
}
