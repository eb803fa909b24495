//! Invocation context passed to every command handler.

use super::middleware::Responder;
use crate::command::Command;
use crate::error::{HandlerError, HandlerResult};
use chatcmd_proto::{
    ChannelId, Embed, InteractionEvent, MessagePayload, Principal, ServerId, TextMessage,
};

/// The inbound event an invocation was normalized from.
#[derive(Debug, Clone, Copy)]
pub enum EventSource<'a> {
    Text(&'a TextMessage),
    Interaction(&'a InteractionEvent),
}

impl<'a> EventSource<'a> {
    pub fn server(&self) -> Option<&'a ServerId> {
        match self {
            Self::Text(m) => m.server.as_ref(),
            Self::Interaction(ev) => ev.server.as_ref(),
        }
    }

    pub fn channel(&self) -> &'a ChannelId {
        match self {
            Self::Text(m) => &m.channel,
            Self::Interaction(ev) => &ev.channel,
        }
    }

    #[inline]
    pub fn is_interaction(&self) -> bool {
        matches!(self, Self::Interaction(_))
    }

    /// Router label used in spans and logs.
    pub fn entry(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Interaction(_) => "interaction",
        }
    }
}

/// One resolved command invocation.
pub struct Invocation<'a> {
    /// Who triggered the command.
    pub principal: &'a Principal,
    /// Tokens left over after resolution, passed through as opaque strings.
    pub args: &'a [String],
    /// The resolved node that is executing.
    pub command: &'a Command,
    /// Space-joined names from the root to `command`.
    pub path: &'a str,
    pub source: EventSource<'a>,
    /// Output routing for this invocation.
    pub responder: Responder<'a>,
}

impl<'a> Invocation<'a> {
    /// Get argument by index.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }

    /// Get argument by index, or fail with `NeedMoreArgs`.
    #[inline]
    pub fn require_arg(&self, index: usize) -> Result<&'a str, HandlerError> {
        self.arg(index).ok_or(HandlerError::NeedMoreArgs)
    }

    /// All remaining arguments joined by single spaces.
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }

    pub async fn reply(&mut self, text: impl Into<String>) -> HandlerResult {
        self.responder.send(MessagePayload::text(text)).await
    }

    pub async fn reply_embeds(&mut self, embeds: Vec<Embed>) -> HandlerResult {
        self.responder.send(MessagePayload::embeds(embeds)).await
    }

    pub async fn send(&mut self, payload: MessagePayload) -> HandlerResult {
        self.responder.send(payload).await
    }
}
