//! Inbound events delivered by the host session.

use crate::ids::{ChannelId, InteractionId, MessageId, ServerId, UserId};
use crate::principal::Principal;
use std::fmt;

/// A plain chat message that may carry a prefixed text command.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextMessage {
    pub id: MessageId,
    /// Message content as displayed to users.
    pub content: String,
    /// `None` for webhook or system messages with no member behind them.
    pub author: Option<Principal>,
    /// `None` for direct messages.
    pub server: Option<ServerId>,
    pub channel: ChannelId,
}

impl TextMessage {
    /// A server message from `author`.
    pub fn new(
        id: impl Into<MessageId>,
        content: impl Into<String>,
        author: Principal,
        server: impl Into<ServerId>,
        channel: impl Into<ChannelId>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            author: Some(author),
            server: Some(server.into()),
            channel: channel.into(),
        }
    }
}

/// One typed option value of a structured interaction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "snake_case"))]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    User(UserId),
    Channel(ChannelId),
    Role(String),
    Mentionable(String),
}

impl fmt::Display for OptionValue {
    /// The string form handed to command handlers as a token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Role(s) | Self::Mentionable(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::User(id) => write!(f, "{id}"),
            Self::Channel(id) => write!(f, "{id}"),
        }
    }
}

/// A named option as supplied by the platform.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionOption {
    pub name: String,
    pub value: OptionValue,
}

/// A platform-native structured command invocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionEvent {
    pub id: InteractionId,
    /// Top-level command name as registered with the platform.
    pub name: String,
    /// Selected sub command, if the command has any.
    pub subcommand: Option<String>,
    /// Options in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Vec<InteractionOption>,
    pub member: Option<Principal>,
    /// `None` when invoked outside a server.
    pub server: Option<ServerId>,
    pub channel: ChannelId,
}

impl InteractionEvent {
    /// An interaction on `name` with no sub command and no options.
    pub fn new(
        id: impl Into<InteractionId>,
        name: impl Into<String>,
        member: Principal,
        server: impl Into<ServerId>,
        channel: impl Into<ChannelId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subcommand: None,
            options: Vec::new(),
            member: Some(member),
            server: Some(server.into()),
            channel: channel.into(),
        }
    }

    /// Select a sub command.
    pub fn with_subcommand(mut self, name: impl Into<String>) -> Self {
        self.subcommand = Some(name.into());
        self
    }

    /// Append an option.
    pub fn with_option(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.options.push(InteractionOption {
            name: name.into(),
            value,
        });
        self
    }

    /// Token sequence for this invocation: the sub command name first (if
    /// any), then every option's string form in declaration order.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.options.len() + 1);
        if let Some(sub) = &self.subcommand {
            tokens.push(sub.clone());
        }
        tokens.extend(self.options.iter().map(|o| o.value.to_string()));
        tokens
    }
}

/// Any event the host session can deliver to the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum InboundEvent {
    /// A plain chat message.
    Text(TextMessage),
    /// A structured interaction.
    Interaction(InteractionEvent),
}

impl InboundEvent {
    /// Channel the event arrived in.
    pub fn channel(&self) -> &ChannelId {
        match self {
            Self::Text(m) => &m.channel,
            Self::Interaction(i) => &i.channel,
        }
    }
}

impl From<TextMessage> for InboundEvent {
    fn from(m: TextMessage) -> Self {
        Self::Text(m)
    }
}

impl From<InteractionEvent> for InboundEvent {
    fn from(i: InteractionEvent) -> Self {
        Self::Interaction(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Principal {
        Principal::new("1", "alice")
    }

    #[test]
    fn test_option_value_strings() {
        assert_eq!(OptionValue::String("hi there".into()).to_string(), "hi there");
        assert_eq!(OptionValue::Integer(-3).to_string(), "-3");
        assert_eq!(OptionValue::Number(1.5).to_string(), "1.5");
        assert_eq!(OptionValue::Boolean(true).to_string(), "true");
        assert_eq!(OptionValue::User(UserId::new("99")).to_string(), "99");
    }

    #[test]
    fn test_tokens_with_subcommand() {
        let ev = InteractionEvent::new("i1", "say", member(), "s1", "c1")
            .with_subcommand("greetings")
            .with_option("target", OptionValue::String("bob".into()))
            .with_option("times", OptionValue::Integer(2));
        assert_eq!(ev.tokens(), vec!["greetings", "bob", "2"]);
    }

    #[test]
    fn test_tokens_without_subcommand() {
        let ev = InteractionEvent::new("i1", "ping", member(), "s1", "c1");
        assert!(ev.tokens().is_empty());

        let ev = ev.with_option("loud", OptionValue::Boolean(false));
        assert_eq!(ev.tokens(), vec!["false"]);
    }
}
