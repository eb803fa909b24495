//! Outbound payloads and the interaction response descriptor.

use crate::ids::InteractionId;

/// One name/value field of an [`Embed`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inline: bool,
}

/// Rich content block rendered by the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// RGB colour, `0xRRGGBB`.
    pub color: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// A complete message: optional text plus any number of embeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessagePayload {
    pub content: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub embeds: Vec<Embed>,
}

impl MessagePayload {
    /// Text-only message.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embeds: Vec::new(),
        }
    }

    /// Embed-only message.
    pub fn embeds(embeds: Vec<Embed>) -> Self {
        Self {
            content: None,
            embeds,
        }
    }

    /// Attach an embed.
    pub fn with_embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.as_deref().map_or(true, str::is_empty) && self.embeds.is_empty()
    }
}

/// What the initial interaction response consists of.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "body", rename_all = "snake_case"))]
pub enum ResponseKind {
    PlainText(String),
    RichContent(Vec<Embed>),
    FullMessage(MessagePayload),
    /// Acknowledge now, deliver content later through the handle.
    Deferred,
}

/// Initial response to an interaction, produced synchronously by a handler
/// and committed exactly once by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseDescriptor {
    pub kind: ResponseKind,
    /// Visible only to the invoking principal. Applies to every kind,
    /// including [`ResponseKind::Deferred`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub ephemeral: bool,
}

impl ResponseDescriptor {
    pub fn text(content: impl Into<String>) -> Self {
        Self::public(ResponseKind::PlainText(content.into()))
    }

    pub fn embeds(embeds: Vec<Embed>) -> Self {
        Self::public(ResponseKind::RichContent(embeds))
    }

    pub fn message(payload: MessagePayload) -> Self {
        Self::public(ResponseKind::FullMessage(payload))
    }

    pub fn deferred() -> Self {
        Self::public(ResponseKind::Deferred)
    }

    /// Make the response private to the invoking principal.
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self.kind, ResponseKind::Deferred)
    }

    /// Flatten into a message payload. `None` for a deferral.
    pub fn to_payload(&self) -> Option<MessagePayload> {
        match &self.kind {
            ResponseKind::PlainText(text) => Some(MessagePayload::text(text.clone())),
            ResponseKind::RichContent(embeds) => Some(MessagePayload::embeds(embeds.clone())),
            ResponseKind::FullMessage(payload) => Some(payload.clone()),
            ResponseKind::Deferred => None,
        }
    }

    fn public(kind: ResponseKind) -> Self {
        Self {
            kind,
            ephemeral: false,
        }
    }
}

/// Handle to a committed initial response; used for follow-up output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionHandle {
    pub interaction: InteractionId,
    /// Platform continuation token for follow-up messages.
    pub token: String,
    pub ephemeral: bool,
    /// Whether the committed response was a deferral still awaiting content.
    pub deferred: bool,
}
