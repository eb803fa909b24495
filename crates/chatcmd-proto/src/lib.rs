//! # chatcmd-proto
//!
//! Plain data types shared between a chat-platform host session and the
//! `chatcmd` dispatch engine.
//!
//! ## Contents
//!
//! - Identifiers for servers, channels, users and interactions
//! - [`Principal`]: the actor that triggered an event, with its granted
//!   platform permissions and roles
//! - Inbound events: [`TextMessage`] and [`InteractionEvent`]
//! - Outbound payloads: [`Embed`], [`MessagePayload`] and the interaction
//!   [`ResponseDescriptor`]
//! - Interaction command schema: [`CommandData`], [`SubcommandData`],
//!   [`OptionData`]
//!
//! Nothing in this crate performs I/O. Enable the `serde` feature to derive
//! `Serialize`/`Deserialize` on every type.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod casemap;
pub mod error;
pub mod event;
pub mod ids;
pub mod principal;
pub mod response;
pub mod schema;

pub use self::casemap::{fold_key, key_eq};
pub use self::error::ProtoError;
pub use self::event::{InboundEvent, InteractionEvent, InteractionOption, OptionValue, TextMessage};
pub use self::ids::{ChannelId, InteractionId, MessageId, ServerId, UserId};
pub use self::principal::{PlatformPermission, Principal};
pub use self::response::{
    Embed, EmbedField, InteractionHandle, MessagePayload, ResponseDescriptor, ResponseKind,
};
pub use self::schema::{ArgumentType, CommandData, OptionData, SubcommandData};
