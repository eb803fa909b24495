//! Opaque identifiers handed out by the host platform.

use std::fmt;

macro_rules! define_id {
    ($(
        $(#[$meta:meta])*
        $name:ident
    ),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            #[cfg_attr(feature = "serde", serde(transparent))]
            pub struct $name(String);

            impl $name {
                /// Wrap a raw platform identifier.
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                /// The raw identifier.
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $name {
                fn from(id: &str) -> Self {
                    Self(id.to_string())
                }
            }

            impl From<String> for $name {
                fn from(id: String) -> Self {
                    Self(id)
                }
            }
        )*
    };
}

define_id! {
    /// A server (guild) on the host platform.
    ServerId,
    /// A text channel inside a server.
    ChannelId,
    /// A user account.
    UserId,
    /// A single chat message.
    MessageId,
    /// A single structured interaction invocation.
    InteractionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_eq() {
        let a = ServerId::new("1234");
        let b: ServerId = "1234".into();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "1234");
        assert_eq!(a.as_str(), "1234");
        assert_ne!(ServerId::new("1"), ServerId::new("2"));
    }
}
