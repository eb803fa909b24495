//! Prefixed text path.

use super::{Router, execute, ignored};
use crate::error::{DispatchResult, IgnoreReason};
use crate::handlers::{EventSource, Registry};
use crate::host::HostSession;
use chatcmd_proto::TextMessage;

const ENTRY: &str = "text";

impl Router {
    /// Dispatch a chat message that may carry a prefixed command.
    ///
    /// Non-commands, bot senders, unknown names and messages outside the
    /// restricted server are ignored without invoking anything.
    pub async fn dispatch_text(
        &self,
        registry: &Registry,
        host: &dyn HostSession,
        msg: &TextMessage,
    ) -> DispatchResult {
        if let Err(reason) = self.server_allowed(msg.server.as_ref()) {
            return ignored(ENTRY, reason);
        }
        let Some(author) = msg.author.as_ref() else {
            return ignored(ENTRY, IgnoreReason::NoPrincipal);
        };
        if author.is_bot() {
            return ignored(ENTRY, IgnoreReason::BotSender);
        }

        let tokens = match tokenize(&self.prefix, &msg.content) {
            Ok(tokens) => tokens,
            Err(reason) => return ignored(ENTRY, reason),
        };
        let Some((first, rest)) = tokens.split_first() else {
            return ignored(ENTRY, IgnoreReason::EmptyCommand);
        };

        let Some(root) = registry.lookup_by_name_or_alias(first) else {
            return ignored(ENTRY, IgnoreReason::UnknownCommand);
        };
        if root.is_interaction() {
            return ignored(ENTRY, IgnoreReason::InteractionOnly);
        }

        execute(&root, rest, author, EventSource::Text(msg), host).await
    }
}

/// Strip `prefix` (case-insensitively) and split the rest on single spaces.
///
/// Interior empty tokens from repeated spaces are kept; trailing empty
/// tokens are dropped. `prefix` must already be folded.
pub fn tokenize(prefix: &str, content: &str) -> Result<Vec<String>, IgnoreReason> {
    let body = strip_folded_prefix(prefix, content).ok_or(IgnoreReason::NoPrefix)?;
    if body.is_empty() {
        return Err(IgnoreReason::EmptyCommand);
    }

    let mut tokens: Vec<String> = body.split(' ').map(str::to_string).collect();
    while tokens.last().is_some_and(String::is_empty) {
        tokens.pop();
    }
    if tokens.is_empty() {
        return Err(IgnoreReason::EmptyCommand);
    }
    Ok(tokens)
}

/// Fold `content` one char at a time until `prefix` is consumed. Folding
/// can change byte length, so the split point is found in `content` itself.
fn strip_folded_prefix<'a>(prefix: &str, content: &'a str) -> Option<&'a str> {
    let mut pending = prefix;
    for (i, c) in content.char_indices() {
        if pending.is_empty() {
            return Some(&content[i..]);
        }
        for lower in c.to_lowercase() {
            pending = pending.strip_prefix(lower)?;
        }
    }
    pending.is_empty().then_some("")
}
