//! Structured interaction path.

use super::{Router, execute, ignored};
use crate::error::{DispatchError, DispatchResult, IgnoreReason};
use crate::handlers::{EventSource, Registry};
use crate::host::HostSession;
use chatcmd_proto::InteractionEvent;
use tracing::error;

const ENTRY: &str = "interaction";

impl Router {
    /// Dispatch a platform interaction.
    ///
    /// The top-level command is looked up by exact name; aliases never
    /// apply here. An unknown name or missing member means the host and
    /// the registry disagree and is reported as `MalformedEvent`.
    pub async fn dispatch_interaction(
        &self,
        registry: &Registry,
        host: &dyn HostSession,
        event: &InteractionEvent,
    ) -> DispatchResult {
        let Some(server) = event.server.as_ref() else {
            return ignored(ENTRY, IgnoreReason::NoServer);
        };
        if let Err(reason) = self.server_allowed(Some(server)) {
            return ignored(ENTRY, reason);
        }

        let Some(root) = registry.lookup_by_name(&event.name) else {
            error!(interaction = %event.id, name = %event.name, "interaction names no registered command");
            return Err(DispatchError::MalformedEvent(format!(
                "unknown interaction command: {}",
                event.name
            )));
        };
        let Some(member) = event.member.as_ref() else {
            error!(interaction = %event.id, "interaction has no member");
            return Err(DispatchError::MalformedEvent(format!(
                "interaction {} has no member",
                event.id
            )));
        };

        let tokens = event.tokens();
        execute(&root, &tokens, member, EventSource::Interaction(event), host).await
    }
}
