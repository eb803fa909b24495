//! Inbound event routing.
//!
//! Both entry paths normalize an event into a principal plus a token
//! sequence, resolve the first token against the [`Registry`], walk the rest
//! through the tree, gate the resolved node and hand off to its handler:
//!
//! - [`Router::dispatch_text`]: prefixed chat messages
//! - [`Router::dispatch_interaction`]: structured platform interactions
//!
//! Events that are not command invocations come back as
//! [`DispatchOutcome::Ignored`]; they are normal traffic, not failures.

mod interaction;
mod text;

pub use text::tokenize;

use crate::config::BotConfig;
use crate::error::{DispatchError, DispatchOutcome, DispatchResult, IgnoreReason};
use crate::handlers::core::{check, resolve};
use crate::handlers::{
    EventSource, GateDecision, Handler, InteractionHandler, Invocation, RegisteredCommand,
    Resolution, Responder, TextHandler,
};
use crate::host::HostSession;
use crate::metrics;
use crate::telemetry::{CommandTimer, spans};
use chatcmd_proto::{Principal, ResponseDescriptor, ServerId, fold_key};
use tracing::{Instrument, debug, trace, warn};

/// Routes inbound events to registered commands.
#[derive(Debug, Clone)]
pub struct Router {
    /// Folded so the case-insensitive prefix check is a plain comparison.
    prefix: String,
    restricted_server: Option<ServerId>,
}

impl Router {
    pub fn new(prefix: impl AsRef<str>, restricted_server: Option<ServerId>) -> Self {
        Self {
            prefix: fold_key(prefix.as_ref()),
            restricted_server,
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(
            &config.prefix,
            config.restricted_server.as_deref().map(ServerId::from),
        )
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn restricted_server(&self) -> Option<&ServerId> {
        self.restricted_server.as_ref()
    }

    /// Server-scope restriction. `None` means the event carries no server.
    fn server_allowed(&self, server: Option<&ServerId>) -> Result<(), IgnoreReason> {
        match (&self.restricted_server, server) {
            (None, _) => Ok(()),
            (Some(required), Some(actual)) if required == actual => Ok(()),
            (Some(_), _) => Err(IgnoreReason::WrongServer),
        }
    }
}

fn ignored(entry: &'static str, reason: IgnoreReason) -> DispatchResult {
    metrics::record_ignored(reason.as_str());
    trace!(entry, reason = reason.as_str(), "event ignored");
    Ok(DispatchOutcome::Ignored(reason))
}

/// Resolve, gate and run one command for an already-normalized event.
async fn execute(
    root: &RegisteredCommand,
    tokens: &[String],
    principal: &Principal,
    source: EventSource<'_>,
    host: &dyn HostSession,
) -> DispatchResult {
    let resolution = resolve(root.command(), tokens);
    let path = resolution.path_string();
    let span = spans::command(
        source.entry(),
        &path,
        &principal.name,
        source.server().map(ServerId::as_str),
    );

    run(root, &resolution, &path, principal, source, host)
        .instrument(span)
        .await
}

async fn run(
    root: &RegisteredCommand,
    resolution: &Resolution<'_>,
    path: &str,
    principal: &Principal,
    source: EventSource<'_>,
    host: &dyn HostSession,
) -> DispatchResult {
    let _timer = CommandTimer::new(root.name());
    let node = resolution.node;
    let mut responder = Responder::new(host, source);

    if let GateDecision::Denied(message) = check(node, principal) {
        metrics::record_permission_denied(root.name());
        debug!(principal = %principal.id, "permission denied");
        // Text replies would be public, so the text path stays silent.
        if source.is_interaction() {
            responder
                .commit(&ResponseDescriptor::text(message.clone()).ephemeral())
                .await?;
        }
        return Ok(DispatchOutcome::Denied(message));
    }

    root.record_use();
    let mut inv = Invocation {
        principal,
        args: resolution.remaining,
        command: node,
        path,
        source,
        responder,
    };

    let result = match node.handler() {
        Handler::Text(handler) => run_text(handler.as_ref(), &mut inv).await,
        Handler::Interaction(handler) if source.is_interaction() => {
            run_interaction(handler.as_ref(), &mut inv).await
        }
        Handler::Interaction(_) => Err(DispatchError::HandlerMismatch(format!(
            "{path} only answers interactions"
        ))),
    };

    match result {
        Ok(()) => Ok(DispatchOutcome::Dispatched {
            command: path.to_string(),
        }),
        Err(e) => {
            metrics::record_command_error(root.name(), e.error_code());
            warn!(error = %e, "command failed");
            Err(e)
        }
    }
}

/// Run a text handler. An interaction it left unanswered gets an ephemeral
/// deferral so the platform still sees exactly one initial response.
async fn run_text(
    handler: &dyn TextHandler,
    inv: &mut Invocation<'_>,
) -> Result<(), DispatchError> {
    handler.handle(inv).await?;
    if inv.source.is_interaction() && !inv.responder.is_committed() {
        inv.responder
            .commit(&ResponseDescriptor::deferred().ephemeral())
            .await?;
    }
    Ok(())
}

/// Commit the initial response, then run the follow-up phase.
async fn run_interaction(
    handler: &dyn InteractionHandler,
    inv: &mut Invocation<'_>,
) -> Result<(), DispatchError> {
    let descriptor = handler.initial_response(inv);
    let handle = inv.responder.commit(&descriptor).await?;
    handler.on_response_committed(&handle, inv).await?;
    Ok(())
}
