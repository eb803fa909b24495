//! Handlers that record how they were invoked.

use async_trait::async_trait;
use chatcmd::proto::{InteractionHandle, MessagePayload, ResponseDescriptor};
use chatcmd::{HandlerError, HandlerResult, InteractionHandler, Invocation, TextHandler};
use parking_lot::Mutex;
use std::sync::Arc;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub label: String,
    pub path: String,
    pub args: Vec<String>,
}

/// Shared log of invocations across every recorder in a tree.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

#[allow(dead_code)]
impl CallLog {
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().clone()
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.lock().iter().map(|c| c.label.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    fn push(&self, label: &str, inv: &Invocation<'_>) {
        self.0.lock().push(Call {
            label: label.to_string(),
            path: inv.path.to_string(),
            args: inv.args.to_vec(),
        });
    }
}

/// Text handler that records its call and optionally replies or fails.
pub struct Recorder {
    label: String,
    log: CallLog,
    reply: Option<String>,
    fail: bool,
}

#[allow(dead_code)]
impl Recorder {
    pub fn new(label: &str, log: &CallLog) -> Self {
        Self {
            label: label.to_string(),
            log: log.clone(),
            reply: None,
            fail: false,
        }
    }

    pub fn replying(mut self, reply: &str) -> Self {
        self.reply = Some(reply.to_string());
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl TextHandler for Recorder {
    async fn handle(&self, inv: &mut Invocation<'_>) -> HandlerResult {
        self.log.push(&self.label, inv);
        if self.fail {
            return Err(HandlerError::Internal(format!("{} failed", self.label)));
        }
        if let Some(reply) = &self.reply {
            inv.reply(reply.as_str()).await?;
        }
        Ok(())
    }
}

/// Interaction handler with a fixed initial response and optional follow-ups.
pub struct TwoPhase {
    label: String,
    log: CallLog,
    initial: ResponseDescriptor,
    follow_ups: Vec<String>,
    handles: Arc<Mutex<Vec<InteractionHandle>>>,
    /// Try to commit a second time from the follow-up phase.
    commit_twice: bool,
}

#[allow(dead_code)]
impl TwoPhase {
    pub fn new(label: &str, log: &CallLog, initial: ResponseDescriptor) -> Self {
        Self {
            label: label.to_string(),
            log: log.clone(),
            initial,
            follow_ups: Vec::new(),
            handles: Arc::default(),
            commit_twice: false,
        }
    }

    pub fn follow_up(mut self, text: &str) -> Self {
        self.follow_ups.push(text.to_string());
        self
    }

    pub fn commit_twice(mut self) -> Self {
        self.commit_twice = true;
        self
    }

    /// Handles received by the follow-up phase.
    pub fn handles(&self) -> Arc<Mutex<Vec<InteractionHandle>>> {
        Arc::clone(&self.handles)
    }
}

#[async_trait]
impl InteractionHandler for TwoPhase {
    fn initial_response(&self, inv: &Invocation<'_>) -> ResponseDescriptor {
        self.log.push(&self.label, inv);
        self.initial.clone()
    }

    async fn on_response_committed(
        &self,
        handle: &InteractionHandle,
        inv: &mut Invocation<'_>,
    ) -> HandlerResult {
        self.handles.lock().push(handle.clone());
        if self.commit_twice {
            inv.responder.commit(&self.initial).await?;
        }
        for text in &self.follow_ups {
            inv.send(MessagePayload::text(text.as_str())).await?;
        }
        Ok(())
    }
}
