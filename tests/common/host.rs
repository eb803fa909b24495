//! Host session that records every outbound call.

use async_trait::async_trait;
use chatcmd::HostError;
use chatcmd::host::HostSession;
use chatcmd::proto::{
    ChannelId, CommandData, InteractionEvent, InteractionHandle, InteractionId, MessagePayload,
    ResponseDescriptor, ServerId,
};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    Message {
        channel: ChannelId,
        payload: MessagePayload,
    },
    Commit {
        interaction: InteractionId,
        response: ResponseDescriptor,
    },
    FollowUp {
        token: String,
        payload: MessagePayload,
    },
    Publish {
        server: ServerId,
        commands: Vec<CommandData>,
    },
}

#[derive(Default)]
pub struct RecordingHost {
    log: Mutex<Vec<Outbound>>,
    /// When set, every call fails with `HostError::Closed`.
    closed: Mutex<bool>,
}

#[allow(dead_code)]
impl RecordingHost {
    pub fn outbound(&self) -> Vec<Outbound> {
        self.log.lock().clone()
    }

    pub fn commits(&self) -> Vec<ResponseDescriptor> {
        self.log
            .lock()
            .iter()
            .filter_map(|o| match o {
                Outbound::Commit { response, .. } => Some(response.clone()),
                _ => None,
            })
            .collect()
    }

    /// Text content of every channel message, in order.
    pub fn messages(&self) -> Vec<String> {
        self.log
            .lock()
            .iter()
            .filter_map(|o| match o {
                Outbound::Message { payload, .. } => payload.content.clone(),
                _ => None,
            })
            .collect()
    }

    pub fn close(&self) {
        *self.closed.lock() = true;
    }

    fn check_open(&self) -> Result<(), HostError> {
        if *self.closed.lock() {
            Err(HostError::Closed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl HostSession for RecordingHost {
    async fn send_message(
        &self,
        channel: &ChannelId,
        payload: MessagePayload,
    ) -> Result<(), HostError> {
        self.check_open()?;
        self.log.lock().push(Outbound::Message {
            channel: channel.clone(),
            payload,
        });
        Ok(())
    }

    async fn commit_interaction(
        &self,
        event: &InteractionEvent,
        response: &ResponseDescriptor,
    ) -> Result<InteractionHandle, HostError> {
        self.check_open()?;
        self.log.lock().push(Outbound::Commit {
            interaction: event.id.clone(),
            response: response.clone(),
        });
        Ok(InteractionHandle {
            interaction: event.id.clone(),
            token: format!("token-{}", event.id),
            ephemeral: response.ephemeral,
            deferred: response.is_deferred(),
        })
    }

    async fn follow_up(
        &self,
        handle: &InteractionHandle,
        payload: MessagePayload,
    ) -> Result<(), HostError> {
        self.check_open()?;
        self.log.lock().push(Outbound::FollowUp {
            token: handle.token.clone(),
            payload,
        });
        Ok(())
    }

    async fn publish_commands(
        &self,
        server: &ServerId,
        commands: &[CommandData],
    ) -> Result<(), HostError> {
        self.check_open()?;
        self.log.lock().push(Outbound::Publish {
            server: server.clone(),
            commands: commands.to_vec(),
        });
        Ok(())
    }
}
