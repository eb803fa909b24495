//! Stdin/stdout host session for the demo bot.

use anyhow::{Context as _, bail};
use async_trait::async_trait;
use chatcmd::error::HostError;
use chatcmd::handlers::Registry;
use chatcmd::host::HostSession;
use chatcmd::proto::{
    ChannelId, CommandData, Embed, InboundEvent, InteractionEvent, InteractionHandle,
    MessagePayload, OptionValue, Principal, ResponseDescriptor, ResponseKind, ServerId,
    TextMessage,
};
use chatcmd::config::ConsoleConfig;
use std::sync::atomic::{AtomicU64, Ordering};

/// Prints everything the engine emits.
#[derive(Default)]
pub struct ConsoleHost {
    next_id: AtomicU64,
}

impl ConsoleHost {
    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait]
impl HostSession for ConsoleHost {
    async fn send_message(
        &self,
        channel: &ChannelId,
        payload: MessagePayload,
    ) -> Result<(), HostError> {
        print_payload(&format!("#{channel}"), &payload);
        Ok(())
    }

    async fn commit_interaction(
        &self,
        event: &InteractionEvent,
        response: &ResponseDescriptor,
    ) -> Result<InteractionHandle, HostError> {
        let label = if response.ephemeral { "(only you)" } else { "(reply)" };
        match &response.kind {
            ResponseKind::Deferred => println!("{label} {} is thinking...", event.name),
            _ => {
                if let Some(payload) = response.to_payload() {
                    print_payload(label, &payload);
                }
            }
        }
        Ok(InteractionHandle {
            interaction: event.id.clone(),
            token: format!("console-{}", self.next_id()),
            ephemeral: response.ephemeral,
            deferred: response.is_deferred(),
        })
    }

    async fn follow_up(
        &self,
        handle: &InteractionHandle,
        payload: MessagePayload,
    ) -> Result<(), HostError> {
        let label = if handle.ephemeral { "(only you)" } else { "(follow-up)" };
        print_payload(label, &payload);
        Ok(())
    }

    async fn publish_commands(
        &self,
        server: &ServerId,
        commands: &[CommandData],
    ) -> Result<(), HostError> {
        let names: Vec<_> = commands.iter().map(|c| format!("/{}", c.name)).collect();
        println!("[{server}] interaction commands: {}", names.join(" "));
        Ok(())
    }
}

fn print_payload(label: &str, payload: &MessagePayload) {
    if let Some(content) = payload.content.as_deref().filter(|c| !c.is_empty()) {
        println!("{label} {content}");
    }
    for embed in &payload.embeds {
        print_embed(label, embed);
    }
}

fn print_embed(label: &str, embed: &Embed) {
    if let Some(title) = &embed.title {
        println!("{label} == {title} ==");
    }
    if let Some(description) = &embed.description {
        println!("{label} {description}");
    }
    for field in &embed.fields {
        println!("{label}   {}: {}", field.name, field.value);
    }
    if let Some(footer) = &embed.footer {
        println!("{label} -- {footer}");
    }
}

/// Builds inbound events for the configured console identity.
pub struct ConsoleInput {
    principal: Principal,
    server: ServerId,
    channel: ChannelId,
    next_id: u64,
}

impl ConsoleInput {
    pub fn new(config: &ConsoleConfig) -> Self {
        let mut principal = Principal::new(config.user.as_str(), config.user.as_str());
        for &flag in &config.permissions {
            principal = principal.with_permission(flag);
        }
        for role in &config.roles {
            principal = principal.with_role(role.as_str());
        }
        Self {
            principal,
            server: ServerId::from(config.server.as_str()),
            channel: ChannelId::from(config.channel.as_str()),
            next_id: 0,
        }
    }

    pub fn server(&self) -> &ServerId {
        &self.server
    }

    pub fn text(&mut self, line: &str) -> InboundEvent {
        self.next_id += 1;
        TextMessage::new(
            self.next_id.to_string(),
            line,
            self.principal.clone(),
            self.server.clone(),
            self.channel.clone(),
        )
        .into()
    }

    /// Parse `/name [sub] [values...]`.
    ///
    /// The second word selects a sub command only when the named root has a
    /// child of that name. Values are matched to the selected node's
    /// declared arguments in order.
    pub fn interaction(&mut self, line: &str, registry: &Registry) -> anyhow::Result<InboundEvent> {
        let mut words = line.trim_start_matches('/').split_whitespace();
        let Some(name) = words.next() else {
            bail!("usage: /<command> [sub command] [values...]");
        };
        let root = registry
            .lookup_by_name(name)
            .with_context(|| format!("no command named {name}"))?;

        self.next_id += 1;
        let mut event = InteractionEvent::new(
            self.next_id.to_string(),
            root.name(),
            self.principal.clone(),
            self.server.clone(),
            self.channel.clone(),
        );

        let mut values: Vec<&str> = words.collect();
        let mut node = root.command();
        if let Some(child) = values.first().and_then(|w| node.child(w)) {
            event = event.with_subcommand(child.name());
            node = child;
            values.remove(0);
        }

        for (i, value) in values.into_iter().enumerate() {
            let name = node
                .arguments()
                .get(i)
                .map_or_else(|| format!("arg{i}"), |a| a.name().to_string());
            event = event.with_option(name, OptionValue::String(value.to_string()));
        }
        Ok(event.into())
    }
}
