//! Long-lived dispatch service.
//!
//! `DispatchService` owns the configuration, the command registry, the
//! router and the host session for one running bot. Multiple services can
//! coexist in one process; nothing here is global apart from metrics.

use crate::command::{Command, Permission, PermissionCache};
use crate::config::BotConfig;
use crate::error::{DispatchResult, HostError, RegistrationError};
use crate::handlers::{RegisteredCommand, Registry};
use crate::host::HostSession;
use crate::router::Router;
use crate::schema;
use chatcmd_proto::{InboundEvent, InteractionEvent, PlatformPermission, ServerId, TextMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// One bot's dispatch engine.
pub struct DispatchService {
    config: BotConfig,
    registry: Registry,
    router: Router,
    host: Arc<dyn HostSession>,
    permissions: PermissionCache,
}

impl DispatchService {
    pub fn new(config: BotConfig, host: Arc<dyn HostSession>) -> Self {
        let router = Router::from_config(&config);
        let permissions = PermissionCache::new(config.no_permission_message.as_str());
        Self {
            config,
            registry: Registry::new(),
            router,
            host,
            permissions,
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn prefix(&self) -> &str {
        self.router.prefix()
    }

    /// Shared permission requiring `flag`, using the configured denial message.
    pub fn flag_permission(&self, flag: PlatformPermission) -> Arc<dyn Permission> {
        self.permissions.flag(flag)
    }

    /// Register a top-level command. Commands with an interaction handler
    /// are registered for the interaction path, all others for text.
    pub fn register(&self, command: Command) -> Result<Arc<RegisteredCommand>, RegistrationError> {
        let as_interaction = command.handler().is_interaction();
        self.registry.register(command, as_interaction)
    }

    pub async fn handle_text(&self, msg: &TextMessage) -> DispatchResult {
        self.router
            .dispatch_text(&self.registry, self.host.as_ref(), msg)
            .await
    }

    pub async fn handle_interaction(&self, event: &InteractionEvent) -> DispatchResult {
        self.router
            .dispatch_interaction(&self.registry, self.host.as_ref(), event)
            .await
    }

    pub async fn handle(&self, event: &InboundEvent) -> DispatchResult {
        match event {
            InboundEvent::Text(msg) => self.handle_text(msg).await,
            InboundEvent::Interaction(ev) => self.handle_interaction(ev).await,
        }
    }

    /// Publish schemas for every interaction command to `server`.
    ///
    /// Returns how many were published. Nothing is sent when there are none.
    pub async fn publish_interaction_commands(&self, server: &ServerId) -> Result<usize, HostError> {
        let commands = schema::interaction_commands(&self.registry);
        if commands.is_empty() {
            debug!(server = %server, "no interaction commands to publish");
            return Ok(0);
        }
        self.host.publish_commands(server, &commands).await?;
        info!(server = %server, count = commands.len(), "Published interaction commands");
        Ok(commands.len())
    }

    /// Consume events until the channel closes, one task per event.
    ///
    /// A failing dispatch is logged and never stops the loop.
    pub async fn run(self: Arc<Self>, mut events: mpsc::Receiver<InboundEvent>) {
        info!(commands = self.registry.len(), "Dispatch service started");
        while let Some(event) = events.recv().await {
            let service = Arc::clone(&self);
            tokio::spawn(async move {
                if let Err(e) = service.handle(&event).await {
                    warn!(channel = %event.channel(), error = %e, code = e.error_code(), "dispatch failed");
                }
            });
        }
        info!("Dispatch service stopped");
    }
}
