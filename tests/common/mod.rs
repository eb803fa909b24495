//! Integration test common infrastructure.
//!
//! Provides a recording host session, recording handlers, and helpers for
//! building services and inbound events.

pub mod handlers;
pub mod host;

#[allow(unused_imports)]
pub use handlers::{Call, CallLog, Recorder, TwoPhase};
#[allow(unused_imports)]
pub use host::{Outbound, RecordingHost};

use chatcmd::DispatchService;
use chatcmd::config::BotConfig;
use chatcmd::proto::{InteractionEvent, Principal, TextMessage};
use std::sync::Arc;

pub const SERVER: &str = "guild-1";
pub const CHANNEL: &str = "general";

/// A service with prefix `s!`, optionally restricted to [`SERVER`].
#[allow(dead_code)]
pub fn service(restricted: bool) -> (DispatchService, Arc<RecordingHost>) {
    let config = BotConfig {
        prefix: "s!".to_string(),
        restricted_server: restricted.then(|| SERVER.to_string()),
        no_permission_message: "You need %perm% to use this.".to_string(),
    };
    let host = Arc::new(RecordingHost::default());
    (DispatchService::new(config, host.clone()), host)
}

#[allow(dead_code)]
pub fn member(name: &str) -> Principal {
    Principal::new(format!("id-{name}"), name)
}

/// A message from `author` in [`SERVER`].
#[allow(dead_code)]
pub fn text(content: &str, author: Principal) -> TextMessage {
    TextMessage::new("m1", content, author, SERVER, CHANNEL)
}

/// An interaction from `member` in [`SERVER`].
#[allow(dead_code)]
pub fn interaction(name: &str, member: Principal) -> InteractionEvent {
    InteractionEvent::new("i1", name, member, SERVER, CHANNEL)
}
