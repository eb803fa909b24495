//! Sample command tree registered by the demo bot.

use async_trait::async_trait;
use chatcmd::proto::{ArgumentType, Embed, InteractionHandle, PlatformPermission, ResponseDescriptor};
use chatcmd::{
    CommandArgument, CommandBuilder, DispatchService, HandlerResult,
    InteractionHandler, Invocation, RegistrationError, TextHandler,
};

struct SayUsage;

#[async_trait]
impl TextHandler for SayUsage {
    async fn handle(&self, inv: &mut Invocation<'_>) -> HandlerResult {
        let usage = inv.command.usage().unwrap_or("say <greetings|farewell>").to_string();
        inv.reply(format!("Usage: {usage}")).await
    }
}

struct Greetings;

#[async_trait]
impl TextHandler for Greetings {
    async fn handle(&self, inv: &mut Invocation<'_>) -> HandlerResult {
        let mut who = inv.rest();
        if who.is_empty() {
            who = inv.principal.name.clone();
        }
        inv.reply(format!("Hello, {who}!")).await
    }
}

struct Farewell;

#[async_trait]
impl TextHandler for Farewell {
    async fn handle(&self, inv: &mut Invocation<'_>) -> HandlerResult {
        inv.reply(format!("Goodbye, {}!", inv.principal.name)).await
    }
}

/// Defers, then answers with an embed in the follow-up phase.
struct Ping;

#[async_trait]
impl InteractionHandler for Ping {
    fn initial_response(&self, _inv: &Invocation<'_>) -> ResponseDescriptor {
        ResponseDescriptor::deferred().ephemeral()
    }

    async fn on_response_committed(
        &self,
        handle: &InteractionHandle,
        inv: &mut Invocation<'_>,
    ) -> HandlerResult {
        let embed = Embed::new()
            .title("Pong!")
            .field("principal", inv.principal.name.as_str(), true)
            .footer(format!("interaction {}", handle.interaction));
        inv.reply_embeds(vec![embed]).await
    }
}

struct Purge;

#[async_trait]
impl TextHandler for Purge {
    async fn handle(&self, inv: &mut Invocation<'_>) -> HandlerResult {
        let count: u32 = match inv.require_arg(0)?.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                return inv.reply("Usage: purge <count>").await;
            }
        };
        inv.reply(format!("Purged {count} messages.")).await
    }
}

/// Register the sample tree on `service`.
pub fn register(service: &DispatchService) -> Result<(), RegistrationError> {
    let prefix = service.prefix().to_string();

    let greetings = CommandBuilder::new("greetings")
        .aliases(["hi", "hello"])
        .description("Say hello")
        .argument(CommandArgument::new(ArgumentType::String, "name", "Who to greet", false))
        .text_handler(Greetings)
        .build_sub()?;
    let farewell = CommandBuilder::new("farewell")
        .alias("bye")
        .description("Say goodbye")
        .text_handler(Farewell)
        .build_sub()?;
    service.register(
        CommandBuilder::new("say")
            .alias("s")
            .description("Say something")
            .usage(format!("{prefix}say <greetings|farewell>"))
            .text_handler(SayUsage)
            .subcommand(greetings)
            .subcommand(farewell)
            .build_parent()?,
    )?;

    service.register(
        CommandBuilder::new("ping")
            .description("Check that the bot is alive")
            .interaction_handler(Ping)
            .build_parent()?,
    )?;

    service.register(
        CommandBuilder::new("purge")
            .description("Delete recent messages")
            .usage(format!("{prefix}purge <count>"))
            .argument(CommandArgument::new(ArgumentType::Integer, "count", "How many", true))
            .permission(service.flag_permission(PlatformPermission::ManageMessages))
            .text_handler(Purge)
            .build_parent()?,
    )?;

    Ok(())
}
