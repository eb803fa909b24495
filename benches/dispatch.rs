use async_trait::async_trait;
use chatcmd::config::BotConfig;
use chatcmd::handlers::core::resolve;
use chatcmd::host::HostSession;
use chatcmd::proto::{
    ChannelId, CommandData, InteractionEvent, InteractionHandle, MessagePayload, Principal,
    ResponseDescriptor, ServerId, TextMessage,
};
use chatcmd::{
    Command, CommandBuilder, DispatchService, HandlerResult, HostError, Invocation, TextHandler,
};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

// Dispatch overhead only: the host discards output and handlers do nothing.

struct NullHost;

#[async_trait]
impl HostSession for NullHost {
    async fn send_message(&self, _: &ChannelId, _: MessagePayload) -> Result<(), HostError> {
        Ok(())
    }

    async fn commit_interaction(
        &self,
        event: &InteractionEvent,
        response: &ResponseDescriptor,
    ) -> Result<InteractionHandle, HostError> {
        Ok(InteractionHandle {
            interaction: event.id.clone(),
            token: String::new(),
            ephemeral: response.ephemeral,
            deferred: response.is_deferred(),
        })
    }

    async fn follow_up(&self, _: &InteractionHandle, _: MessagePayload) -> Result<(), HostError> {
        Ok(())
    }

    async fn publish_commands(&self, _: &ServerId, _: &[CommandData]) -> Result<(), HostError> {
        Ok(())
    }
}

struct Noop;

#[async_trait]
impl TextHandler for Noop {
    async fn handle(&self, _inv: &mut Invocation<'_>) -> HandlerResult {
        Ok(())
    }
}

/// `root` with `width` children, each with `width` leaves.
fn wide_tree(root: &str, width: usize) -> Command {
    let mut parent = CommandBuilder::new(root).text_handler(Noop);
    for i in 0..width {
        let mut child = CommandBuilder::new(format!("child{i}"))
            .alias(format!("c{i}"))
            .text_handler(Noop);
        for j in 0..width {
            child = child.subcommand(
                CommandBuilder::new(format!("leaf{j}"))
                    .text_handler(Noop)
                    .build_sub()
                    .unwrap(),
            );
        }
        parent = parent.subcommand(child.build_parent().unwrap());
    }
    parent.build_parent().unwrap()
}

fn resolve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(1));

    let tree = wide_tree("root", 32);
    let by_name: Vec<String> = ["child31", "leaf31", "extra"].iter().map(|s| s.to_string()).collect();
    let by_alias: Vec<String> = ["C31", "leaf0"].iter().map(|s| s.to_string()).collect();

    group.bench_function("names", |b| b.iter(|| resolve(black_box(&tree), black_box(&by_name))));
    group.bench_function("aliases", |b| b.iter(|| resolve(black_box(&tree), black_box(&by_alias))));

    group.finish();
}

fn text_dispatch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = BotConfig {
        prefix: "s!".to_string(),
        ..BotConfig::default()
    };
    let service = DispatchService::new(config, Arc::new(NullHost));
    for i in 0..64 {
        service.register(wide_tree(&format!("cmd{i}"), 4)).unwrap();
    }

    let hit = TextMessage::new("1", "s!cmd63 c3 leaf3 arg", Principal::new("1", "bench"), "s", "c");
    let miss = TextMessage::new("2", "hello everyone", Principal::new("1", "bench"), "s", "c");

    group.bench_function("text_hit", |b| {
        b.to_async(&rt).iter(|| service.handle_text(black_box(&hit)))
    });
    group.bench_function("text_miss", |b| {
        b.to_async(&rt).iter(|| service.handle_text(black_box(&miss)))
    });

    group.finish();
}

criterion_group!(benches, resolve_benchmark, text_dispatch_benchmark);
criterion_main!(benches);
