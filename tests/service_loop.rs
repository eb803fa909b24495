//! Integration tests for the event loop.

mod common;

use chatcmd::CommandBuilder;
use chatcmd::proto::InboundEvent;
use common::{CallLog, Recorder, member, service, text};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_failing_command_does_not_stop_the_loop() {
    let (service, host) = service(false);
    let log = CallLog::default();
    service
        .register(
            CommandBuilder::new("boom")
                .text_handler(Recorder::new("boom", &log).failing())
                .build_parent()
                .unwrap(),
        )
        .unwrap();
    service
        .register(
            CommandBuilder::new("ok")
                .text_handler(Recorder::new("ok", &log).replying("fine"))
                .build_parent()
                .unwrap(),
        )
        .unwrap();

    let service = Arc::new(service);
    let (tx, rx) = mpsc::channel(8);
    let running = tokio::spawn(Arc::clone(&service).run(rx));

    tx.send(InboundEvent::from(text("s!boom", member("alice")))).await.unwrap();
    tx.send(InboundEvent::from(text("hello there", member("alice")))).await.unwrap();
    tx.send(InboundEvent::from(text("s!ok", member("alice")))).await.unwrap();
    drop(tx);

    tokio::time::timeout(Duration::from_secs(5), running)
        .await
        .expect("loop did not stop after the channel closed")
        .unwrap();

    // Spawned dispatches may still be finishing.
    for _ in 0..50 {
        if log.calls().len() == 2 && host.messages().len() == 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let mut labels = log.labels();
    labels.sort();
    assert_eq!(labels, ["boom", "ok"]);
    assert_eq!(host.messages(), ["fine"]);
}

#[tokio::test]
async fn test_concurrent_dispatch_counts_every_use() {
    let (service, _host) = service(false);
    let log = CallLog::default();
    service
        .register(
            CommandBuilder::new("count")
                .text_handler(Recorder::new("count", &log))
                .build_parent()
                .unwrap(),
        )
        .unwrap();
    let service = Arc::new(service);

    let mut tasks = Vec::new();
    for i in 0..32 {
        let service = Arc::clone(&service);
        tasks.push(tokio::spawn(async move {
            let msg = text(&format!("s!count {i}"), member("alice"));
            service.handle_text(&msg).await.unwrap().is_dispatched()
        }));
    }
    for task in tasks {
        assert!(task.await.unwrap());
    }

    assert_eq!(log.calls().len(), 32);
    assert_eq!(service.registry().command_stats(), [("count".to_string(), 32)]);
}
